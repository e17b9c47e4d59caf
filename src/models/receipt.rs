use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReceiptItem {
    pub item: String,
    pub price: f64,
}

/// Grocery catalog entry with its plausible shelf price range
#[derive(Debug, Clone, Copy)]
pub struct GroceryItem {
    pub name: &'static str,
    pub min_price: f64,
    pub max_price: f64,
}
