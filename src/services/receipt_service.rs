use rand::seq::index;
use rand::Rng;

use crate::models::receipt::{GroceryItem, ReceiptItem};

const MIN_ITEMS: usize = 2;
const MAX_ITEMS: usize = 10;

const fn grocery(name: &'static str, min_price: f64, max_price: f64) -> GroceryItem {
    GroceryItem {
        name,
        min_price,
        max_price,
    }
}

pub static GROCERY_ITEMS: [GroceryItem; 20] = [
    grocery("Milk", 2.99, 5.99),
    grocery("Bread", 2.49, 4.99),
    grocery("Eggs", 3.49, 6.99),
    grocery("Bananas", 0.99, 2.99),
    grocery("Apples", 3.99, 6.99),
    grocery("Chicken Breast", 7.99, 12.99),
    grocery("Ground Beef", 5.99, 10.99),
    grocery("Pasta", 1.49, 3.99),
    grocery("Tomato Sauce", 1.99, 4.99),
    grocery("Cereal", 3.49, 6.99),
    grocery("Orange Juice", 2.99, 5.99),
    grocery("Coffee", 6.99, 12.99),
    grocery("Cheese", 4.99, 8.99),
    grocery("Yogurt", 1.99, 4.99),
    grocery("Potato Chips", 2.99, 4.99),
    grocery("Ice Cream", 3.99, 7.99),
    grocery("Frozen Pizza", 4.99, 9.99),
    grocery("Paper Towels", 2.99, 6.99),
    grocery("Toilet Paper", 4.99, 12.99),
    grocery("Laundry Detergent", 7.99, 15.99),
];

/// Stand-in for real receipt recognition: a handful of distinct grocery
/// lines with plausible prices. The uploaded image is never looked at.
pub fn mock_scan<R: Rng + ?Sized>(rng: &mut R) -> Vec<ReceiptItem> {
    let count = rng.gen_range(MIN_ITEMS..=MAX_ITEMS);

    index::sample(rng, GROCERY_ITEMS.len(), count)
        .into_iter()
        .map(|i| {
            let grocery = &GROCERY_ITEMS[i];
            let price = rng.gen_range(grocery.min_price..=grocery.max_price);
            ReceiptItem {
                item: grocery.name.to_string(),
                price: (price * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_mock_scan_items_are_distinct_and_priced_in_range() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let items = mock_scan(&mut rng);
            assert!((MIN_ITEMS..=MAX_ITEMS).contains(&items.len()));

            let names: HashSet<_> = items.iter().map(|i| i.item.as_str()).collect();
            assert_eq!(names.len(), items.len());

            for item in &items {
                let grocery = GROCERY_ITEMS.iter().find(|g| g.name == item.item).unwrap();
                // rounding to cents can nudge a price just past the raw bound
                assert!(item.price >= grocery.min_price - 0.005);
                assert!(item.price <= grocery.max_price + 0.005);
                assert_eq!((item.price * 100.0).round() / 100.0, item.price);
            }
        }
    }
}
