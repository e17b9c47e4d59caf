/// A catalog entry describing a kind of activity and what it nominally costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    /// Always lowercase
    pub category: &'static str,
}

impl EventTemplate {
    pub const fn new(
        title: &'static str,
        description: &'static str,
        base_cost: f64,
        category: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            base_cost,
            category,
        }
    }

    /// Loose substring match against the description or the category
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.description.to_lowercase().contains(keyword) || self.category.contains(keyword)
    }
}
