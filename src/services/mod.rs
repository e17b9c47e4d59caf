pub mod activity_suggestion_service;
pub mod event_catalog;
pub mod event_count;
pub mod ingredient_service;
pub mod interest_filter;
pub mod receipt_service;
