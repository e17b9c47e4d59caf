pub mod event_template;
pub mod receipt;
pub mod recipe;
pub mod trip;
