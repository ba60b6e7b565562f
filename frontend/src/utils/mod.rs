pub mod analytics;
pub mod clipboard;
pub mod dom;
