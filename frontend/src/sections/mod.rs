pub mod about;
pub mod contact;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod process;
pub mod projects;
pub mod recent_work;
pub mod reviews;
pub mod services;
pub mod stats;
