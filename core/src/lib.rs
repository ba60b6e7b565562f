//! View-state logic of the portfolio landing page.
//!
//! Nothing in here touches the browser. The `frontend` crate feeds DOM
//! measurements, timestamps and input events in and applies the results.

pub mod analytics;
pub mod carousel;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod i18n;
pub mod marquee;
pub mod navigation;
pub mod section;

pub use config::SiteConfig;
pub use navigation::{Fragment, Navigator, ScrollRequest};
pub use section::{SectionId, SectionLayout, SectionRegistry, SectionSpan};
