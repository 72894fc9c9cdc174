//! Per-record classifiers.
//!
//! Each classifier is a pure function over one field of a record:
//! - `image`: does the request path name an image
//! - `browser`: which browser sent the request
//! - `hour`: which hour of day the request falls in

mod browser;
mod hour;
mod image;

// Re-export public API
pub use browser::{detect_browser, Browser, BrowserRule, BROWSER_RULES};
pub use hour::extract_hour;
pub use image::is_image_request;
