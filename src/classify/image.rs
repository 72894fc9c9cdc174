//! Image request detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::IMAGE_EXTENSIONS;

/// Whole-path pattern: anything, a dot, then an image extension at the very end.
static IMAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)^.*\.(?:{})$", IMAGE_EXTENSIONS.join("|"));
    Regex::new(&pattern).expect("image path pattern is a valid regex")
});

/// Returns `true` if `request_path` names a jpg, jpeg, png, or gif resource.
///
/// The extension is matched case-insensitively and must end the path; query
/// strings or anything else after the extension make it a non-image.
pub fn is_image_request(request_path: &str) -> bool {
    IMAGE_PATH.is_match(request_path)
}
