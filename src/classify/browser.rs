//! Browser detection from User-Agent strings.
//!
//! Detection is a first-match walk over `BROWSER_RULES`. Real User-Agent strings
//! carry several engine tokens at once (Chrome sends "Safari", Edge sends
//! "Chrome"), so the order of the table decides the result.

use std::fmt;

use strum_macros::EnumIter as EnumIterMacro;

/// Browser categories a request can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Browser {
    Chrome,
    Firefox,
    InternetExplorer,
    Safari,
    /// Anything no rule claims, Edge included
    Other,
}

impl Browser {
    /// Name used in report output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::InternetExplorer => "Internet Explorer",
            Browser::Safari => "Safari",
            Browser::Other => "Other",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the detection table: if `matches` accepts the User-Agent, the
/// request is attributed to `browser`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserRule {
    pub browser: Browser,
    pub matches: fn(&str) -> bool,
}

fn is_chrome(ua: &str) -> bool {
    ua.contains("Chrome") && !ua.contains("Edge")
}

fn is_firefox(ua: &str) -> bool {
    ua.contains("Firefox")
}

fn is_internet_explorer(ua: &str) -> bool {
    ua.contains("MSIE") || ua.contains("Trident/")
}

fn is_safari(ua: &str) -> bool {
    ua.contains("Safari") && !ua.contains("Chrome")
}

/// Detection rules in priority order. A User-Agent no rule accepts is `Other`.
pub const BROWSER_RULES: &[BrowserRule] = &[
    BrowserRule {
        browser: Browser::Chrome,
        matches: is_chrome,
    },
    BrowserRule {
        browser: Browser::Firefox,
        matches: is_firefox,
    },
    BrowserRule {
        browser: Browser::InternetExplorer,
        matches: is_internet_explorer,
    },
    BrowserRule {
        browser: Browser::Safari,
        matches: is_safari,
    },
];

/// Attributes a User-Agent string to exactly one browser category.
///
/// Token checks are case-sensitive substring matches.
pub fn detect_browser(user_agent: &str) -> Browser {
    BROWSER_RULES
        .iter()
        .find(|rule| (rule.matches)(user_agent))
        .map(|rule| rule.browser)
        .unwrap_or(Browser::Other)
}
