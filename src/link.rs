//! Conferencing link detection

use regex::Regex;
use std::sync::LazyLock;

static LINK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Known conferencing hostnames, bare or behind a subdomain
        r#"(?i)https?://[^\s<>"]*?(?:zoom|meet|teams|webex|gotomeeting|calendly|webinar)\.[^\s<>"]+"#,
        // Join/meeting-style path segments on any host
        r#"(?i)https?://[^\s<>"]+/[^\s<>"]*?(?:join|meeting|conf)[^\s<>"]*"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// First conferencing-style URL in the text, verbatim.
#[must_use]
pub fn extract_meeting_link(text: &str) -> Option<String> {
    LINK_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}
