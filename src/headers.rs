//! Header extraction from the top of a plain-text email

use crate::types::Headers;

/// Headers are only looked for this far into the text
const HEADER_SCAN_LINES: usize = 10;

/// Pull `From`, `To`, and `Subject` out of the first lines of an email.
///
/// Prefix matching is case-insensitive and the first occurrence of each
/// header wins. Scanning stops early once all three are found. Missing
/// headers stay `None`.
#[must_use]
pub fn extract_headers(text: &str) -> Headers {
    let mut headers = Headers::default();

    for line in text.lines().take(HEADER_SCAN_LINES) {
        let line = line.trim();

        if headers.from.is_none()
            && let Some(rest) = strip_prefix_ci(line, "from:")
        {
            headers.from = Some(rest.trim().to_string());
        } else if headers.to.is_none()
            && let Some(rest) = strip_prefix_ci(line, "to:")
        {
            headers.to = Some(rest.trim().to_string());
        } else if headers.subject.is_none()
            && let Some(rest) = strip_prefix_ci(line, "subject:")
        {
            headers.subject = Some(rest.trim().to_string());
        }

        if headers.is_complete() {
            break;
        }
    }

    headers
}

/// The validity predicate shared with the thread splitter: a chunk is a
/// real email only when all three headers are present.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    extract_headers(text).is_complete()
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}
