//! Delegation cue detection
//!
//! Two layers: a cue accumulator over request-to-take-over phrasing,
//! and a richer "my associate Name (email)" form that also captures the
//! delegate's name. Either way the reported address is never the
//! sender's or recipient's own.

use crate::types::{DelegateInfo, Headers};
use regex::Regex;
use std::sync::LazyLock;

/// Each distinct matching cue pattern adds this much confidence
const CUE_INCREMENT: f64 = 0.25;

static DELEGATION_CUES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:can|could|would)\s+(?:you|someone)\s+(?:take|handle|cover)",
        r"(?i)(?:need|looking\s+for)\s+(?:someone|anybody|anyone)\s+to\s+(?:take|handle|cover)",
        r"(?i)(?:please|kindly)\s+(?:take|handle|cover)\s+(?:this|the|my)",
        r"(?i)(?:delegate|transfer|assign)\s+(?:to|this|the)",
        r"(?i)step\s+in[^.]*?[\w.-]+@[\w.-]+\.\w+",
        r"(?i)[\w.-]+@[\w.-]+\.\w+\s*(?:can|will|should)\s+(?:handle|take\s+over|step\s+in)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ASSOCIATE_FORMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:my|the)\s+associate,?\s*(\w+)\s*\(([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[A-Za-z]{2,})\)",
        r"(?i)(?:my|the)\s+associate,?\s*(\w+)[^(]*?([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[A-Za-z]{2,})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static EMAIL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

/// Detect delegation in an email's text.
///
/// The associate form takes precedence when it matches; otherwise the
/// cue accumulator must be positive and at least one address other than
/// the email's own sender/recipient must be present.
#[must_use]
pub fn extract_delegate(text: &str, headers: &Headers) -> Option<DelegateInfo> {
    let own = own_addresses(headers);
    let confidence = cue_confidence(text);

    for re in ASSOCIATE_FORMS.iter() {
        if let Some(caps) = re.captures(text) {
            let email = caps[2].to_string();
            if !own.contains(&email.to_lowercase()) {
                return Some(DelegateInfo {
                    delegate_name: Some(caps[1].to_string()),
                    delegate_email: Some(email),
                    confidence,
                });
            }
        }
    }

    if confidence <= 0.0 {
        return None;
    }
    let delegate = EMAIL_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .find(|addr| !own.contains(&addr.to_lowercase()))?;

    Some(DelegateInfo {
        delegate_name: None,
        delegate_email: Some(delegate),
        confidence,
    })
}

#[allow(clippy::cast_precision_loss)]
fn cue_confidence(text: &str) -> f64 {
    let hits = DELEGATION_CUES.iter().filter(|re| re.is_match(text)).count();
    (hits as f64 * CUE_INCREMENT).min(1.0)
}

/// Sender and recipient addresses, lowercased, pulled out of the header
/// values (which may carry display names around the address).
fn own_addresses(headers: &Headers) -> Vec<String> {
    let mut own = Vec::new();
    for value in [headers.from.as_deref(), headers.to.as_deref()]
        .into_iter()
        .flatten()
    {
        for m in EMAIL_TOKEN.find_iter(value) {
            own.push(m.as_str().to_lowercase());
        }
    }
    own
}
