//! Time-expression extraction
//!
//! Three pattern classes are recognized: explicit month/day dates,
//! relative weekday mentions, and bare clock times followed by a
//! confirmation phrase. Candidates from all three are ordered by where
//! they appear in the text; the earliest becomes the original time and
//! the rest become proposed alternatives.

use crate::config::ParserConfig;
use crate::resolve::DateResolver;
use crate::types::{TimeBasis, TimeCandidate, TimeExtractionResult};
use chrono::{Datelike, Duration, NaiveDateTime};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::trace;

static EXPLICIT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?)\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:AM|PM))\b",
    )
    .unwrap()
});

static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:next\s+)?(?:Mon|Tues|Wednes|Thurs|Fri|Satur|Sun)(?:day)?)'?s?\s+(?:at\s+)?(\d{1,2}(?::\d{2})?\s*(?:AM|PM))\b",
    )
    .unwrap()
});

static CONFIRMATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2}(?::\d{2})?\s*(?:AM|PM))\s+(?:works|is\s+fine|is\s+good|is\s+perfect|is\s+set|confirmed)\b",
    )
    .unwrap()
});

/// Built-in uncertainty cues; "flexible" is handled separately because
/// it carries a negation guard.
const UNCERTAINTY_CUES: &[&str] = &[
    r"possible",
    r"possibly",
    r"would it be",
    r"can we",
    r"maybe",
    r"not sure",
    r"if possible",
    r"(?:could|would) you",
    r"available",
];

static DEFAULT_UNCERTAINTY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    UNCERTAINTY_CUES
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

static FLEXIBLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)flexible").unwrap());

/// Scan one email's text for time expressions and resolve them against
/// `now` with a future-date preference.
///
/// Expressions the resolver cannot turn into a timestamp are dropped
/// silently; they never abort extraction for the rest of the email.
pub fn extract_times<R: DateResolver>(
    text: &str,
    now: NaiveDateTime,
    resolver: &R,
    config: &ParserConfig,
) -> TimeExtractionResult {
    let mut candidates: Vec<TimeCandidate> = Vec::new();

    for caps in EXPLICIT_DATE.captures_iter(text) {
        let Some(matched) = caps.get(0) else {
            continue;
        };
        let expression = format!("{} {}", &caps[1], &caps[2]);
        match resolver.resolve(&expression, now, true) {
            Some(at) => candidates.push(TimeCandidate {
                at,
                basis: TimeBasis::ExplicitDate,
                matched: matched.as_str().to_string(),
                position: matched.start(),
            }),
            None => trace!(%expression, "dropping unresolvable explicit date"),
        }
    }

    for caps in WEEKDAY.captures_iter(text) {
        let Some(matched) = caps.get(0) else {
            continue;
        };
        let day_phrase = caps[1].to_lowercase();
        let Some(target) = weekday_number(&day_phrase) else {
            continue;
        };

        let current = i64::from(now.weekday().num_days_from_monday());
        let mut days_ahead = i64::from(target) - current;
        if day_phrase.contains("next") {
            days_ahead += 7;
        } else if days_ahead <= 0 {
            days_ahead += 7;
        }

        let date = now.date() + Duration::days(days_ahead);
        let expression = format!("{} {}", date.format("%Y-%m-%d"), &caps[2]);
        match resolver.resolve(&expression, now, true) {
            Some(at) => candidates.push(TimeCandidate {
                at,
                basis: TimeBasis::RelativeWeekday,
                matched: matched.as_str().to_string(),
                position: matched.start(),
            }),
            None => trace!(%expression, "dropping unresolvable weekday time"),
        }
    }

    for caps in CONFIRMATION.captures_iter(text) {
        let Some(matched) = caps.get(0) else {
            continue;
        };
        match resolver.resolve(&caps[1], now, true) {
            Some(at) => candidates.push(TimeCandidate {
                at,
                basis: TimeBasis::Confirmation,
                matched: matched.as_str().to_string(),
                position: matched.start(),
            }),
            None => trace!("dropping unresolvable confirmation time: {}", &caps[1]),
        }
    }

    candidates.sort_by_key(|c| c.position);

    let mut iter = candidates.into_iter();
    let original_time = iter.next();
    let proposed_times: Vec<TimeCandidate> = iter.collect();
    TimeExtractionResult {
        alternative_times_suggested: !proposed_times.is_empty(),
        uncertainty: detect_uncertainty(text, config),
        original_time,
        proposed_times,
    }
}

/// True when the text carries any scheduling-uncertainty cue.
///
/// Matching is case-insensitive and stops at the first hit. The
/// "flexible" cue is ignored when immediately preceded by "not".
/// Configured override patterns replace the whole built-in set.
#[must_use]
pub fn detect_uncertainty(text: &str, config: &ParserConfig) -> bool {
    if let Some(patterns) = &config.uncertainty_patterns {
        return patterns.iter().any(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .is_ok_and(|re| re.is_match(text))
        });
    }

    if DEFAULT_UNCERTAINTY.iter().any(|re| re.is_match(text)) {
        return true;
    }
    FLEXIBLE
        .find_iter(text)
        .any(|m| !preceded_by_not(text, m.start()))
}

fn preceded_by_not(text: &str, start: usize) -> bool {
    start >= 4
        && text
            .get(start - 4..start)
            .is_some_and(|p| p.eq_ignore_ascii_case("not "))
}

fn weekday_number(phrase: &str) -> Option<u32> {
    // Stems mirror the pattern alternation; Monday is day 0.
    const STEMS: &[(&str, u32)] = &[
        ("mon", 0),
        ("tues", 1),
        ("wednes", 2),
        ("thurs", 3),
        ("fri", 4),
        ("satur", 5),
        ("sun", 6),
    ];
    STEMS
        .iter()
        .find(|(stem, _)| phrase.contains(stem))
        .map(|(_, n)| *n)
}
