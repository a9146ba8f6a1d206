//! Probable-time selection across competing candidates
//!
//! When an email mentions several times, each proposed candidate is
//! scored by contextual cues in the raw text and the single highest
//! scorer is reported. Ties go to the candidate seen first in the text.

use crate::types::{TimeCandidate, TimeExtractionResult};
use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::RegexBuilder;

const MONTH_DAY_WEIGHT: f64 = 0.8;
const HOUR_MERIDIEM_WEIGHT: f64 = 0.6;
const SAME_DATE_BONUS: f64 = 0.3;
const BUSINESS_HOURS_BONUS: f64 = 0.2;
const LATER_THAN_ORIGINAL_BONUS: f64 = 0.4;

/// Preference words add their weight once per email; they boost every
/// candidate equally, so differentiation comes from the date- and
/// hour-specific patterns.
const PREFERENCE_CUES: &[(&str, f64)] = &[
    ("prefer", 0.7),
    ("suggest", 0.6),
    ("recommend", 0.7),
    ("better", 0.5),
    ("ideal", 0.8),
    ("good", 0.4),
];

/// Pick the single most probable meeting time from an extraction result.
///
/// With no candidates at all this is `None`; with only an original time
/// or a single proposal that candidate is returned unscored.
#[must_use]
pub fn most_probable_time(times: &TimeExtractionResult, text: &str) -> Option<NaiveDateTime> {
    let original = times.original_time.as_ref().map(|c| c.at);

    if times.proposed_times.is_empty() {
        return original;
    }
    if times.proposed_times.len() == 1 {
        return Some(times.proposed_times[0].at);
    }

    let lower = text.to_lowercase();
    let mut best: Option<(f64, NaiveDateTime)> = None;
    for candidate in &times.proposed_times {
        let score = score_candidate(candidate, original, text, &lower);
        match best {
            // Strict comparison keeps the first-seen candidate on ties.
            Some((top, _)) if score <= top => {}
            _ => best = Some((score, candidate.at)),
        }
    }

    best.map(|(_, at)| at).or(original)
}

fn score_candidate(
    candidate: &TimeCandidate,
    original: Option<NaiveDateTime>,
    text: &str,
    lower: &str,
) -> f64 {
    let at = candidate.at;
    let mut score = 0.0;

    let month = at.format("%B").to_string();
    let day = at.day();
    let (pm, hour) = at.time().hour12();
    let meridiem = if pm { "PM" } else { "AM" };

    if pattern_hit(text, &format!("{month}.*?{day}")) {
        score += MONTH_DAY_WEIGHT;
    }
    if pattern_hit(text, &format!("{hour}.*?{meridiem}")) {
        score += HOUR_MERIDIEM_WEIGHT;
    }
    for (cue, weight) in PREFERENCE_CUES {
        if lower.contains(cue) {
            score += weight;
        }
    }

    if let Some(orig) = original {
        if at.date() == orig.date() {
            score += SAME_DATE_BONUS;
        }
        if (9..=17).contains(&at.hour()) {
            score += BUSINESS_HOURS_BONUS;
        }
        if at > orig {
            score += LATER_THAN_ORIGINAL_BONUS;
        }
    }

    score
}

fn pattern_hit(text: &str, pattern: &str) -> bool {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .is_ok_and(|re| re.is_match(text))
}
