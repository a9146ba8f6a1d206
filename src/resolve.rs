//! Natural-language date resolution boundary
//!
//! The time extractor hands short date/time phrases to a [`DateResolver`]
//! instead of parsing them itself, so the date library can be swapped
//! without touching extraction logic. [`ChronoResolver`] is the built-in
//! implementation covering the three phrase shapes the extractor emits.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Resolves partial natural-language date/time phrases
pub trait DateResolver {
    /// Resolve `expression` against the reference instant `now`.
    ///
    /// With `prefer_future`, a phrase that would land in the past is
    /// moved to its nearest future occurrence. Failure is absence,
    /// never an error.
    fn resolve(
        &self,
        expression: &str,
        now: NaiveDateTime,
        prefer_future: bool,
    ) -> Option<NaiveDateTime>;
}

/// `chrono`-backed resolver for the extractor's phrase grammar
///
/// Accepted shapes:
/// - `2026-08-14 3pm` (absolute date plus clock time)
/// - `December 3rd 2:00 PM` with an optional trailing year; without a
///   year the current year is used, bumped to the next one when that
///   would not resolve to the future
/// - `2:00 PM` (bare clock time, today or tomorrow under future
///   preference)
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoResolver;

static ISO_DATE_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})\s+(.+)$").unwrap());

static MONTH_DATE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2})(?:st|nd|rd|th)?\s+(\d{1,2}(?::\d{2})?\s*(?:AM|PM))(?:\s+(\d{4}))?$",
    )
    .unwrap()
});

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*(AM|PM)$").unwrap());

impl DateResolver for ChronoResolver {
    fn resolve(
        &self,
        expression: &str,
        now: NaiveDateTime,
        prefer_future: bool,
    ) -> Option<NaiveDateTime> {
        let expr = expression.trim();

        if let Some(caps) = ISO_DATE_CLOCK.captures(expr) {
            let year = caps[1].parse().ok()?;
            let month = caps[2].parse().ok()?;
            let day = caps[3].parse().ok()?;
            let time = parse_clock(&caps[4])?;
            return Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(time));
        }

        if let Some(caps) = MONTH_DATE_CLOCK.captures(expr) {
            let month = month_number(&caps[1])?;
            let day: u32 = caps[2].parse().ok()?;
            let time = parse_clock(&caps[3])?;

            if let Some(year) = caps.get(4) {
                let year = year.as_str().parse().ok()?;
                return Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(time));
            }

            let this_year = NaiveDate::from_ymd_opt(now.year(), month, day)?.and_time(time);
            if prefer_future && this_year <= now {
                return Some(NaiveDate::from_ymd_opt(now.year() + 1, month, day)?.and_time(time));
            }
            return Some(this_year);
        }

        let time = parse_clock(expr)?;
        let today = now.date().and_time(time);
        if prefer_future && today <= now {
            return Some(today + Duration::days(1));
        }
        Some(today)
    }
}

/// Parse a 12-hour clock phrase like `3pm` or `10:30 AM`.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let caps = CLOCK.captures(s.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let minute: u32 = caps.get(2).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    let pm = caps[3].eq_ignore_ascii_case("pm");

    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0)
}

fn month_number(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .zip(1u32..)
        .find(|(m, _)| **m == lower)
        .map(|(_, n)| n)
}
