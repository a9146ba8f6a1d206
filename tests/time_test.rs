use chrono::{NaiveDate, NaiveDateTime};
use sched_extract::*;

/// Wednesday, 2026-08-05 10:00.
fn wednesday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 5)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn extract(text: &str) -> TimeExtractionResult {
    extract_times(text, wednesday(), &ChronoResolver, &ParserConfig::default())
}

// --- weekday resolution ---

#[test]
fn test_plain_weekday_resolves_forward() {
    let result = extract("Can we meet Friday at 2pm?");

    let original = result.original_time.unwrap();
    assert_eq!(original.at, at(2026, 8, 7, 14, 0));
    assert_eq!(original.basis, TimeBasis::RelativeWeekday);
    assert!(result.proposed_times.is_empty());
    assert!(!result.alternative_times_suggested);
}

#[test]
fn test_same_weekday_rolls_to_next_week() {
    // "now" is a Wednesday, so a plain "Wednesday" means seven days out.
    let result = extract("Wednesday at 9am suits the team");
    assert_eq!(result.original_time.unwrap().at, at(2026, 8, 12, 9, 0));
}

#[test]
fn test_next_qualifier_skips_tomorrow() {
    // Thursday is tomorrow; "next Thursday" must land eight days out,
    // not one.
    let result = extract("How about next Thursday at 3pm?");
    assert_eq!(result.original_time.unwrap().at, at(2026, 8, 13, 15, 0));
}

#[test]
fn test_next_weekday_adds_week() {
    let result = extract("Let's move it to next Monday at 3pm");
    assert_eq!(result.original_time.unwrap().at, at(2026, 8, 10, 15, 0));
}

#[test]
fn test_abbreviated_weekday() {
    let result = extract("Tues at 11am would suit me");
    // Tuesday has passed this week, so it rolls forward.
    assert_eq!(result.original_time.unwrap().at, at(2026, 8, 11, 11, 0));
}

// --- explicit dates ---

#[test]
fn test_explicit_date_with_ordinal() {
    let result = extract("Shall we say December 3rd at 2:00 PM?");

    let original = result.original_time.unwrap();
    assert_eq!(original.at, at(2026, 12, 3, 14, 0));
    assert_eq!(original.basis, TimeBasis::ExplicitDate);
    assert!(original.matched.contains("December 3rd"));
}

#[test]
fn test_explicit_past_date_bumps_to_next_year() {
    // March has already passed relative to the August reference.
    let result = extract("We originally planned March 2nd at 10am");
    assert_eq!(result.original_time.unwrap().at, at(2027, 3, 2, 10, 0));
}

// --- confirmation phrases ---

#[test]
fn test_confirmation_same_day_when_still_ahead() {
    let result = extract("2pm works for me");

    let original = result.original_time.unwrap();
    assert_eq!(original.at, at(2026, 8, 5, 14, 0));
    assert_eq!(original.basis, TimeBasis::Confirmation);
}

#[test]
fn test_confirmation_rolls_to_tomorrow_when_past() {
    // 9am has already gone by at the 10:00 reference.
    let result = extract("9am is fine");
    assert_eq!(result.original_time.unwrap().at, at(2026, 8, 6, 9, 0));
}

// --- candidate ordering ---

#[test]
fn test_candidates_ordered_by_text_position() {
    let text = "We planned December 3rd at 2:00 PM, but next Monday at 3pm \
                could work too, or if 4pm works for you let's take that.";
    let result = extract(text);

    let original = result.original_time.unwrap();
    assert_eq!(original.basis, TimeBasis::ExplicitDate);
    assert_eq!(original.at, at(2026, 12, 3, 14, 0));

    assert_eq!(result.proposed_times.len(), 2);
    assert_eq!(result.proposed_times[0].basis, TimeBasis::RelativeWeekday);
    assert_eq!(result.proposed_times[0].at, at(2026, 8, 10, 15, 0));
    assert_eq!(result.proposed_times[1].basis, TimeBasis::Confirmation);
    assert!(result.alternative_times_suggested);
}

#[test]
fn test_no_times_at_all() {
    let result = extract("Could you share the agenda first?");
    assert!(result.original_time.is_none());
    assert!(result.proposed_times.is_empty());
    assert!(!result.alternative_times_suggested);
}

#[test]
fn test_unresolvable_date_dropped_silently() {
    // February 30th cannot resolve; the weekday candidate survives.
    let result = extract("February 30th at 2:00 PM or Friday at 1pm both work for the team");

    let original = result.original_time.unwrap();
    assert_eq!(original.basis, TimeBasis::RelativeWeekday);
    assert_eq!(original.at, at(2026, 8, 7, 13, 0));
    assert!(result.proposed_times.is_empty());
}

// --- uncertainty ---

#[test]
fn test_uncertainty_cues() {
    let config = ParserConfig::default();
    let cases = [
        ("I could possibly make it", true),
        ("Maybe later this week", true),
        ("I'm not sure about Thursday", true),
        ("Would you be able to join?", true),
        ("I'm available all afternoon", true),
        ("My schedule is flexible", true),
        ("I'M FLEXIBLE ON TIMING", true),
        ("I'm not flexible on this", false),
        ("We are NOT Flexible here", false),
        ("See you at the meeting", false),
    ];
    for (text, expected) in cases {
        assert_eq!(
            detect_uncertainty(text, &config),
            expected,
            "uncertainty({text:?}) should be {expected}"
        );
    }
}

#[test]
fn test_uncertainty_sets_flag_on_result() {
    let result = extract("Maybe Friday at 2pm?");
    assert!(result.uncertainty);

    let result = extract("Friday at 2pm it is.");
    assert!(!result.uncertainty);
}

#[test]
fn test_uncertainty_patterns_overridable() {
    let config = ParserConfig {
        uncertainty_patterns: Some(vec!["tentative".to_string()]),
        ..ParserConfig::default()
    };

    assert!(detect_uncertainty("this is a tentative plan", &config));
    // The built-in set no longer applies once overridden.
    assert!(!detect_uncertainty("maybe we can meet", &config));
}
