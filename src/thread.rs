//! Thread splitting and cross-email reconciliation
//!
//! A forwarded or replied chain arrives as one blob. The splitter cuts
//! it into individual emails on `From:` header boundaries; the
//! reconciler then lets a proposed time flow forward into a later email
//! that confirms it without restating it.

use crate::headers;
use crate::types::{EmailExtractionRecord, RawEmail, TimeBasis, TimeCandidate};
use chrono::{NaiveDateTime, Timelike};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::debug;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^From:\s*[\w.-]+@[\w.-]+\s*$").unwrap());

static CONFIRMED_ANYWAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:confirmed|all\s+set|works\s+perfectly)\b").unwrap());

/// Curly quotes show up in pasted thread blobs and would break
/// boundary matching.
fn normalize_text(text: &str) -> String {
    text.replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Split a raw blob into individual emails on `From: <address>` header
/// lines, keeping only chunks that validate as real emails.
///
/// When no boundary yields a valid chunk the whole blob is tried as a
/// single email. Output order matches input order; for reconciliation
/// that order is taken to be oldest first.
#[must_use]
pub fn split_thread(blob: &str) -> Vec<RawEmail> {
    let text = normalize_text(blob);
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut started = false;

    for line in text.lines() {
        if BOUNDARY.is_match(line.trim()) {
            if !current.is_empty() {
                push_if_valid(&mut chunks, &current);
                current.clear();
            }
            started = true;
        }
        if started {
            current.push(line);
        }
    }
    if !current.is_empty() {
        push_if_valid(&mut chunks, &current);
    }

    if chunks.is_empty() && headers::is_valid_email(&text) {
        chunks.push(text);
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, text)| RawEmail { text, index })
        .collect()
}

fn push_if_valid(chunks: &mut Vec<String>, lines: &[&str]) {
    let chunk = lines.join("\n");
    if headers::is_valid_email(&chunk) {
        chunks.push(chunk);
    }
}

/// Simpler splitter: break before every line that starts a `From:`
/// header, keeping the delimiter with the chunk that follows it.
/// Empty pieces are discarded; chunks are trimmed.
#[must_use]
pub fn split_at_from(blob: &str) -> Vec<String> {
    let text = normalize_text(blob);

    let mut boundaries = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_start().starts_with("From:") {
            boundaries.push(offset);
        }
        offset += line.len();
    }

    if boundaries.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    let mut chunks = Vec::new();
    let mut prev = 0;
    for &boundary in &boundaries {
        if boundary > prev {
            let piece = text[prev..boundary].trim();
            if !piece.is_empty() {
                chunks.push(piece.to_string());
            }
        }
        prev = boundary;
    }
    let tail = text[prev..].trim();
    if !tail.is_empty() {
        chunks.push(tail.to_string());
    }
    chunks
}

/// Walk a chronologically ordered thread (oldest first) and patch
/// confirmation replies.
///
/// A record without a proposed time inherits the immediately preceding
/// record's time when its text confirms it by restating the clock time
/// or weekday, or with a bare "confirmed"/"all set". Only the
/// immediately prior record is consulted (single-hop lookback).
pub fn reconcile_thread(records: &mut [EmailExtractionRecord], emails: &[RawEmail]) {
    for i in 1..records.len() {
        if records[i].proposed_time.is_some() {
            continue;
        }
        let Some(prev_time) = records[i - 1].proposed_time else {
            continue;
        };
        let Some(raw) = emails.get(i) else {
            continue;
        };

        if let Some((matched, position)) = confirms_time(&raw.text, prev_time) {
            debug!(email = i, "confirmation inherited from preceding email");
            records[i].proposed_time = Some(prev_time);
            records[i].additional_info.original_time = Some(TimeCandidate {
                at: prev_time,
                basis: TimeBasis::Confirmation,
                matched,
                position,
            });
        }
    }
}

/// Check whether `text` confirms the previously proposed `prev` time,
/// returning the confirming phrase and its position.
fn confirms_time(text: &str, prev: NaiveDateTime) -> Option<(String, usize)> {
    let clock = clock_12h(prev);
    let weekday = prev.format("%A").to_string();

    let probes = [
        format!(r"{weekday}\s+at\s+{clock}"),
        format!(r"{clock}\s+(?:works|is\s+fine|is\s+good|is\s+perfect)"),
        format!(r"{weekday}\s+(?:works|is\s+fine|is\s+good|is\s+perfect)"),
    ];
    for probe in &probes {
        if let Ok(re) = RegexBuilder::new(probe).case_insensitive(true).build()
            && let Some(m) = re.find(text)
        {
            return Some((m.as_str().to_string(), m.start()));
        }
    }

    CONFIRMED_ANYWAY
        .find(text)
        .map(|m| (m.as_str().to_string(), m.start()))
}

/// 12-hour clock rendering without a leading zero ("2:00 PM").
fn clock_12h(dt: NaiveDateTime) -> String {
    let (pm, hour) = dt.time().hour12();
    format!(
        "{}:{:02} {}",
        hour,
        dt.time().minute(),
        if pm { "PM" } else { "AM" }
    )
}
