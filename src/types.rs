//! Core types for scheduling-intent extraction

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single email's raw text plus its position within a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEmail {
    /// Full text of the email, headers included
    pub text: String,

    /// Zero-based position in the thread (order of appearance)
    pub index: usize,
}

/// The three headers this extractor cares about
///
/// Any header not found in the first lines of the text stays `None`;
/// a missing header is never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Headers {
    /// `From:` header value, trimmed
    pub from: Option<String>,

    /// `To:` header value, trimmed
    pub to: Option<String>,

    /// `Subject:` header value, trimmed
    pub subject: Option<String>,
}

impl Headers {
    /// A chunk counts as a real email only when all three headers are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some() && self.subject.is_some()
    }
}

/// The textual basis a time candidate was extracted from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeBasis {
    /// A month name with a day-of-month and clock time ("December 3rd at 2pm")
    ExplicitDate,

    /// A weekday name with a clock time ("next Friday at 10am")
    RelativeWeekday,

    /// A clock time followed by an agreement phrase ("2pm works")
    Confirmation,
}

/// One resolved meeting-time candidate
///
/// Candidates keep their position in the source text; ordering is by
/// order of appearance, not by resolved instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeCandidate {
    /// Resolved timestamp, timezone-naive relative to the reference "now"
    pub at: NaiveDateTime,

    /// Which pattern class produced this candidate
    pub basis: TimeBasis,

    /// The matched source text, verbatim
    pub matched: String,

    /// Byte offset of the match in the email text
    pub position: usize,
}

impl TimeCandidate {
    /// ISO-8601 rendering used in composed notes.
    #[must_use]
    pub fn iso8601(&self) -> String {
        self.at.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

impl fmt::Display for TimeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iso8601())
    }
}

/// Everything the time extractor learned from one email
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimeExtractionResult {
    /// Earliest-in-text candidate
    pub original_time: Option<TimeCandidate>,

    /// Remaining candidates, in order of appearance
    pub proposed_times: Vec<TimeCandidate>,

    /// A scheduling-uncertainty cue was found in the text
    pub uncertainty: bool,

    /// True iff `proposed_times` is non-empty
    pub alternative_times_suggested: bool,
}

/// Delegation detected in an email
///
/// Invariant: `delegate_email` never equals the sender's or recipient's
/// own address from the same email's headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DelegateInfo {
    /// Delegate's name, when the associate form names one
    pub delegate_name: Option<String>,

    /// Delegate's email address
    pub delegate_email: Option<String>,

    /// Accumulated cue confidence in [0, 1]
    pub confidence: f64,
}

/// The per-email output record
///
/// Created once per email by the assembly step. After thread
/// reconciliation only `proposed_time` and
/// `additional_info.original_time` may have been filled in from the
/// preceding email; nothing else is ever mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailExtractionRecord {
    /// Headers pulled from the top of the email text
    pub headers: Headers,

    /// Highest-confidence reply-type label, or `"unknown"`
    pub primary_type: String,

    /// Reply-type labels with confidence above the retention floor
    pub reply_type_scores: BTreeMap<String, f64>,

    /// Single most probable meeting time, if any
    pub proposed_time: Option<NaiveDateTime>,

    /// First conferencing link found, verbatim
    pub meeting_link: Option<String>,

    /// Delegate email address, if delegation was detected
    pub delegate_to: Option<String>,

    /// Full time-extraction detail
    pub additional_info: TimeExtractionResult,

    /// Human-readable bullet notes, absent when there is nothing to say
    pub additional_notes: Option<String>,

    /// When this record was produced
    pub processed_at: DateTime<Utc>,
}
