//! Extraction engine: per-email record assembly and thread orchestration

use crate::classify::{self, Classifier};
use crate::config::ParserConfig;
use crate::delegate;
use crate::headers;
use crate::link;
use crate::resolve::DateResolver;
use crate::score;
use crate::thread;
use crate::time;
use crate::types::{DelegateInfo, EmailExtractionRecord, TimeCandidate, TimeExtractionResult};
use chrono::{NaiveDateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Turns raw email text into [`EmailExtractionRecord`]s
///
/// Holds the two injected capabilities (reply-type classification and
/// date resolution) plus the parser configuration. All operations are
/// pure and synchronous; the engine itself keeps no state between
/// calls.
pub struct ExtractionEngine<C, R> {
    classifier: C,
    resolver: R,
    config: ParserConfig,
}

impl<C: Classifier, R: DateResolver> ExtractionEngine<C, R> {
    /// Engine with default configuration.
    pub fn new(classifier: C, resolver: R) -> Self {
        Self::with_config(classifier, resolver, ParserConfig::default())
    }

    pub const fn with_config(classifier: C, resolver: R, config: ParserConfig) -> Self {
        Self {
            classifier,
            resolver,
            config,
        }
    }

    /// Parse a single email using the wall clock as the reference
    /// instant.
    pub fn parse_email(&self, text: &str) -> EmailExtractionRecord {
        self.parse_email_at(text, Utc::now().naive_utc())
    }

    /// Parse a single email against a fixed reference instant.
    ///
    /// Deterministic: the same text and `now` always produce the same
    /// record, `processed_at` aside. No extractor failure aborts the
    /// remaining fields; each degrades to its absent value alone.
    pub fn parse_email_at(&self, text: &str, now: NaiveDateTime) -> EmailExtractionRecord {
        let headers = headers::extract_headers(text);

        let scores = match self.classifier.classify(text) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(%err, "classification degraded to unknown");
                HashMap::new()
            }
        };
        let classification = classify::rank_reply_types(scores, &self.config);

        let time_info = time::extract_times(text, now, &self.resolver, &self.config);
        let proposed_time = score::most_probable_time(&time_info, text);
        let meeting_link = link::extract_meeting_link(text);
        let delegate = delegate::extract_delegate(text, &headers);
        let additional_notes = compose_notes(&time_info, delegate.as_ref());

        debug!(
            from = headers.from.as_deref().unwrap_or("?"),
            reply_type = %classification.primary_type,
            "parsed email"
        );

        EmailExtractionRecord {
            headers,
            primary_type: classification.primary_type,
            reply_type_scores: classification.reply_type_scores,
            proposed_time,
            meeting_link,
            delegate_to: delegate.and_then(|d| d.delegate_email),
            additional_info: time_info,
            additional_notes,
            processed_at: Utc::now(),
        }
    }

    /// Parse a thread blob using the wall clock as the reference
    /// instant.
    pub fn parse_thread(&self, blob: &str) -> Vec<EmailExtractionRecord> {
        self.parse_thread_at(blob, Utc::now().naive_utc())
    }

    /// Split a thread blob, parse each email in input order, then run
    /// the reconciliation pass. Records come back in the original
    /// request order, which reconciliation treats as oldest first.
    pub fn parse_thread_at(&self, blob: &str, now: NaiveDateTime) -> Vec<EmailExtractionRecord> {
        let emails = thread::split_thread(blob);
        let mut records: Vec<EmailExtractionRecord> = emails
            .iter()
            .map(|email| self.parse_email_at(&email.text, now))
            .collect();
        thread::reconcile_thread(&mut records, &emails);
        records
    }
}

/// Build the bullet-note summary for one record.
///
/// Returns `None` when there is nothing to note, never an empty string.
fn compose_notes(
    times: &TimeExtractionResult,
    delegate: Option<&DelegateInfo>,
) -> Option<String> {
    let mut notes: Vec<String> = Vec::new();

    if times.uncertainty {
        notes.push("Schedule uncertainty indicated".to_string());
    }
    if times.alternative_times_suggested {
        let joined = times
            .proposed_times
            .iter()
            .map(TimeCandidate::iso8601)
            .collect::<Vec<_>>()
            .join(", ");
        notes.push(format!("Alternative times suggested: {joined}"));
    }
    if let Some(original) = &times.original_time {
        notes.push(format!("Original time was {}", original.iso8601()));
    }
    if let Some(info) = delegate
        && let (Some(name), Some(email)) = (&info.delegate_name, &info.delegate_email)
    {
        notes.push(format!("Delegation arranged to {name} ({email})"));
    }

    if notes.is_empty() {
        None
    } else {
        Some(
            notes
                .iter()
                .map(|note| format!("- {note}"))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
