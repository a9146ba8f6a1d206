// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Scheduling Intent Extraction
//!
//! Extracts structured scheduling intent from free-form email text:
//! who sent it, what kind of reply it is, what meeting time is being
//! proposed or confirmed, whether a conferencing link or a delegate
//! contact is present, and whether the sender sounds uncertain. A
//! thread of such emails is reconciled so a later reply that merely
//! says "that time works" inherits the time proposed earlier.
//!
//! # Features
//!
//! - Header extraction and thread splitting for plain-text chains
//! - Time-expression recognition: explicit dates, relative weekdays,
//!   confirmation phrases
//! - Probability scoring to pick one time among several candidates
//! - Delegate and meeting-link detection
//! - Pluggable classification and date-resolution capabilities
//!
//! # Example
//!
//! ```rust
//! use sched_extract::{ChronoResolver, ExtractionEngine, KeywordClassifier};
//!
//! let engine = ExtractionEngine::new(KeywordClassifier, ChronoResolver);
//! let record = engine.parse_email(
//!     "From: ana@example.com\nTo: team@example.com\nSubject: Re: Sync\n\nFriday at 2pm works for me.",
//! );
//!
//! assert!(record.proposed_time.is_some());
//! println!("Reply type: {}", record.primary_type);
//! ```

mod classify;
mod config;
mod delegate;
mod error;
mod headers;
mod link;
mod parser;
mod resolve;
mod score;
mod thread;
mod time;
mod types;

pub use classify::{
    ClassificationResult, Classifier, KeywordClassifier, UNKNOWN_REPLY_TYPE, rank_reply_types,
};
pub use config::ParserConfig;
pub use delegate::extract_delegate;
pub use error::ClassifyError;
pub use headers::{extract_headers, is_valid_email};
pub use link::extract_meeting_link;
pub use parser::ExtractionEngine;
pub use resolve::{ChronoResolver, DateResolver};
pub use score::most_probable_time;
pub use thread::{reconcile_thread, split_at_from, split_thread};
pub use time::{detect_uncertainty, extract_times};
pub use types::*;
