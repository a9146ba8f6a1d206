//! Reply-type classification boundary and score post-processing
//!
//! The classifier itself is a capability: anything that maps raw email
//! text to label/confidence scores can sit behind [`Classifier`], be it
//! a trained model, a rules engine, or the built-in keyword stub.

use crate::config::ParserConfig;
use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Sentinel primary type when classification yields nothing
pub const UNKNOWN_REPLY_TYPE: &str = "unknown";

/// Labels below this confidence are not retained in the score map
const SCORE_FLOOR: f64 = 0.3;

const COMBINED_RESCHEDULE_DELEGATION: &str = "reschedule_with_delegation";

/// Maps email text to reply-type confidence scores
pub trait Classifier {
    /// Score the text against the label vocabulary.
    ///
    /// Confidences are expected in [0, 1]. An empty mapping is valid
    /// and means "no opinion".
    fn classify(&self, text: &str) -> Result<HashMap<String, f64>, ClassifyError>;
}

/// Post-processed classification for one email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    /// Highest-confidence label over the full mapping, or `"unknown"`
    pub primary_type: String,

    /// Labels that survived the retention floor
    pub reply_type_scores: BTreeMap<String, f64>,
}

/// Rank raw scores into a [`ClassificationResult`].
///
/// The primary label is chosen over the full mapping; the retained
/// score map is filtered separately, so a weak-but-best label can be
/// primary while the map stays empty. Ties break on label order for
/// determinism.
#[must_use]
pub fn rank_reply_types(scores: HashMap<String, f64>, config: &ParserConfig) -> ClassificationResult {
    let ranked: BTreeMap<String, f64> = scores.into_iter().collect();

    let mut primary = UNKNOWN_REPLY_TYPE.to_string();
    let mut best = f64::NEG_INFINITY;
    for (label, score) in &ranked {
        if *score > best {
            best = *score;
            primary = label.clone();
        }
    }

    let reply_type_scores: BTreeMap<String, f64> = ranked
        .into_iter()
        .filter(|(_, score)| *score > SCORE_FLOOR)
        .collect();

    if config.combined_reply_types
        && reply_type_scores.contains_key("reschedule")
        && reply_type_scores.contains_key("delegation")
    {
        primary = COMBINED_RESCHEDULE_DELEGATION.to_string();
    }

    ClassificationResult {
        primary_type: primary,
        reply_type_scores,
    }
}

/// Deterministic keyword-weight classifier
///
/// A stand-in for the trained model: good enough to run the crate
/// standalone and to exercise the post-processing, nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

type CueTable = &'static [(&'static str, &'static [(&'static str, f64)])];

const RULES: CueTable = &[
    (
        "accept",
        &[
            ("works for me", 0.5),
            ("works perfectly", 0.5),
            ("sounds good", 0.4),
            ("confirmed", 0.5),
            ("i accept", 0.6),
            ("see you then", 0.3),
            ("all set", 0.4),
        ],
    ),
    (
        "decline",
        &[
            ("can't make", 0.5),
            ("cannot make", 0.5),
            ("won't be able", 0.5),
            ("unable to attend", 0.5),
            ("have to pass", 0.4),
            ("decline", 0.6),
        ],
    ),
    (
        "reschedule",
        &[
            ("reschedule", 0.6),
            ("move the meeting", 0.5),
            ("push the meeting", 0.4),
            ("another time", 0.4),
            ("a different time", 0.4),
            ("instead", 0.2),
        ],
    ),
    (
        "delegation",
        &[
            ("delegate", 0.5),
            ("my associate", 0.5),
            ("take over", 0.4),
            ("step in", 0.4),
            ("on my behalf", 0.5),
            ("cover for me", 0.4),
        ],
    ),
    (
        "info_request",
        &[
            ("agenda", 0.4),
            ("could you share", 0.4),
            ("more details", 0.4),
            ("let me know what", 0.3),
            ("question", 0.3),
        ],
    ),
];

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<HashMap<String, f64>, ClassifyError> {
        let lower = text.to_lowercase();
        let mut scores = HashMap::new();

        for (label, cues) in RULES {
            let mut score = 0.0;
            for (cue, weight) in *cues {
                if lower.contains(cue) {
                    score += weight;
                }
            }
            if score > 0.0 {
                scores.insert((*label).to_string(), score.min(1.0));
            }
        }
        Ok(scores)
    }
}
