//! Parser configuration

use serde::{Deserialize, Serialize};

/// Tunable behavior of the extraction engine
///
/// Loadable from JSON so deployments can override the cue sets the
/// same way the classification model ships its own pattern config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Report `"reschedule_with_delegation"` as the primary type when
    /// both `reschedule` and `delegation` survive the score floor.
    pub combined_reply_types: bool,

    /// Replacement uncertainty cue patterns (regex, matched
    /// case-insensitively). `None` keeps the built-in set.
    pub uncertainty_patterns: Option<Vec<String>>,
}

impl ParserConfig {
    /// Load a configuration from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
