//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Short English language tag, the default for most tools
pub const LANG_EN: &str = "EN";

/// Long English language tag, the default for a few tools
pub const LANG_ENGLISH: &str = "ENGLISH";

/// Language tags the simulation service narrates in
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "EN",
    "한국어",
    "繁體中文",
    "日本語",
    "ESPAÑOL",
    "বাংলা",
    "ਪੰਜਾਬੀ",
];

/// One match simulation request between two summoners
///
/// Every field is forwarded verbatim; nothing is trimmed or case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub identity_a: String,
    pub tag_a: String,
    pub identity_b: String,
    pub tag_b: String,
    pub language: String,
}

impl MatchRequest {
    pub fn new(
        identity_a: impl Into<String>,
        tag_a: impl Into<String>,
        identity_b: impl Into<String>,
        tag_b: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            identity_a: identity_a.into(),
            tag_a: tag_a.into(),
            identity_b: identity_b.into(),
            tag_b: tag_b.into(),
            language: language.into(),
        }
    }

    /// `name#tag` for the first summoner
    pub fn riot_id_a(&self) -> String {
        format!("{}#{}", self.identity_a, self.tag_a)
    }

    /// `name#tag` for the second summoner
    pub fn riot_id_b(&self) -> String {
        format!("{}#{}", self.identity_b, self.tag_b)
    }

    /// Form fields in the order the simulation service expects them
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("uidA", self.identity_a.as_str()),
            ("tagA", self.tag_a.as_str()),
            ("uidB", self.identity_b.as_str()),
            ("tagB", self.tag_b.as_str()),
            ("lang", self.language.as_str()),
        ]
    }
}
