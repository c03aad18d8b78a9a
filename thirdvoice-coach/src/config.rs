//! Coach configuration loaded from TOML.
//!
//! ```toml
//! default_context = "coparenting"
//! max_input_chars = 1200
//! remote_enabled = false
//! remote_timeout_secs = 10
//!
//! [lexicon.anger]
//! high = ["incensed"]
//! low = ["meh"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thirdvoice::{Emotion, EmotionEngine, RelationshipContext, Tier};

use crate::{CoachError, CoachResult};

pub const DEFAULT_MAX_INPUT_CHARS: usize = 2000;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 25;

/// Extra trigger words for one emotion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraWords {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

impl ExtraWords {
    fn tiers(&self) -> [(Tier, &[String]); 3] {
        [
            (Tier::High, self.high.as_slice()),
            (Tier::Medium, self.medium.as_slice()),
            (Tier::Low, self.low.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.medium.is_empty() && self.low.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Context used when a caller does not name one.
    pub default_context: RelationshipContext,
    /// Longer messages are truncated before analysis. `None` disables the limit.
    pub max_input_chars: Option<usize>,
    /// When false the remote model is never called.
    pub remote_enabled: bool,
    pub remote_timeout_secs: u64,
    /// Extra words merged into the built-in lexicon, keyed by emotion label.
    pub lexicon: BTreeMap<String, ExtraWords>,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            default_context: RelationshipContext::General,
            max_input_chars: Some(DEFAULT_MAX_INPUT_CHARS),
            remote_enabled: true,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            lexicon: BTreeMap::new(),
        }
    }
}

impl CoachConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CoachResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no coach config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| CoachError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            context = %config.default_context,
            remote_enabled = config.remote_enabled,
            "loaded coach config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> CoachResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    /// Cut `text` to at most `max_input_chars` characters.
    pub fn clamp_input<'a>(&self, text: &'a str) -> &'a str {
        let limit = match self.max_input_chars {
            Some(limit) => limit,
            None => return text,
        };
        match text.char_indices().nth(limit) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    /// An engine over the built-in tables plus the configured extra words.
    pub fn build_engine(&self) -> CoachResult<EmotionEngine> {
        if self.lexicon.values().all(ExtraWords::is_empty) {
            return Ok(EmotionEngine::shared().clone());
        }

        let base = EmotionEngine::shared();
        let mut lexicon = base.lexicon().clone();
        for (label, extra) in &self.lexicon {
            let emotion = Emotion::from_label(label)
                .ok_or_else(|| CoachError::UnknownEmotion(label.clone()))?;
            for (tier, words) in extra.tiers() {
                for word in words {
                    lexicon.insert(emotion, tier, word)?;
                }
            }
        }
        Ok(EmotionEngine::new(lexicon, base.patterns().clone()))
    }
}
