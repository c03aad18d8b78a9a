//! The detection pipeline.
//!
//! normalize → score words and patterns → intensity → context → finalize.
//!
//! An [`EmotionEngine`] owns its tables and never mutates them after
//! construction, so a single engine can serve any number of threads.
//! [`EmotionEngine::shared`] returns the process-wide engine built from the
//! default tables.

use once_cell::sync::Lazy;

use crate::scorer::{score_text, Evidence, Scorecard};
use crate::{
    normalize_text, EmotionLexicon, EmotionReading, EmotionResult, IntensityProfile,
    LexiconResult, PatternSet, RelationshipContext,
};

/// Inputs shorter than this, after trimming, are rejected.
pub const MIN_TEXT_CHARS: usize = 2;

static SHARED: Lazy<EmotionEngine> = Lazy::new(|| {
    EmotionEngine::builtin().expect("built-in lexicon and patterns are valid")
});

/// Everything the pipeline learned about one message.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub result: EmotionResult,
    /// Normalized text used for matching. Empty for `TooShort`.
    pub normalized: String,
    /// Word and pattern contributions, before any modifier.
    pub evidence: Vec<Evidence>,
    /// `None` for `TooShort`.
    pub intensity: Option<IntensityProfile>,
    /// The context trigger that fired, if a boost was applied.
    pub context_trigger: Option<&'static str>,
}

impl Detection {
    fn too_short() -> Self {
        Self {
            result: EmotionResult::TooShort,
            normalized: String::new(),
            evidence: Vec::new(),
            intensity: None,
            context_trigger: None,
        }
    }
}

/// Lexicon-and-pattern emotion classifier.
#[derive(Debug, Clone)]
pub struct EmotionEngine {
    lexicon: EmotionLexicon,
    patterns: PatternSet,
}

impl EmotionEngine {
    pub fn new(lexicon: EmotionLexicon, patterns: PatternSet) -> Self {
        Self { lexicon, patterns }
    }

    /// An engine with the built-in tables.
    pub fn builtin() -> LexiconResult<Self> {
        Ok(Self::new(EmotionLexicon::builtin()?, PatternSet::builtin()?))
    }

    /// The process-wide engine over the built-in tables.
    pub fn shared() -> &'static EmotionEngine {
        &SHARED
    }

    pub fn lexicon(&self) -> &EmotionLexicon {
        &self.lexicon
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Raw word and pattern scores for already-normalized text.
    pub fn score(&self, normalized: &str) -> Scorecard {
        score_text(normalized, &self.lexicon, &self.patterns)
    }

    /// Classify a message.
    pub fn detect(&self, text: &str, context: Option<RelationshipContext>) -> EmotionResult {
        self.inspect(text, context).result
    }

    /// Classify a message and keep the intermediate evidence.
    pub fn inspect(&self, text: &str, context: Option<RelationshipContext>) -> Detection {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            tracing::trace!("message too short to analyze");
            return Detection::too_short();
        }

        let normalized = normalize_text(text);
        let Scorecard {
            mut scores,
            evidence,
        } = self.score(&normalized);

        let intensity = IntensityProfile::measure(text);
        intensity.apply(&mut scores);

        let modifier = context.and_then(|c| c.modifier());
        let context_trigger = modifier.and_then(|m| m.trigger_in(&normalized));
        if let (Some(modifier), Some(_)) = (modifier, context_trigger) {
            modifier.apply(&mut scores);
        }

        let reading = EmotionReading::from_scores(scores);
        tracing::trace!(
            primary = %reading.primary_emotion,
            confidence = reading.confidence,
            multiplier = intensity.multiplier(),
            context_boosted = context_trigger.is_some(),
            "emotion detected"
        );

        Detection {
            result: EmotionResult::Analyzed(reading),
            normalized,
            evidence,
            intensity: Some(intensity),
            context_trigger,
        }
    }
}

impl Default for EmotionEngine {
    /// A copy of the shared built-in engine.
    fn default() -> Self {
        Self::shared().clone()
    }
}
