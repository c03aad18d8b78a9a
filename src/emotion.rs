//! Core types for emotion inference.
//!
//! An [`EmotionResult`] is either a finished [`EmotionReading`] or the
//! `TooShort` marker for input that fails the minimum-length check. Callers
//! have to match on it before touching any score data.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Emotion categories, in tie-break order.
///
/// `Neutral` is a classification outcome only. It never accumulates a score
/// and is absent from [`Emotion::SCORED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Sadness,
    Fear,
    Joy,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    /// The six scored categories in their stable iteration order.
    pub const SCORED: [Emotion; 6] = [
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    /// Lowercase label, as used in serialized output and fixtures.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }

    /// Parse a lowercase label. Returns `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "anger" => Some(Emotion::Anger),
            "sadness" => Some(Emotion::Sadness),
            "fear" => Some(Emotion::Fear),
            "joy" => Some(Emotion::Joy),
            "surprise" => Some(Emotion::Surprise),
            "disgust" => Some(Emotion::Disgust),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }

    /// Emotions that receive the full intensity multiplier.
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Emotion::Anger | Emotion::Sadness | Emotion::Fear | Emotion::Disgust
        )
    }

    /// Position in [`Emotion::SCORED`], or `None` for `Neutral`.
    pub(crate) fn slot(&self) -> Option<usize> {
        Emotion::SCORED.iter().position(|e| e == self)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated, pre-normalization scores for the six scored emotions.
///
/// Lives for a single detection call. Scores never go negative: weights and
/// multipliers are all positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawScores {
    scores: [f64; 6],
}

impl RawScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for an emotion. `Neutral` is always `0.0`.
    pub fn get(&self, emotion: Emotion) -> f64 {
        emotion.slot().map_or(0.0, |i| self.scores[i])
    }

    /// Add weight to an emotion's score. Adding to `Neutral` is ignored.
    pub fn add(&mut self, emotion: Emotion, weight: f64) {
        if let Some(i) = emotion.slot() {
            self.scores[i] += weight;
        }
    }

    /// Multiply an emotion's score in place.
    pub fn scale(&mut self, emotion: Emotion, factor: f64) {
        if let Some(i) = emotion.slot() {
            self.scores[i] *= factor;
        }
    }

    /// Sum over all scored emotions.
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// True when every emotion scored exactly zero.
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|s| *s == 0.0)
    }

    /// `(emotion, score)` pairs in [`Emotion::SCORED`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::SCORED.iter().copied().zip(self.scores.iter().copied())
    }

    /// The highest-scoring emotion. Ties go to the earliest in
    /// [`Emotion::SCORED`].
    pub fn leader(&self) -> (Emotion, f64) {
        self.iter()
            .fold((Emotion::SCORED[0], self.scores[0]), |best, (emotion, score)| {
                if score > best.1 {
                    (emotion, score)
                } else {
                    best
                }
            })
    }
}

impl Serialize for RawScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (emotion, score) in self.iter() {
            map.serialize_entry(emotion.as_str(), &score)?;
        }
        map.end()
    }
}

/// A completed classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionReading {
    /// Winning emotion, or `Neutral` when nothing matched.
    pub primary_emotion: Emotion,
    /// Primary emotion's share of the total score, in `[0, 1]`.
    pub confidence: f64,
    /// Normalized share per emotion.
    ///
    /// Holds all six scored emotions for a normal reading, or only
    /// `{neutral: 0.8}` when there was no signal.
    pub all_emotions: BTreeMap<Emotion, f64>,
    /// Scores after every modifier but before normalization.
    pub raw_scores: RawScores,
}

impl EmotionReading {
    /// Confidence reported when no lexicon word or pattern fired.
    pub const NEUTRAL_CONFIDENCE: f64 = 0.8;

    /// The fixed reading for zero-signal text.
    pub fn neutral(raw_scores: RawScores) -> Self {
        let mut all_emotions = BTreeMap::new();
        all_emotions.insert(Emotion::Neutral, Self::NEUTRAL_CONFIDENCE);
        Self {
            primary_emotion: Emotion::Neutral,
            confidence: Self::NEUTRAL_CONFIDENCE,
            all_emotions,
            raw_scores,
        }
    }

    /// Normalize finished scores into a reading.
    ///
    /// All-zero scores produce [`EmotionReading::neutral`].
    pub fn from_scores(raw_scores: RawScores) -> Self {
        if raw_scores.is_zero() {
            return Self::neutral(raw_scores);
        }

        let total = raw_scores.total();
        let (primary_emotion, primary_score) = raw_scores.leader();
        let all_emotions = raw_scores
            .iter()
            .map(|(emotion, score)| (emotion, score / total))
            .collect();

        Self {
            primary_emotion,
            confidence: (primary_score / total).min(1.0),
            all_emotions,
            raw_scores,
        }
    }

    /// Normalized share for one emotion, `0.0` if absent.
    pub fn share(&self, emotion: Emotion) -> f64 {
        self.all_emotions.get(&emotion).copied().unwrap_or(0.0)
    }
}

/// Outcome of [`detect_emotion`](crate::detect_emotion).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmotionResult {
    /// Input passed the length check and was scored.
    Analyzed(EmotionReading),
    /// Trimmed input had fewer than two characters. No scores exist.
    TooShort,
}

impl EmotionResult {
    /// `false` only for [`EmotionResult::TooShort`].
    pub fn success(&self) -> bool {
        matches!(self, EmotionResult::Analyzed(_))
    }

    pub fn reading(&self) -> Option<&EmotionReading> {
        match self {
            EmotionResult::Analyzed(reading) => Some(reading),
            EmotionResult::TooShort => None,
        }
    }

    pub fn primary_emotion(&self) -> Option<Emotion> {
        self.reading().map(|r| r.primary_emotion)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.reading().map(|r| r.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_never_scores() {
        let mut scores = RawScores::new();
        scores.add(Emotion::Neutral, 5.0);
        scores.scale(Emotion::Neutral, 2.0);
        assert!(scores.is_zero());
        assert_eq!(scores.get(Emotion::Neutral), 0.0);
    }

    #[test]
    fn leader_breaks_ties_by_enumeration_order() {
        let mut scores = RawScores::new();
        scores.add(Emotion::Joy, 2.0);
        scores.add(Emotion::Fear, 2.0);
        scores.add(Emotion::Disgust, 2.0);
        assert_eq!(scores.leader(), (Emotion::Fear, 2.0));
    }

    #[test]
    fn reading_from_zero_scores_is_neutral() {
        let reading = EmotionReading::from_scores(RawScores::new());
        assert_eq!(reading.primary_emotion, Emotion::Neutral);
        assert_eq!(reading.confidence, 0.8);
        assert_eq!(reading.all_emotions.len(), 1);
        assert_eq!(reading.share(Emotion::Neutral), 0.8);
    }

    #[test]
    fn reading_shares_cover_every_scored_emotion() {
        let mut scores = RawScores::new();
        scores.add(Emotion::Anger, 3.0);
        scores.add(Emotion::Sadness, 1.0);
        let reading = EmotionReading::from_scores(scores);

        assert_eq!(reading.primary_emotion, Emotion::Anger);
        assert_eq!(reading.confidence, 0.75);
        assert_eq!(reading.all_emotions.len(), 6);
        assert_eq!(reading.share(Emotion::Joy), 0.0);
        let sum: f64 = reading.all_emotions.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn label_round_trip() {
        for emotion in Emotion::SCORED {
            assert_eq!(Emotion::from_label(emotion.as_str()), Some(emotion));
        }
        assert_eq!(Emotion::from_label(" Neutral "), Some(Emotion::Neutral));
        assert_eq!(Emotion::from_label("mixed"), None);
    }

    #[test]
    fn too_short_exposes_no_scores() {
        let result = EmotionResult::TooShort;
        assert!(!result.success());
        assert!(result.reading().is_none());
        assert!(result.confidence().is_none());
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(EmotionResult::TooShort).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "too_short" }));

        let mut scores = RawScores::new();
        scores.add(Emotion::Joy, 2.0);
        let json = serde_json::to_value(EmotionResult::Analyzed(EmotionReading::from_scores(
            scores,
        )))
        .unwrap();
        assert_eq!(json["status"], "analyzed");
        assert_eq!(json["primary_emotion"], "joy");
        assert_eq!(json["raw_scores"]["joy"], 2.0);
        assert_eq!(json["all_emotions"]["anger"], 0.0);
    }
}
