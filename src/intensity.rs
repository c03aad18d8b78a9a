//! Paralinguistic intensity: shouting and punctuation.
//!
//! Measured on the original text, since normalization lowercases it. The
//! resulting multiplier is applied in full to the negative emotions and capped
//! at [`POSITIVE_MULTIPLIER_CAP`] for joy and surprise.

use serde::Serialize;

use crate::{Emotion, RawScores};

/// Ceiling on the multiplier applied to joy and surprise.
pub const POSITIVE_MULTIPLIER_CAP: f64 = 1.3;

/// How much of the text is written in capitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapsIntensity {
    /// Ratio above 0.7
    High,
    /// Ratio above 0.3
    Medium,
    /// Everything else, including text with no letters
    Low,
}

impl CapsIntensity {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.7 {
            CapsIntensity::High
        } else if ratio > 0.3 {
            CapsIntensity::Medium
        } else {
            CapsIntensity::Low
        }
    }

    fn bonus(&self) -> f64 {
        match self {
            CapsIntensity::High => 0.5,
            CapsIntensity::Medium => 0.3,
            CapsIntensity::Low => 0.0,
        }
    }
}

/// Intensity cues measured from one message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntensityProfile {
    /// Uppercase letters over all letters, `0.0` when there are no letters.
    pub caps_ratio: f64,
    pub caps: CapsIntensity,
    pub exclamations: usize,
    pub questions: usize,
}

impl IntensityProfile {
    /// Measure intensity cues on un-normalized text.
    pub fn measure(original: &str) -> Self {
        let mut letters = 0usize;
        let mut caps = 0usize;
        let mut exclamations = 0usize;
        let mut questions = 0usize;

        for c in original.chars() {
            if c.is_alphabetic() {
                letters += 1;
                if c.is_uppercase() {
                    caps += 1;
                }
            } else if c == '!' {
                exclamations += 1;
            } else if c == '?' {
                questions += 1;
            }
        }

        let caps_ratio = if letters == 0 {
            0.0
        } else {
            caps as f64 / letters as f64
        };

        Self {
            caps_ratio,
            caps: CapsIntensity::from_ratio(caps_ratio),
            exclamations,
            questions,
        }
    }

    /// Combined multiplier, starting from `1.0`.
    pub fn multiplier(&self) -> f64 {
        let exclamation_bonus = match self.exclamations {
            0 => 0.0,
            1 => 0.2,
            2 => 0.3,
            _ => 0.4,
        };
        let question_bonus = match self.questions {
            0 => 0.0,
            1 => 0.1,
            _ => 0.3,
        };

        1.0 + self.caps.bonus() + exclamation_bonus + question_bonus
    }

    /// Multiplier for a particular emotion.
    pub fn multiplier_for(&self, emotion: Emotion) -> f64 {
        let full = self.multiplier();
        if emotion.is_negative() {
            full
        } else {
            full.min(POSITIVE_MULTIPLIER_CAP)
        }
    }

    /// Scale every score by its emotion's multiplier.
    pub fn apply(&self, scores: &mut RawScores) {
        for emotion in Emotion::SCORED {
            scores.scale(emotion, self.multiplier_for(emotion));
        }
    }

    /// True when no cue raised the multiplier.
    pub fn is_calm(&self) -> bool {
        self.multiplier() == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn caps_thresholds() {
        assert_eq!(CapsIntensity::from_ratio(0.71), CapsIntensity::High);
        assert_eq!(CapsIntensity::from_ratio(0.7), CapsIntensity::Medium);
        assert_eq!(CapsIntensity::from_ratio(0.31), CapsIntensity::Medium);
        assert_eq!(CapsIntensity::from_ratio(0.3), CapsIntensity::Low);
    }

    #[test]
    fn no_letters_is_low() {
        let profile = IntensityProfile::measure("123 ... !!");
        assert_eq!(profile.caps_ratio, 0.0);
        assert_eq!(profile.caps, CapsIntensity::Low);
        assert_eq!(profile.exclamations, 2);
    }

    #[test]
    fn shouting_with_exclamations() {
        let profile = IntensityProfile::measure("YOU ALWAYS RUIN EVERYTHING!!!");
        assert_eq!(profile.caps, CapsIntensity::High);
        assert_eq!(profile.exclamations, 3);
        assert!(close(profile.multiplier(), 1.9));
        assert!(close(profile.multiplier_for(Emotion::Anger), 1.9));
        assert!(close(profile.multiplier_for(Emotion::Joy), 1.3));
    }

    #[test]
    fn exclamation_and_question_tiers() {
        assert!(close(IntensityProfile::measure("ok!").multiplier(), 1.2));
        assert!(close(IntensityProfile::measure("ok!!").multiplier(), 1.3));
        assert!(close(IntensityProfile::measure("ok!!!!!").multiplier(), 1.4));
        assert!(close(IntensityProfile::measure("ok?").multiplier(), 1.1));
        assert!(close(IntensityProfile::measure("ok??").multiplier(), 1.3));
        assert!(close(IntensityProfile::measure("really?!").multiplier(), 1.3));
    }

    #[test]
    fn mixed_case_is_medium() {
        // 7 capitals out of 15 letters
        let profile = IntensityProfile::measure("You ALWAYS do this");
        assert_eq!(profile.caps, CapsIntensity::Medium);
        assert!(close(profile.multiplier(), 1.3));
    }

    #[test]
    fn positive_emotions_are_capped() {
        let profile = IntensityProfile::measure("WOW THAT IS GREAT!!!???");
        let mut scores = RawScores::new();
        scores.add(Emotion::Joy, 2.0);
        scores.add(Emotion::Anger, 2.0);
        profile.apply(&mut scores);
        assert!(close(scores.get(Emotion::Joy), 2.6));
        assert!(close(scores.get(Emotion::Anger), 2.0 * 2.2));
    }

    #[test]
    fn calm_text_leaves_scores_alone() {
        let profile = IntensityProfile::measure("see you at five");
        assert!(profile.is_calm());
        let mut scores = RawScores::new();
        scores.add(Emotion::Sadness, 1.0);
        profile.apply(&mut scores);
        assert_eq!(scores.get(Emotion::Sadness), 1.0);
    }
}
