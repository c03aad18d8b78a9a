//! Relationship context and the score boosts it implies.
//!
//! A context only boosts scores when the message itself mentions it: the
//! label picks a [`ContextModifier`], and the modifier fires if any of its
//! trigger substrings appears in the normalized text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Emotion, RawScores};

/// The host application's relationship vocabulary.
///
/// Parsing is lenient: unknown labels become [`RelationshipContext::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RelationshipContext {
    #[default]
    General,
    Romantic,
    Coparenting,
    Workplace,
    Family,
    Friend,
}

impl RelationshipContext {
    pub const ALL: [RelationshipContext; 6] = [
        RelationshipContext::General,
        RelationshipContext::Romantic,
        RelationshipContext::Coparenting,
        RelationshipContext::Workplace,
        RelationshipContext::Family,
        RelationshipContext::Friend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipContext::General => "general",
            RelationshipContext::Romantic => "romantic",
            RelationshipContext::Coparenting => "coparenting",
            RelationshipContext::Workplace => "workplace",
            RelationshipContext::Family => "family",
            RelationshipContext::Friend => "friend",
        }
    }

    /// Parse a label, falling back to `General`.
    ///
    /// Case and surrounding whitespace are ignored, and `co-parenting` is
    /// accepted alongside `coparenting`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "romantic" => RelationshipContext::Romantic,
            "coparenting" | "co-parenting" => RelationshipContext::Coparenting,
            "workplace" => RelationshipContext::Workplace,
            "family" => RelationshipContext::Family,
            "friend" => RelationshipContext::Friend,
            _ => RelationshipContext::General,
        }
    }

    /// The score modifier for this context, if it has one.
    ///
    /// Only coparenting, romantic and workplace affect scoring.
    pub fn modifier(&self) -> Option<&'static ContextModifier> {
        match self {
            RelationshipContext::Coparenting => Some(&COPARENTING),
            RelationshipContext::Romantic => Some(&ROMANTIC),
            RelationshipContext::Workplace => Some(&WORKPLACE),
            RelationshipContext::General
            | RelationshipContext::Family
            | RelationshipContext::Friend => None,
        }
    }
}

impl From<&str> for RelationshipContext {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for RelationshipContext {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl fmt::Display for RelationshipContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger substrings plus per-emotion multiplicative boosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextModifier {
    pub triggers: &'static [&'static str],
    /// Each listed emotion's score is multiplied by `1 + boost`.
    pub boosts: &'static [(Emotion, f64)],
}

impl ContextModifier {
    /// First trigger found in the normalized text, if any.
    pub fn trigger_in(&self, normalized: &str) -> Option<&'static str> {
        self.triggers
            .iter()
            .copied()
            .find(|trigger| normalized.contains(trigger))
    }

    pub fn is_present(&self, normalized: &str) -> bool {
        self.trigger_in(normalized).is_some()
    }

    /// Apply the boosts unconditionally.
    pub fn apply(&self, scores: &mut RawScores) {
        for (emotion, boost) in self.boosts {
            scores.scale(*emotion, 1.0 + boost);
        }
    }

    /// Boost for one emotion, `0.0` when it is not listed.
    pub fn boost_for(&self, emotion: Emotion) -> f64 {
        self.boosts
            .iter()
            .find(|(e, _)| *e == emotion)
            .map_or(0.0, |(_, boost)| *boost)
    }
}

const COPARENTING: ContextModifier = ContextModifier {
    triggers: &[
        "our child",
        "our kids",
        "the kids",
        "our son",
        "our daughter",
        "custody",
        "pickup",
        "pick up",
        "drop off",
        "visitation",
        "child support",
        "school",
    ],
    boosts: &[
        (Emotion::Anger, 0.3),
        (Emotion::Fear, 0.2),
        (Emotion::Sadness, 0.2),
    ],
};

const ROMANTIC: ContextModifier = ContextModifier {
    triggers: &[
        "our relationship",
        "love you",
        "babe",
        "honey",
        "date night",
        "anniversary",
        "together",
        "cheating",
    ],
    boosts: &[
        (Emotion::Sadness, 0.3),
        (Emotion::Fear, 0.2),
        (Emotion::Joy, 0.2),
    ],
};

const WORKPLACE: ContextModifier = ContextModifier {
    triggers: &[
        "meeting",
        "deadline",
        "project",
        "boss",
        "manager",
        "client",
        "report",
        "office",
        "coworker",
        "team",
    ],
    boosts: &[
        (Emotion::Fear, 0.3),
        (Emotion::Anger, 0.2),
        (Emotion::Disgust, 0.1),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parsing() {
        assert_eq!(
            RelationshipContext::parse("Coparenting"),
            RelationshipContext::Coparenting
        );
        assert_eq!(
            RelationshipContext::parse(" co-parenting "),
            RelationshipContext::Coparenting
        );
        assert_eq!(RelationshipContext::parse("friend"), RelationshipContext::Friend);
        assert_eq!(
            RelationshipContext::parse("pen pal"),
            RelationshipContext::General
        );
        for context in RelationshipContext::ALL {
            assert_eq!(RelationshipContext::parse(context.as_str()), context);
        }
    }

    #[test]
    fn only_three_contexts_modify_scores() {
        let with_modifier: Vec<_> = RelationshipContext::ALL
            .iter()
            .filter(|c| c.modifier().is_some())
            .map(|c| c.as_str())
            .collect();
        assert_eq!(with_modifier, vec!["romantic", "coparenting", "workplace"]);
    }

    #[test]
    fn trigger_detection() {
        let modifier = RelationshipContext::Coparenting.modifier().unwrap();
        assert_eq!(
            modifier.trigger_in("can you pick up our child at 5"),
            Some("our child")
        );
        assert!(!modifier.is_present("see you at dinner"));
    }

    #[test]
    fn boosts_only_listed_emotions() {
        let modifier = RelationshipContext::Workplace.modifier().unwrap();
        let mut scores = RawScores::new();
        scores.add(Emotion::Fear, 2.0);
        scores.add(Emotion::Joy, 2.0);
        modifier.apply(&mut scores);
        assert!((scores.get(Emotion::Fear) - 2.6).abs() < 1e-9);
        assert_eq!(scores.get(Emotion::Joy), 2.0);
        assert_eq!(modifier.boost_for(Emotion::Surprise), 0.0);
    }

    #[test]
    fn deserializes_unknown_labels_as_general() {
        #[derive(Deserialize)]
        struct Wrapper {
            context: RelationshipContext,
        }
        let parsed: Wrapper = serde_json::from_str(r#"{"context":"Workplace"}"#).unwrap();
        assert_eq!(parsed.context, RelationshipContext::Workplace);
        let parsed: Wrapper = serde_json::from_str(r#"{"context":"neighbour"}"#).unwrap();
        assert_eq!(parsed.context, RelationshipContext::General);
    }
}
