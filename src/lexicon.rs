//! Emotion lexicon: trigger words grouped by emotion and intensity tier.
//!
//! Words are matched as substrings of normalized (lowercase) text, so every
//! stored word is trimmed and lowercased on insertion. Within one emotion a
//! word may appear in a single tier only. The same word under two different
//! emotions is fine and expected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Emotion, LexiconError, LexiconResult};

/// How strongly a trigger word signals its emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

    /// Score added when a word of this tier is present.
    pub fn weight(&self) -> f64 {
        match self {
            Tier::High => 3.0,
            Tier::Medium => 2.0,
            Tier::Low => 1.0,
        }
    }
}

/// One trigger word and its tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub word: String,
    pub tier: Tier,
}

/// Built-in word lists for one emotion.
struct TierWords {
    high: &'static [&'static str],
    medium: &'static [&'static str],
    low: &'static [&'static str],
}

impl TierWords {
    fn tiers(&self) -> [(Tier, &'static [&'static str]); 3] {
        [
            (Tier::High, self.high),
            (Tier::Medium, self.medium),
            (Tier::Low, self.low),
        ]
    }
}

const ANGER: TierWords = TierWords {
    high: &[
        "furious", "enraged", "livid", "outraged", "hate", "seething", "sick of", "fed up",
    ],
    medium: &[
        "angry",
        "mad at",
        "frustrated",
        "frustrating",
        "annoyed",
        "irritated",
        "pissed",
        "ridiculous",
        "unacceptable",
        "ruin",
    ],
    low: &["bothered", "irked", "displeased", "tired of", "over it", "seriously"],
};

const SADNESS: TierWords = TierWords {
    high: &[
        "devastated",
        "heartbroken",
        "miserable",
        "hopeless",
        "depressed",
        "crushed",
    ],
    medium: &["sad", "hurt", "lonely", "disappointed", "miss you", "crying"],
    low: &["down", "blue", "bummed", "sigh", "wish"],
};

const FEAR: TierWords = TierWords {
    high: &[
        "terrified",
        "panicking",
        "petrified",
        "horrified",
        "scared to death",
    ],
    medium: &["scared", "afraid", "anxious", "worried", "nervous", "frightened"],
    low: &["concerned", "uneasy", "unsure", "hesitant", "worry"],
};

const JOY: TierWords = TierWords {
    high: &["ecstatic", "thrilled", "overjoyed", "elated", "love you", "amazing"],
    medium: &["happy", "glad", "excited", "grateful", "wonderful", "great"],
    low: &["good", "nice", "thanks", "pleased", "fine", "okay"],
};

const SURPRISE: TierWords = TierWords {
    high: &[
        "shocked",
        "stunned",
        "astonished",
        "speechless",
        "unbelievable",
    ],
    medium: &["surprised", "amazed", "can't believe", "no way", "wow"],
    low: &["unexpected", "suddenly", "huh", "out of nowhere"],
};

const DISGUST: TierWords = TierWords {
    high: &[
        "disgusting",
        "revolting",
        "repulsive",
        "vile",
        "sickening",
    ],
    medium: &["gross", "disgusted", "nasty", "appalled", "pathetic"],
    low: &["eww", "yuck", "distasteful", "cringe"],
};

fn builtin_words(emotion: Emotion) -> Option<&'static TierWords> {
    match emotion {
        Emotion::Anger => Some(&ANGER),
        Emotion::Sadness => Some(&SADNESS),
        Emotion::Fear => Some(&FEAR),
        Emotion::Joy => Some(&JOY),
        Emotion::Surprise => Some(&SURPRISE),
        Emotion::Disgust => Some(&DISGUST),
        Emotion::Neutral => None,
    }
}

/// Trigger words for the six scored emotions.
#[derive(Debug, Clone, Default)]
pub struct EmotionLexicon {
    entries: [Vec<LexiconEntry>; 6],
}

impl EmotionLexicon {
    /// An empty lexicon, for fully custom tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in lexicon.
    pub fn builtin() -> LexiconResult<Self> {
        let mut lexicon = Self::empty();
        for emotion in Emotion::SCORED {
            if let Some(words) = builtin_words(emotion) {
                for (tier, list) in words.tiers() {
                    for word in list {
                        lexicon.insert(emotion, tier, word)?;
                    }
                }
            }
        }
        Ok(lexicon)
    }

    /// Add a trigger word.
    ///
    /// Fails if the word is empty, if `emotion` is `Neutral`, or if the word is
    /// already present in any tier of the same emotion.
    pub fn insert(&mut self, emotion: Emotion, tier: Tier, word: &str) -> LexiconResult<()> {
        let slot = emotion.slot().ok_or(LexiconError::UnscoredEmotion)?;

        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(LexiconError::EmptyWord { emotion, tier });
        }

        if let Some(existing) = self.entries[slot].iter().find(|e| e.word == word) {
            return Err(LexiconError::DuplicateWord {
                emotion,
                word,
                existing: existing.tier,
                duplicate: tier,
            });
        }

        self.entries[slot].push(LexiconEntry { word, tier });
        Ok(())
    }

    /// Entries for one emotion in insertion order. Empty for `Neutral`.
    pub fn entries(&self, emotion: Emotion) -> &[LexiconEntry] {
        match emotion.slot() {
            Some(slot) => &self.entries[slot],
            None => &[],
        }
    }

    /// Words in one emotion's tier.
    pub fn tier_words(&self, emotion: Emotion, tier: Tier) -> Vec<&str> {
        self.entries(emotion)
            .iter()
            .filter(|e| e.tier == tier)
            .map(|e| e.word.as_str())
            .collect()
    }

    /// Total number of entries across all emotions.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which tier, if any, holds `word` for `emotion`.
    pub fn tier_of(&self, emotion: Emotion, word: &str) -> Option<Tier> {
        let word = word.trim().to_lowercase();
        self.entries(emotion)
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.tier)
    }

    /// Count of entries per emotion, useful for diagnostics.
    pub fn summary(&self) -> HashMap<Emotion, usize> {
        Emotion::SCORED
            .iter()
            .map(|e| (*e, self.entries(*e).len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicon_is_valid() {
        let lexicon = EmotionLexicon::builtin().unwrap();
        for emotion in Emotion::SCORED {
            assert!(
                !lexicon.entries(emotion).is_empty(),
                "{} has no words",
                emotion
            );
        }
        assert!(lexicon.entries(Emotion::Neutral).is_empty());
    }

    #[test]
    fn builtin_tiers_are_populated() {
        let lexicon = EmotionLexicon::builtin().unwrap();
        assert_eq!(lexicon.tier_of(Emotion::Anger, "furious"), Some(Tier::High));
        assert_eq!(
            lexicon.tier_of(Emotion::Anger, "frustrated"),
            Some(Tier::Medium)
        );
        assert_eq!(lexicon.tier_of(Emotion::Fear, "worry"), Some(Tier::Low));
        assert!(lexicon.tier_words(Emotion::Joy, Tier::High).contains(&"thrilled"));
    }

    #[test]
    fn duplicate_within_emotion_is_rejected() {
        let mut lexicon = EmotionLexicon::empty();
        lexicon.insert(Emotion::Anger, Tier::High, "livid").unwrap();
        let err = lexicon
            .insert(Emotion::Anger, Tier::Low, "  LIVID ")
            .unwrap_err();
        assert!(matches!(
            err,
            LexiconError::DuplicateWord {
                existing: Tier::High,
                duplicate: Tier::Low,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_across_emotions_is_allowed() {
        let mut lexicon = EmotionLexicon::empty();
        lexicon.insert(Emotion::Anger, Tier::High, "sick").unwrap();
        lexicon.insert(Emotion::Disgust, Tier::Medium, "sick").unwrap();
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn empty_and_neutral_words_are_rejected() {
        let mut lexicon = EmotionLexicon::empty();
        assert!(matches!(
            lexicon.insert(Emotion::Joy, Tier::Low, "   "),
            Err(LexiconError::EmptyWord { .. })
        ));
        assert!(matches!(
            lexicon.insert(Emotion::Neutral, Tier::Low, "calm"),
            Err(LexiconError::UnscoredEmotion)
        ));
        assert!(lexicon.is_empty());
    }

    #[test]
    fn tier_weights() {
        assert_eq!(Tier::High.weight(), 3.0);
        assert_eq!(Tier::Medium.weight(), 2.0);
        assert_eq!(Tier::Low.weight(), 1.0);
    }
}
