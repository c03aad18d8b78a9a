//! One-paragraph coaching advice from an [`EmotionResult`].

use crate::{Emotion, EmotionResult, RelationshipContext};

/// Readings below this confidence get the generic low-confidence advice.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.3;

pub const COULD_NOT_ANALYZE: &str =
    "Could not analyze this message. Try writing a little more so the tone comes through.";

pub const LOW_CONFIDENCE_ADVICE: &str = "Your message seems fairly neutral. Consider being more direct about how you feel and what you need.";

fn emotion_advice(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anger => "Strong frustration comes through in this message. Try describing the specific behavior and how it affects you, rather than criticizing the person.",
        Emotion::Sadness => "This message carries hurt or sadness. It is okay to share that, and saying what you need helps the other person respond with care.",
        Emotion::Fear => "There is worry in this message. Naming your concern plainly and asking for a concrete plan can ease the tension.",
        Emotion::Joy => "This message has a warm, positive tone. Letting the other person know what you appreciate strengthens the connection.",
        Emotion::Surprise => "This message reads as surprised. A clarifying question can help you understand what happened before you react.",
        Emotion::Disgust => "Strong disapproval comes through here. Focus on the specific issue and avoid wording that could land as a personal attack.",
        Emotion::Neutral => "Your message reads as calm and even. If something important is behind it, consider saying so explicitly.",
    }
}

fn context_advice(context: RelationshipContext) -> Option<&'static str> {
    match context {
        RelationshipContext::Coparenting => {
            Some("Keep the focus on your child's wellbeing and on practical next steps.")
        }
        RelationshipContext::Romantic => {
            Some("Lead with care for the relationship and use \"I\" statements to share how you feel.")
        }
        RelationshipContext::Workplace => {
            Some("Keep it professional and solution-focused, with a clear request or next step.")
        }
        RelationshipContext::General | RelationshipContext::Family | RelationshipContext::Friend => {
            None
        }
    }
}

/// Coaching advice for a detection result. Always returns text.
pub fn advise(result: &EmotionResult, context: Option<RelationshipContext>) -> String {
    let reading = match result {
        EmotionResult::Analyzed(reading) => reading,
        EmotionResult::TooShort => return COULD_NOT_ANALYZE.to_string(),
    };

    if reading.confidence < LOW_CONFIDENCE_THRESHOLD {
        return LOW_CONFIDENCE_ADVICE.to_string();
    }

    let mut advice = emotion_advice(reading.primary_emotion).to_string();
    if let Some(extra) = context.and_then(context_advice) {
        advice.push(' ');
        advice.push_str(extra);
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmotionReading, RawScores};

    fn reading_with(scores: &[(Emotion, f64)]) -> EmotionResult {
        let mut raw = RawScores::new();
        for (emotion, score) in scores {
            raw.add(*emotion, *score);
        }
        EmotionResult::Analyzed(EmotionReading::from_scores(raw))
    }

    #[test]
    fn too_short_cannot_be_analyzed() {
        assert_eq!(advise(&EmotionResult::TooShort, None), COULD_NOT_ANALYZE);
        assert_eq!(
            advise(&EmotionResult::TooShort, Some(RelationshipContext::Romantic)),
            COULD_NOT_ANALYZE
        );
    }

    #[test]
    fn low_confidence_ignores_primary_emotion() {
        // anger wins the tie at 2/7
        let result = reading_with(&[
            (Emotion::Anger, 2.0),
            (Emotion::Sadness, 2.0),
            (Emotion::Fear, 2.0),
            (Emotion::Joy, 1.0),
        ]);
        assert_eq!(result.primary_emotion(), Some(Emotion::Anger));
        assert!(result.confidence().unwrap() < 0.3);
        assert_eq!(
            advise(&result, Some(RelationshipContext::Workplace)),
            LOW_CONFIDENCE_ADVICE
        );
    }

    #[test]
    fn anger_with_coparenting() {
        let result = reading_with(&[(Emotion::Anger, 4.0)]);
        insta::assert_snapshot!(
            advise(&result, Some(RelationshipContext::Coparenting)),
            @"Strong frustration comes through in this message. Try describing the specific behavior and how it affects you, rather than criticizing the person. Keep the focus on your child's wellbeing and on practical next steps."
        );
    }

    #[test]
    fn neutral_has_its_own_template() {
        let result = EmotionResult::Analyzed(EmotionReading::neutral(RawScores::new()));
        insta::assert_snapshot!(
            advise(&result, None),
            @"Your message reads as calm and even. If something important is behind it, consider saying so explicitly."
        );
    }

    #[test]
    fn contexts_without_advice_append_nothing() {
        let result = reading_with(&[(Emotion::Joy, 2.0)]);
        let plain = advise(&result, None);
        assert_eq!(advise(&result, Some(RelationshipContext::Family)), plain);
        assert_eq!(advise(&result, Some(RelationshipContext::Friend)), plain);
        assert_ne!(advise(&result, Some(RelationshipContext::Romantic)), plain);
    }
}
