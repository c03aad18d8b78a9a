use crate::{
    classify_sentiment, detect_emotion, generate_advice, Emotion, EmotionReading, EmotionResult,
    RawScores, Sentiment, LOW_CONFIDENCE_ADVICE,
};

const CONTEXTS: [Option<&str>; 7] = [
    None,
    Some("general"),
    Some("romantic"),
    Some("coparenting"),
    Some("workplace"),
    Some("family"),
    Some("made-up"),
];

const SAMPLES: &[&str] = &[
    "You always do this",
    "YOU ALWAYS RUIN EVERYTHING!!!",
    "I'm frustrated about our child's school pickup",
    "I'm so happy we went on date night, thank you for planning it",
    "what if the client hates the report?",
    "I can't believe you did that... wow",
    "That's so gross, it makes me sick",
    "I feel so alone lately and nobody cares",
    "xyz qwerty",
    "ok",
];

fn anger_score(result: &EmotionResult) -> f64 {
    result.reading().unwrap().raw_scores.get(Emotion::Anger)
}

#[test]
fn detection_is_deterministic() {
    for text in SAMPLES {
        for context in CONTEXTS {
            let first = detect_emotion(text, context);
            for _ in 0..3 {
                assert_eq!(detect_emotion(text, context), first, "{:?} / {:?}", text, context);
            }
        }
    }
}

#[test]
fn shares_sum_to_one() {
    for text in SAMPLES {
        for context in CONTEXTS {
            let result = detect_emotion(text, context);
            let reading = result.reading().expect("samples are long enough");
            assert!(reading.all_emotions.values().all(|share| *share >= 0.0));
            assert!((0.0..=1.0).contains(&reading.confidence));

            if reading.primary_emotion == Emotion::Neutral {
                continue;
            }
            let sum: f64 = reading.all_emotions.values().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{:?} sums to {}", text, sum);
        }
    }
}

#[test]
fn minimum_length_guard() {
    for context in CONTEXTS {
        assert!(!detect_emotion("", context).success());
        assert!(!detect_emotion("a", context).success());
        assert!(!detect_emotion("  a  ", context).success());
        assert!(detect_emotion("ab", context).success());
    }
}

#[test]
fn zero_signal_is_confident_neutral() {
    let result = detect_emotion("xyz qwerty", None);
    let reading = result.reading().unwrap();
    assert_eq!(reading.primary_emotion, Emotion::Neutral);
    assert_eq!(reading.confidence, 0.8);
    assert_eq!(reading.all_emotions.len(), 1);
    assert_eq!(reading.share(Emotion::Neutral), 0.8);
    assert!(reading.raw_scores.is_zero());
}

#[test]
fn shouting_raises_anger() {
    let loud = detect_emotion("YOU ALWAYS RUIN EVERYTHING!!!", None);
    let quiet = detect_emotion("you always ruin everything", None);
    assert!(anger_score(&loud) > anger_score(&quiet));
    assert!((anger_score(&quiet) - 4.0).abs() < 1e-9);
    assert!((anger_score(&loud) - 7.6).abs() < 1e-9);
}

#[test]
fn coparenting_context_boosts_anger() {
    let text = "I'm so frustrated about our child";
    let boosted = detect_emotion(text, Some("coparenting"));
    let plain = detect_emotion(text, None);
    assert!(anger_score(&boosted) > anger_score(&plain));
    assert!((anger_score(&boosted) - 2.6).abs() < 1e-9);
}

#[test]
fn unrecognized_context_is_noop() {
    let text = "I'm so frustrated about our child";
    let plain = detect_emotion(text, None);
    assert_eq!(detect_emotion(text, Some("neighbour")), plain);
    assert_eq!(detect_emotion(text, Some("family")), plain);
}

#[test]
fn pattern_alone_detects_anger() {
    let result = detect_emotion("You always do this", None);
    let reading = result.reading().unwrap();
    assert_eq!(reading.primary_emotion, Emotion::Anger);
    assert_eq!(reading.confidence, 1.0);
    assert_eq!(reading.raw_scores.get(Emotion::Anger), 2.0);
}

#[test]
fn sentiment_tie_is_neutral() {
    let result = classify_sentiment("I love the new schedule but I hate the drive");
    assert_eq!(result.positive_hits, result.negative_hits);
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.confidence, 0.6);
}

#[test]
fn low_confidence_advice_regardless_of_emotion() {
    for winner in Emotion::SCORED {
        let mut scores = RawScores::new();
        for emotion in Emotion::SCORED {
            scores.add(emotion, 1.0);
        }
        scores.add(winner, 0.5);
        let result = EmotionResult::Analyzed(EmotionReading::from_scores(scores));
        assert_eq!(result.primary_emotion(), Some(winner));
        assert!(result.confidence().unwrap() < 0.3);
        for context in CONTEXTS {
            assert_eq!(generate_advice(&result, context), LOW_CONFIDENCE_ADVICE);
        }
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let handles: Vec<_> = SAMPLES
        .iter()
        .map(|text| {
            let text = text.to_string();
            std::thread::spawn(move || detect_emotion(&text, Some("workplace")))
        })
        .collect();

    for (handle, text) in handles.into_iter().zip(SAMPLES) {
        let from_thread = handle.join().unwrap();
        assert_eq!(from_thread, detect_emotion(text, Some("workplace")));
    }
}
