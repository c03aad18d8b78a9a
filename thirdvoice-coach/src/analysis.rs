//! Message analysis from the offline engine or from a model's reply.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};
use thirdvoice::{
    advise, classify_normalized, CapsIntensity, EmotionEngine, EmotionResult, IntensityProfile,
    RelationshipContext, Sentiment,
};

use crate::{CoachError, CoachResult};

/// Confidence assumed when a model's JSON omits it.
pub const DEFAULT_MODEL_CONFIDENCE: f64 = 0.5;
/// Confidence reported when sentiment had to be inferred from free text.
pub const KEYWORD_CONFIDENCE: f64 = 0.8;
/// Primary emotion reported when the model did not name one.
pub const UNSPECIFIED_EMOTION: &str = "mixed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// The offline lexicon engine
    Offline,
    /// Structured JSON from a remote model
    Model,
    /// A remote model's free text, read for sentiment keywords
    ModelText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionScore {
    pub emotion: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageAnalysis {
    pub source: AnalysisSource,
    pub sentiment: Sentiment,
    pub confidence: f64,
    /// A free label, since models are not limited to the engine's emotions.
    pub primary_emotion: String,
    /// Highest score first.
    pub emotions: Vec<EmotionScore>,
    pub tone: String,
    /// Words or phrases likely to land badly with the reader.
    pub potential_triggers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl MessageAnalysis {
    /// Analyze a message with the offline engine.
    pub fn offline(
        engine: &EmotionEngine,
        text: &str,
        context: RelationshipContext,
    ) -> CoachResult<Self> {
        let detection = engine.inspect(text, Some(context));
        let reading = match &detection.result {
            EmotionResult::Analyzed(reading) => reading,
            EmotionResult::TooShort => return Err(CoachError::MessageTooShort),
        };

        let sentiment = classify_normalized(&detection.normalized).sentiment;
        let intensity = detection
            .intensity
            .unwrap_or_else(|| IntensityProfile::measure(text));

        let mut emotions: Vec<EmotionScore> = reading
            .all_emotions
            .iter()
            .filter(|(_, share)| **share > 0.0)
            .map(|(emotion, share)| EmotionScore {
                emotion: emotion.as_str().to_string(),
                score: *share,
            })
            .collect();
        sort_by_score(&mut emotions);

        let mut potential_triggers: Vec<String> = Vec::new();
        for evidence in detection.evidence.iter().filter(|e| e.emotion.is_negative()) {
            let surface = evidence.surface_text();
            if !potential_triggers.iter().any(|t| t == surface) {
                potential_triggers.push(surface.to_string());
            }
        }

        Ok(Self {
            source: AnalysisSource::Offline,
            sentiment,
            confidence: reading.confidence,
            primary_emotion: reading.primary_emotion.as_str().to_string(),
            emotions,
            tone: describe_tone(&intensity, sentiment),
            potential_triggers,
            advice: Some(advise(&detection.result, Some(context))),
            raw_response: None,
        })
    }

    /// Read a model's reply, falling back to keyword inference when it is
    /// not a JSON object.
    pub fn from_model_response(response: &str) -> Self {
        match Self::parse_model_json(response) {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::debug!(error = %err, "model reply is not JSON, inferring from keywords");
                Self::from_keywords(response)
            }
        }
    }

    /// Parse a model's JSON reply. Code fences around the object are allowed.
    pub fn parse_model_json(response: &str) -> CoachResult<Self> {
        let value: Value = serde_json::from_str(strip_code_fence(response))
            .map_err(|e| CoachError::InvalidModelResponse(e.to_string()))?;
        let object = value.as_object().ok_or_else(|| {
            CoachError::InvalidModelResponse("expected a JSON object".to_string())
        })?;

        let sentiment = string_field(object, "sentiment")
            .and_then(Sentiment::from_label)
            .unwrap_or(Sentiment::Neutral);
        let confidence = object
            .get("confidence")
            .and_then(Value::as_f64)
            .map(|c| c.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_MODEL_CONFIDENCE);
        let primary_emotion = string_field(object, "primary_emotion")
            .map(|label| label.trim().to_lowercase())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| UNSPECIFIED_EMOTION.to_string());

        let mut emotions = object.get("emotions").map(parse_emotions).unwrap_or_default();
        sort_by_score(&mut emotions);

        let potential_triggers = object
            .get("potential_triggers")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            source: AnalysisSource::Model,
            sentiment,
            confidence,
            primary_emotion,
            emotions,
            tone: string_field(object, "tone").unwrap_or_default().to_string(),
            potential_triggers,
            advice: None,
            raw_response: None,
        })
    }

    /// Infer sentiment from keywords in a free-text reply.
    pub fn from_keywords(response: &str) -> Self {
        let lower = response.to_lowercase();
        let sentiment = if contains_any(&lower, &["negative", "angry", "frustrated"]) {
            Sentiment::Negative
        } else if contains_any(&lower, &["positive", "happy", "joy"]) {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        };

        Self {
            source: AnalysisSource::ModelText,
            sentiment,
            confidence: KEYWORD_CONFIDENCE,
            primary_emotion: UNSPECIFIED_EMOTION.to_string(),
            emotions: Vec::new(),
            tone: "unstructured".to_string(),
            potential_triggers: Vec::new(),
            advice: None,
            raw_response: Some(response.to_string()),
        }
    }
}

/// Short tone description from intensity cues and sentiment.
pub fn describe_tone(intensity: &IntensityProfile, sentiment: Sentiment) -> String {
    let mut parts = vec![match sentiment {
        Sentiment::Positive => "warm",
        Sentiment::Negative => "tense",
        Sentiment::Neutral => "even",
    }];
    if intensity.caps == CapsIntensity::High || intensity.exclamations >= 3 {
        parts.push("heated");
    } else if intensity.caps == CapsIntensity::Medium || intensity.exclamations > 0 {
        parts.push("emphatic");
    }
    if intensity.questions >= 2 {
        parts.push("questioning");
    }
    parts.join(", ")
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let rest = match trimmed.strip_prefix("```") {
        Some(rest) => rest,
        None => return trimmed,
    };
    // drop the language tag line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Accepts `[{"emotion": .., "score": ..}]`, `["anger", ..]` or
/// `{"anger": 0.7, ..}`.
fn parse_emotions(value: &Value) -> Vec<EmotionScore> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(EmotionScore {
                    emotion: name.to_lowercase(),
                    score: 0.0,
                }),
                Value::Object(fields) => {
                    let name = ["emotion", "name", "label"]
                        .iter()
                        .find_map(|key| string_field(fields, key))?;
                    let score = ["score", "intensity", "confidence"]
                        .iter()
                        .find_map(|key| fields.get(*key).and_then(Value::as_f64))
                        .unwrap_or(0.0);
                    Some(EmotionScore {
                        emotion: name.to_lowercase(),
                        score,
                    })
                }
                _ => None,
            })
            .collect(),
        Value::Object(fields) => fields
            .iter()
            .filter_map(|(name, score)| {
                Some(EmotionScore {
                    emotion: name.to_lowercase(),
                    score: score.as_f64()?,
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn sort_by_score(emotions: &mut [EmotionScore]) {
    emotions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
