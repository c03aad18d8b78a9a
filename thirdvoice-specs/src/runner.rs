//! Runs fixture cases through the engine and compares expectations.

use thirdvoice::{classify_sentiment, detect_emotion, generate_advice, Emotion, EmotionResult};

use crate::fixture::{Case, Fixture};

/// One expectation that did not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// What the engine produced for a case, and how it compared.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub text: String,
    pub context: Option<String>,
    pub result: EmotionResult,
    pub mismatches: Vec<FieldMismatch>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub cases: Vec<CaseReport>,
}

impl FixtureReport {
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.passed())
    }

    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }
}

/// Run every case of a fixture.
pub fn run_fixture(fixture: &Fixture) -> FixtureReport {
    FixtureReport {
        cases: fixture
            .cases
            .iter()
            .map(|case| check_case(case, fixture.context_for(case)))
            .collect(),
    }
}

/// Run one case with the given context label.
pub fn check_case(case: &Case, context: Option<&str>) -> CaseReport {
    let result = detect_emotion(&case.text, context);
    let mut mismatches = Vec::new();
    let mut mismatch = |field: &'static str, expected: String, actual: String| {
        mismatches.push(FieldMismatch {
            field,
            expected,
            actual,
        });
    };

    if let Some(expected) = case.success {
        if result.success() != expected {
            mismatch("success", expected.to_string(), result.success().to_string());
        }
    }

    if let Some(expected) = case.primary {
        match result.primary_emotion() {
            Some(actual) if actual == expected => {}
            actual => mismatch("primary", expected.to_string(), describe_emotion(actual)),
        }
    }

    let confidence = result.confidence();
    if let Some(min) = case.min_confidence {
        if !confidence.map_or(false, |c| c >= min) {
            mismatch("min_confidence", format!(">= {:.2}", min), describe_confidence(confidence));
        }
    }
    if let Some(max) = case.max_confidence {
        if !confidence.map_or(false, |c| c <= max) {
            mismatch("max_confidence", format!("<= {:.2}", max), describe_confidence(confidence));
        }
    }

    if let Some(expected) = case.sentiment {
        let actual = classify_sentiment(&case.text).sentiment;
        if actual != expected {
            mismatch(
                "sentiment",
                expected.as_str().to_string(),
                actual.as_str().to_string(),
            );
        }
    }

    if let Some(needle) = &case.advice_contains {
        let advice = generate_advice(&result, context);
        if !advice.contains(needle.as_str()) {
            mismatch("advice_contains", needle.clone(), advice);
        }
    }

    CaseReport {
        name: case.name.clone(),
        text: case.text.clone(),
        context: context.map(str::to_string),
        result,
        mismatches,
    }
}

const TOO_SHORT: &str = "none (too short)";

fn describe_emotion(emotion: Option<Emotion>) -> String {
    emotion.map_or_else(|| TOO_SHORT.to_string(), |e| e.to_string())
}

fn describe_confidence(confidence: Option<f64>) -> String {
    confidence.map_or_else(|| TOO_SHORT.to_string(), |c| format!("{:.2}", c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    fn report(toml: &str) -> FixtureReport {
        run_fixture(&parse_fixture(toml).unwrap())
    }

    #[test]
    fn passing_case() {
        let report = report(
            r#"
[[case]]
name = "pattern-anger"
text = "You always do this"
primary = "anger"
min_confidence = 1.0
success = true
"#,
        );
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn mismatches_are_collected_per_field() {
        let report = report(
            r#"
[[case]]
name = "wrong"
text = "You always do this"
primary = "joy"
max_confidence = 0.5
sentiment = "positive"
"#,
        );
        let case = &report.cases[0];
        assert!(!case.passed());
        assert_eq!(
            case.mismatches,
            vec![
                FieldMismatch {
                    field: "primary",
                    expected: "joy".to_string(),
                    actual: "anger".to_string(),
                },
                FieldMismatch {
                    field: "max_confidence",
                    expected: "<= 0.50".to_string(),
                    actual: "1.00".to_string(),
                },
                FieldMismatch {
                    field: "sentiment",
                    expected: "positive".to_string(),
                    actual: "neutral".to_string(),
                },
            ]
        );
    }

    #[test]
    fn too_short_reports_none() {
        let report = report(
            r#"
[[case]]
name = "short"
text = "k"
min_confidence = 0.1
"#,
        );
        let mismatch = &report.cases[0].mismatches[0];
        assert_eq!(mismatch.field, "min_confidence");
        assert_eq!(mismatch.actual, "none (too short)");
    }

    #[test]
    fn fixture_context_reaches_advice() {
        let report = report(
            r#"
context = "coparenting"

[[case]]
name = "child"
text = "I'm so frustrated about our child"
advice_contains = "child's wellbeing"
"#,
        );
        assert!(report.cases[0].passed());
        assert_eq!(report.cases[0].context.as_deref(), Some("coparenting"));
    }
}
