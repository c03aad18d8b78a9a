//! Plain-text reports for failed cases.

use crate::failures::{FailureEntry, FailureState};
use crate::runner::CaseReport;
use std::fmt::Write;
use thirdvoice::EmotionResult;

/// Format a failed case with what the engine actually saw.
///
/// `entry` is the expected-failure record for the case, if it has one.
pub fn format_failure(
    fixture_name: &str,
    case: &CaseReport,
    state: FailureState,
    entry: Option<&FailureEntry>,
) -> String {
    let mut output = String::new();

    let label = match state {
        FailureState::Known => "KNOWN",
        FailureState::Pending => "PENDING",
        FailureState::Regression => "FAIL",
    };
    writeln!(output, "\n{}: {}#{}", label, fixture_name, case.name).unwrap();
    if let Some(entry) = entry {
        if let Some(reason) = &entry.reason {
            writeln!(output, "  reason: {}", reason).unwrap();
        }
        if let Some(issue) = &entry.issue {
            writeln!(output, "  issue: {}", issue).unwrap();
        }
    }
    writeln!(output).unwrap();
    writeln!(output, "  text: {:?}", case.text).unwrap();
    if let Some(context) = &case.context {
        writeln!(output, "  context: {}", context).unwrap();
    }

    match &case.result {
        EmotionResult::Analyzed(reading) => {
            writeln!(
                output,
                "  detected: {} ({:.2})",
                reading.primary_emotion, reading.confidence
            )
            .unwrap();
            let scored: Vec<String> = reading
                .raw_scores
                .iter()
                .filter(|(_, score)| *score > 0.0)
                .map(|(emotion, score)| format!("{}={:.2}", emotion, score))
                .collect();
            if !scored.is_empty() {
                writeln!(output, "  scores: {}", scored.join(", ")).unwrap();
            }
        }
        EmotionResult::TooShort => {
            writeln!(output, "  detected: too short to analyze").unwrap();
        }
    }

    writeln!(output).unwrap();
    for mismatch in &case.mismatches {
        writeln!(
            output,
            "    \u{2717} {}: expected `{}`, found `{}`",
            mismatch.field, mismatch.expected, mismatch.actual
        )
        .unwrap();
    }

    if let Some(hint) = generate_hint(case) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of all results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(case: &CaseReport) -> Option<String> {
    let reading = case.result.reading()?;
    for mismatch in &case.mismatches {
        if mismatch.field == "primary" && reading.raw_scores.is_zero() {
            return Some(
                "no lexicon word or pattern fired - consider adding a trigger word".to_string(),
            );
        }
        if mismatch.field == "advice_contains" && case.context.is_none() {
            return Some("context sentences are only added when a context is set".to_string());
        }
    }
    None
}
