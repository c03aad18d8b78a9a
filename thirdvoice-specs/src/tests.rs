use crate::{
    format_failure, format_summary, load_all_fixtures, load_fixture, run_fixture,
    ExpectedFailures, HarnessResult,
};
use std::path::{Path, PathBuf};

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn fixture_path(name: &str) -> PathBuf {
    manifest_dir().join("fixtures").join(name)
}

#[test]
fn test_all_fixtures_against_expected_failures() {
    let fixtures = load_all_fixtures(&manifest_dir().join("fixtures")).unwrap();
    let expected = ExpectedFailures::load(&manifest_dir().join("expected_failures.toml")).unwrap();

    let mut result = HarnessResult::new();
    let mut report = String::new();
    for (name, fixture) in &fixtures {
        let fixture_report = run_fixture(fixture);
        for (case, state) in result.record_fixture(name, &fixture_report, &expected) {
            let entry = expected.get_entry(name, &case.name);
            report.push_str(&format_failure(name, case, state, entry));
        }
    }
    report.push_str(&format_summary(
        "all fixtures",
        result.passed,
        result.total - result.passed,
        result.expected_failures,
        result.regressions,
    ));

    assert!(result.success(), "{}", report);
    assert!(
        result.fixed.is_empty(),
        "expected failures now pass, remove them: {:?}",
        result.fixed
    );
    assert_eq!(result.expected_failures, expected.count());
}

#[test]
fn test_every_listed_failure_exists() {
    let expected = ExpectedFailures::load(&manifest_dir().join("expected_failures.toml")).unwrap();
    for entry in expected.known.iter().chain(expected.pending.iter()) {
        let fixture = load_fixture(&fixture_path(&entry.fixture)).unwrap();
        assert!(
            fixture.case(&entry.case).is_some(),
            "{} has no case {}",
            entry.fixture,
            entry.case
        );
    }
}

#[test]
fn test_contexts_fixture() {
    let fixture = load_fixture(&fixture_path("contexts.toml")).unwrap();

    assert_eq!(fixture.title.as_deref(), Some("Relationship contexts"));
    assert_eq!(fixture.context.as_deref(), Some("coparenting"));

    let pickup = fixture.case("pickup-frustration").unwrap();
    assert_eq!(fixture.context_for(pickup), Some("coparenting"));
    let worry = fixture.case("workplace-worry").unwrap();
    assert_eq!(fixture.context_for(worry), Some("workplace"));
}

#[test]
fn test_sarcasm_is_the_known_miss() {
    let fixture = load_fixture(&fixture_path("positive.toml")).unwrap();
    let report = run_fixture(&fixture);
    let failed: Vec<&str> = report.failures().map(|c| c.name.as_str()).collect();
    assert_eq!(failed, vec!["sarcasm"]);

    let sarcasm = report.failures().next().unwrap();
    assert_eq!(sarcasm.mismatches[0].actual, "joy");

    let expected = ExpectedFailures::load(&manifest_dir().join("expected_failures.toml")).unwrap();
    let state = expected.is_expected("positive.toml", &sarcasm.name);
    let entry = expected.get_entry("positive.toml", &sarcasm.name);
    let formatted = format_failure("positive.toml", sarcasm, state, entry);
    assert!(formatted.contains("KNOWN: positive.toml#sarcasm"));
    assert!(formatted.contains("reason: Sarcastic praise scores as joy"));
}

#[test]
fn test_edge_cases_cover_rejection() {
    let fixture = load_fixture(&fixture_path("edge-cases.toml")).unwrap();
    let rejected: Vec<&str> = fixture
        .cases
        .iter()
        .filter(|c| c.success == Some(false))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(rejected, vec!["empty", "single-char"]);
    assert!(run_fixture(&fixture).failures().next().is_none());
}
