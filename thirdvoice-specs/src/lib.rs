#![doc(
    html_logo_url = "https://thethirdvoice.ai/assets/thirdvoice.svg",
    issue_tracker_base_url = "https://github.com/thethirdvoice/thirdvoice/issues/"
)]

//! Fixture-driven testing infrastructure for thirdvoice.
//!
//! Test cases are declared in TOML fixture files under `fixtures/`. Each
//! `[[case]]` names a message, an optional relationship context, and the
//! expectations to check against the engine.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture and case types, parsing and validation
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Runs cases through the engine and collects mismatches
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure and summary reports
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, Case, Fixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{check_case, run_fixture, CaseReport, FieldMismatch, FixtureReport};

#[cfg(test)]
mod tests;
