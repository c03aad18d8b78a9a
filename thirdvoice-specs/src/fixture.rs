//! Fixture files: TOML documents holding `[[case]]` entries.
//!
//! ```toml
//! title = "Coparenting messages"
//! context = "coparenting"
//!
//! [[case]]
//! name = "pickup-anger"
//! text = "I'm so frustrated about our child's pickup"
//! primary = "anger"
//! min_confidence = 0.9
//! advice_contains = "child"
//! ```
//!
//! Every expectation is optional; a case checks only what it names.

use std::collections::HashSet;

use serde::Deserialize;
use thirdvoice::{Emotion, Sentiment};

use crate::{SpecError, SpecResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default)]
    pub title: Option<String>,
    /// Context label applied to cases that do not set their own.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    /// Stable identifier, used to reference the case in expected failures.
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub context: Option<String>,
    /// `false` expects the message to be rejected as too short.
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub primary: Option<Emotion>,
    #[serde(default)]
    pub min_confidence: Option<f64>,
    #[serde(default)]
    pub max_confidence: Option<f64>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub advice_contains: Option<String>,
}

impl Fixture {
    /// Context label for a case, falling back to the fixture's.
    pub fn context_for<'a>(&'a self, case: &'a Case) -> Option<&'a str> {
        case.context.as_deref().or(self.context.as_deref())
    }

    pub fn case(&self, name: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.name == name)
    }
}

impl Case {
    /// Number of expectations this case checks.
    pub fn expectation_count(&self) -> usize {
        [
            self.success.is_some(),
            self.primary.is_some(),
            self.min_confidence.is_some(),
            self.max_confidence.is_some(),
            self.sentiment.is_some(),
            self.advice_contains.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    fn validate(&self) -> SpecResult<()> {
        let invalid = |message: &str| SpecError::Invalid {
            case: self.name.clone(),
            message: message.to_string(),
        };

        if self.expectation_count() == 0 {
            return Err(invalid("case has no expectations"));
        }
        for bound in [self.min_confidence, self.max_confidence].into_iter().flatten() {
            if !(0.0..=1.0).contains(&bound) {
                return Err(invalid("confidence bounds must be within [0, 1]"));
            }
        }
        if let (Some(min), Some(max)) = (self.min_confidence, self.max_confidence) {
            if min > max {
                return Err(invalid("min_confidence is greater than max_confidence"));
            }
        }
        if self.success == Some(false)
            && (self.primary.is_some()
                || self.min_confidence.is_some()
                || self.max_confidence.is_some())
        {
            return Err(invalid("a rejected message has no emotion or confidence"));
        }
        Ok(())
    }
}

/// Parse and validate fixture TOML.
pub fn parse_fixture(content: &str) -> SpecResult<Fixture> {
    let fixture: Fixture = toml::from_str(content).map_err(|e| SpecError::Parse {
        message: e.to_string(),
    })?;

    let mut seen = HashSet::new();
    for case in &fixture.cases {
        if !seen.insert(case.name.as_str()) {
            return Err(SpecError::Invalid {
                case: case.name.clone(),
                message: "duplicate case name".to_string(),
            });
        }
        case.validate()?;
    }

    Ok(fixture)
}
