//! Shared range-validation helpers used by all domain validators.

use swatch_common::ConfigError;

/// One out-of-domain configuration value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Issue {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl Issue {
    pub(crate) fn message(&self) -> String {
        format!("{} = {} {}", self.key, self.value, self.reason)
    }
}

impl From<Issue> for ConfigError {
    fn from(issue: Issue) -> Self {
        ConfigError::Ambiguous {
            key: issue.key.to_string(),
            value: issue.value,
            reason: issue.reason,
        }
    }
}

/// Push an issue if `value` is outside `[min, max]`.
pub(crate) fn validate_range(
    issues: &mut Vec<Issue>,
    key: &'static str,
    value: i64,
    min: i64,
    max: i64,
) {
    if value < min || value > max {
        issues.push(Issue {
            key,
            value: value.to_string(),
            reason: format!("is out of range [{min}, {max}]"),
        });
    }
}

/// Push an issue if `value` is not one of `allowed` (case-insensitive).
pub(crate) fn validate_one_of(
    issues: &mut Vec<Issue>,
    key: &'static str,
    value: &str,
    allowed: &[&str],
) {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        issues.push(Issue {
            key,
            value: format!("{value:?}"),
            reason: format!("is not one of {}", allowed.join(", ")),
        });
    }
}
