//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all.
//! [`validate`] collects every violation into a single `ConfigError`, while
//! [`sanitize`] replaces each violating value with its documented default.

mod format;
mod helpers;
mod scan;


use crate::schema::SwatchConfig;
use swatch_common::ConfigError;

use helpers::Issue;

fn collect(config: &SwatchConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    format::validate_format(&mut issues, config);
    scan::validate_scan(&mut issues, config);
    issues
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SwatchConfig) -> Result<(), ConfigError> {
    let issues = collect(config);
    if issues.is_empty() {
        Ok(())
    } else {
        let messages: Vec<String> = issues.iter().map(Issue::message).collect();
        Err(ConfigError::ValidationError(messages.join("; ")))
    }
}

/// Replace every out-of-domain value with its default.
///
/// Returns the repaired config and one [`ConfigError::Ambiguous`] per
/// replaced key, in validation order.
pub fn sanitize(mut config: SwatchConfig) -> (SwatchConfig, Vec<ConfigError>) {
    let defaults = SwatchConfig::default();
    let issues = collect(&config);
    let mut rejected = Vec::with_capacity(issues.len());

    for issue in issues {
        match issue.key {
            format::FLOAT_PRECISION => {
                config.format.default_float_precision = defaults.format.default_float_precision;
            }
            scan::HASH_ALPHA_ORDER => {
                config.scan.hash_alpha_order = defaults.scan.hash_alpha_order.clone();
            }
            scan::CONTEXT_LINES => {
                config.scan.context_lines = defaults.scan.context_lines;
            }
            _ => {}
        }
        rejected.push(issue.into());
    }

    (config, rejected)
}
