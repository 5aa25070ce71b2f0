//! Scanner option validation.

use crate::schema::SwatchConfig;

use super::helpers::{validate_one_of, validate_range, Issue};

pub(crate) const HASH_ALPHA_ORDER: &str = "scan.hash_alpha_order";
pub(crate) const CONTEXT_LINES: &str = "scan.context_lines";

pub(crate) fn validate_scan(issues: &mut Vec<Issue>, config: &SwatchConfig) {
    validate_one_of(
        issues,
        HASH_ALPHA_ORDER,
        &config.scan.hash_alpha_order,
        &["rgba", "argb"],
    );
    validate_range(
        issues,
        CONTEXT_LINES,
        i64::from(config.scan.context_lines),
        0,
        5,
    );
}
