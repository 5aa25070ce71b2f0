//! Serializer default validation.

use crate::schema::{FormatConfig, SwatchConfig};

use super::helpers::{validate_range, Issue};

pub(crate) const FLOAT_PRECISION: &str = "format.default_float_precision";

pub(crate) fn validate_format(issues: &mut Vec<Issue>, config: &SwatchConfig) {
    validate_range(
        issues,
        FLOAT_PRECISION,
        config.format.default_float_precision,
        0,
        FormatConfig::MAX_FLOAT_PRECISION,
    );
}
