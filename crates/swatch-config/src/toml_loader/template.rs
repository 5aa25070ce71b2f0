//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Swatch Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[format]
# prefer_uppercase_hex = true     # case for hex literals captured without letters
# default_float_precision = 3     # 0-10 decimal places for new float channels
# normalize_on_replace = false    # widen float precision when an edit needs it

[scan]
# bare_tuples = true              # recognize (r, g, b) tuples without a constructor
# hash_alpha_order = "rgba"       # rgba (#RRGGBBAA) or argb (#AARRGGBB)
# context_lines = 1               # 0-5 lines rescanned around each edit

[logging]
# level = "INFO"                  # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
