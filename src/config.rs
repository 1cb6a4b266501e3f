//! Tool configuration module.
//!
//! Handles loading, validating, and merging `letterbox.toml`. Stock defaults
//! are overridden by the user's file, and command-line flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! ratio = "1:1"           # Target ratio ("16:9", "4:5 (Portrait)", "1.5")
//! background = "#FFFFFF"  # Padding color, #RRGGBB or #RRGGBBAA
//! anchor = "center"       # Where the photo sits on the canvas
//! tolerance = 0.000001    # Ratios closer than this are left unpadded
//!
//! [output]
//! naming = "prefix"       # "prefix" → edited_<name>.png, "suffix" → <name>_edited.png
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Black bars for video thumbnails
//! ratio = "16:9"
//! background = "#000000"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Ratio text is never
//! rejected: unreadable ratios fall back to 1:1 like the interactive field.

use crate::imaging::{Anchor, LetterboxRequest, Tolerance, parse_color, parse_ratio};
use crate::naming::NamingStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "letterbox.toml";

/// Tool configuration loaded from `letterbox.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LetterboxConfig {
    /// Target ratio text, parsed leniently.
    pub ratio: String,
    /// Background color as hex text.
    pub background: String,
    /// Anchor name.
    pub anchor: String,
    /// Ratio-equality epsilon.
    pub tolerance: f64,
    /// Output file settings.
    pub output: OutputConfig,
}

impl Default for LetterboxConfig {
    fn default() -> Self {
        Self {
            ratio: "1:1".to_string(),
            background: "#FFFFFF".to_string(),
            anchor: "center".to_string(),
            tolerance: Tolerance::default().value(),
            output: OutputConfig::default(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Where `edited` goes in the suggested output name.
    pub naming: NamingStyle,
}

impl LetterboxConfig {
    /// Validate that every value parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_request().map(|_| ())
    }

    /// Build the request described by this config.
    pub fn to_request(&self) -> Result<LetterboxRequest, ConfigError> {
        let invalid = |field: &str, e: crate::imaging::ValidationError| {
            ConfigError::Validation(format!("{field}: {e}"))
        };
        Ok(LetterboxRequest {
            ratio: parse_ratio(&self.ratio),
            background: parse_color(&self.background).map_err(|e| invalid("background", e))?,
            anchor: self
                .anchor
                .parse::<Anchor>()
                .map_err(|e| invalid("anchor", e))?,
            tolerance: Tolerance::new(self.tolerance).map_err(|e| invalid("tolerance", e))?,
        })
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(LetterboxConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<LetterboxConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: LetterboxConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path`.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<LetterboxConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    let config = resolve_config(base, overlay)?;
    log::debug!("config from {}: {config:?}", path.display());
    Ok(config)
}

/// Returns a fully-commented stock `letterbox.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Letterbox Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them.
# Unknown keys will cause an error.

# Target aspect ratio. Accepts "W:H", a single number, or a preset label
# such as "4:5 (Portrait)". Text after the first space is ignored.
# Anything unreadable falls back to 1:1.
ratio = "1:1"

# Padding color as #RRGGBB, or #RRGGBBAA for translucent padding.
# A translucent background produces a PNG with an alpha channel.
background = "#FFFFFF"

# Where the photo sits on the padded canvas:
# center, top, bottom, left, right,
# top-left, top-right, bottom-left, bottom-right
anchor = "center"

# Source and target ratios closer than this are left unpadded.
# Must be greater than 0 and at most 0.01.
tolerance = 0.000001

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# "prefix" -> edited_<name>.png
# "suffix" -> <name>_edited.png
naming = "prefix"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{Color, Ratio};
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = LetterboxConfig::default();
        assert_eq!(config.ratio, "1:1");
        assert_eq!(config.background, "#FFFFFF");
        assert_eq!(config.anchor, "center");
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.output.naming, NamingStyle::Prefix);
    }

    #[test]
    fn default_config_builds_default_request() {
        let req = LetterboxConfig::default().to_request().unwrap();
        assert_eq!(req, LetterboxRequest::default());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
ratio = "16:9"
background = "#000000"
"##;
        let config: LetterboxConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.ratio, "16:9");
        assert_eq!(config.background, "#000000");
        // Defaults preserved
        assert_eq!(config.anchor, "center");
        assert_eq!(config.output.naming, NamingStyle::Prefix);
    }

    #[test]
    fn parse_output_section() {
        let config: LetterboxConfig = toml::from_str("[output]\nnaming = \"suffix\"").unwrap();
        assert_eq!(config.output.naming, NamingStyle::Suffix);
    }

    #[test]
    fn to_request_reads_every_field() {
        let config = LetterboxConfig {
            ratio: "9:16 (Story)".into(),
            background: "#11223380".into(),
            anchor: "bottom-left".into(),
            tolerance: 1e-4,
            output: OutputConfig::default(),
        };
        let req = config.to_request().unwrap();
        assert_eq!(req.ratio, Ratio::new(9.0, 16.0).unwrap());
        assert_eq!(req.background, Color::rgba(0x11, 0x22, 0x33, 0x80));
        assert_eq!(req.anchor, Anchor::BottomLeft);
        assert_eq!(req.tolerance.value(), 1e-4);
    }

    #[test]
    fn garbage_ratio_is_not_a_validation_error() {
        let config = LetterboxConfig {
            ratio: "whatever".into(),
            ..LetterboxConfig::default()
        };
        assert_eq!(config.to_request().unwrap().ratio, Ratio::SQUARE);
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(LetterboxConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_bad_anchor() {
        let config = LetterboxConfig {
            anchor: "middle".into(),
            ..LetterboxConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(&err, ConfigError::Validation(msg) if msg.starts_with("anchor")));
    }

    #[test]
    fn validate_bad_color() {
        let config = LetterboxConfig {
            background: "#ZZZ".into(),
            ..LetterboxConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_tolerance_range() {
        for tolerance in [0.0, -1.0, 0.5] {
            let config = LetterboxConfig {
                tolerance,
                ..LetterboxConfig::default()
            };
            assert!(config.validate().is_err(), "tolerance {tolerance}");
        }
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.ratio, "1:1");
        assert_eq!(config.background, "#FFFFFF");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "anchor = \"top\"\ntolerance = 0.0001\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.anchor, "top");
        assert_eq!(config.tolerance, 0.0001);
        // Unspecified values should be defaults
        assert_eq!(config.ratio, "1:1");
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "background = \"red\"\n").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_config_reports_bad_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "ratio = ").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"ratio = "1:1""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"ratio = "4:5""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("ratio").unwrap().as_str(), Some("4:5"));
    }

    #[test]
    fn merge_toml_table_merge_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r#"
[output]
naming = "prefix"
extra = 1
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str("[output]\nnaming = \"suffix\"").unwrap();
        let merged = merge_toml(base, overlay);
        let output = merged.get("output").unwrap();
        assert_eq!(output.get("naming").unwrap().as_str(), Some("suffix"));
        assert_eq!(output.get("extra").unwrap().as_integer(), Some(1));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<LetterboxConfig, _> = toml::from_str("colour = \"#000000\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result: Result<LetterboxConfig, _> = toml::from_str("[output]\nname = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_naming_style_rejected() {
        let result: Result<LetterboxConfig, _> = toml::from_str("[output]\nnaming = \"infix\"");
        assert!(result.is_err());
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: LetterboxConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.ratio, "1:1");
        assert_eq!(config.background, "#FFFFFF");
        assert_eq!(config.anchor, "center");
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.output.naming, NamingStyle::Prefix);
    }

    #[test]
    fn stock_defaults_value_has_all_keys() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        for key in ["ratio", "background", "anchor", "tolerance", "output"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
