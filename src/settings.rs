use crate::error::{BlockmailError, BlockmailResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MIN_MAX_WIDTH: u32 = 320;
const MAX_MAX_WIDTH: u32 = 800;

/// Email-wide presentation settings supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalEmailSettings {
    /// Font family spliced into every quoted `font-family: '...'` occurrence
    pub font_family: String,
    /// Brand accent color, swapped in for whitelisted template accents
    pub primary_color: String,
    /// Outer canvas color behind the content column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Content column width in pixels
    pub max_width: u32,
}

impl Default for GlobalEmailSettings {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            primary_color: "#4f46e5".to_string(),
            background_color: None,
            max_width: 600,
        }
    }
}

impl GlobalEmailSettings {
    /// Boundary validation for caller-supplied settings.
    ///
    /// The engine assumes settings are valid; callers that accept untrusted
    /// documents (the CLI) run this first.
    pub fn validate(&self) -> BlockmailResult<()> {
        if self.font_family.trim().is_empty() {
            return Err(BlockmailError::InvalidFontFamily {
                family: self.font_family.clone(),
            });
        }
        validate_hex_color("primaryColor", &self.primary_color)?;
        if let Some(ref bg) = self.background_color {
            validate_hex_color("backgroundColor", bg)?;
        }
        if self.max_width < MIN_MAX_WIDTH || self.max_width > MAX_MAX_WIDTH {
            return Err(BlockmailError::InvalidMaxWidth {
                value: self.max_width,
                min: MIN_MAX_WIDTH,
                max: MAX_MAX_WIDTH,
            });
        }
        Ok(())
    }
}

pub(crate) fn is_hex_color(value: &str) -> bool {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());
    hex_regex.is_match(value)
}

fn validate_hex_color(field: &str, value: &str) -> BlockmailResult<()> {
    if !is_hex_color(value) {
        return Err(BlockmailError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GlobalEmailSettings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_primary_color() {
        let settings = GlobalEmailSettings {
            primary_color: "blue".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(BlockmailError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_short_hex_rejected() {
        let settings = GlobalEmailSettings {
            primary_color: "#fff".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_max_width_bounds() {
        let settings = GlobalEmailSettings {
            max_width: 200,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(BlockmailError::InvalidMaxWidth { .. })
        ));
    }
}
