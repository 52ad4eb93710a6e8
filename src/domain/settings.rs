// src/domain/settings.rs
use crate::constants::{FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(DomainError::InvalidSetting(format!(
                "unknown theme '{other}' (expected light, dark or auto)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "SF Pro Display")]
    SfProDisplay,
    #[serde(rename = "Helvetica Neue")]
    HelveticaNeue,
    #[serde(rename = "Arial")]
    Arial,
    #[serde(rename = "Georgia")]
    Georgia,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Monaco")]
    Monaco,
}

impl FontFamily {
    pub const ALL: [FontFamily; 7] = [
        FontFamily::SfProDisplay,
        FontFamily::HelveticaNeue,
        FontFamily::Arial,
        FontFamily::Georgia,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Monaco,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::SfProDisplay => "SF Pro Display",
            FontFamily::HelveticaNeue => "Helvetica Neue",
            FontFamily::Arial => "Arial",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Monaco => "Monaco",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = DomainError;

    /// Accepts the display name ("Times New Roman") or a dashed form ("times-new-roman").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        FontFamily::ALL
            .into_iter()
            .find(|family| family.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DomainError::InvalidSetting(format!("unknown font family '{s}'")))
    }
}

/// Display and editing preferences. Every field always has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub font_size: u8,
    pub font_family: FontFamily,
    pub theme: Theme,
    pub background_color: String,
    pub distraction_free: bool,
    pub auto_save: bool,
    pub show_word_count: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_family: FontFamily::SfProDisplay,
            theme: Theme::Light,
            background_color: "#ffffff".to_string(),
            distraction_free: false,
            auto_save: true,
            show_word_count: true,
        }
    }
}

/// Partial settings; also the shape a persisted blob is read as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distraction_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_word_count: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject values outside the allowed domain.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(size) = self.font_size {
            if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&size) {
                return Err(DomainError::InvalidSetting(format!(
                    "font size {size} outside {FONT_SIZE_MIN}..={FONT_SIZE_MAX}"
                )));
            }
        }
        if let Some(color) = &self.background_color {
            if !is_hex_color(color) {
                return Err(DomainError::InvalidSetting(format!(
                    "background color '{color}' is not a #rrggbb hex value"
                )));
            }
        }
        Ok(())
    }
}

impl Settings {
    /// Shallow merge: fields present in the patch win.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(family) = patch.font_family {
            self.font_family = family;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(color) = patch.background_color {
            self.background_color = color;
        }
        if let Some(flag) = patch.distraction_free {
            self.distraction_free = flag;
        }
        if let Some(flag) = patch.auto_save {
            self.auto_save = flag;
        }
        if let Some(flag) = patch.show_word_count {
            self.show_word_count = flag;
        }
    }

    /// Pull stored values that drifted out of range back to something usable.
    pub fn sanitized(mut self) -> Self {
        self.font_size = self.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        if !is_hex_color(&self.background_color) {
            self.background_color = Settings::default().background_color;
        }
        self
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_defaults_when_creating_then_matches_documented_values() {
        let settings = Settings::default();

        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.font_family, FontFamily::SfProDisplay);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.background_color, "#ffffff");
        assert!(!settings.distraction_free);
        assert!(settings.auto_save);
        assert!(settings.show_word_count);
    }

    #[test]
    fn given_patch_when_merging_then_only_present_fields_change() {
        let mut settings = Settings::default();

        settings.merge(SettingsPatch {
            font_size: Some(20),
            theme: Some(Theme::Dark),
            ..Default::default()
        });

        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_family, FontFamily::SfProDisplay);
    }

    #[rstest]
    #[case(Some(11), None, false)]
    #[case(Some(12), None, true)]
    #[case(Some(24), None, true)]
    #[case(Some(99), None, false)]
    #[case(None, Some("#F5F5F7"), true)]
    #[case(None, Some("ffffff"), false)]
    #[case(None, Some("#fff"), false)]
    fn test_patch_validation(
        #[case] font_size: Option<u8>,
        #[case] color: Option<&str>,
        #[case] valid: bool,
    ) {
        let patch = SettingsPatch {
            font_size,
            background_color: color.map(str::to_string),
            ..Default::default()
        };

        assert_eq!(patch.validate().is_ok(), valid);
    }

    #[rstest]
    #[case("Times New Roman", FontFamily::TimesNewRoman)]
    #[case("times-new-roman", FontFamily::TimesNewRoman)]
    #[case("monaco", FontFamily::Monaco)]
    #[case("sf_pro_display", FontFamily::SfProDisplay)]
    fn test_font_family_parsing(#[case] input: &str, #[case] expected: FontFamily) {
        assert_eq!(input.parse::<FontFamily>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_font_when_parsing_then_returns_invalid_setting() {
        let result = "Comic Sans".parse::<FontFamily>();

        assert!(matches!(result, Err(DomainError::InvalidSetting(_))));
    }

    #[test]
    fn given_settings_when_serializing_then_uses_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();

        assert!(json.contains(r#""fontSize":16"#));
        assert!(json.contains(r#""fontFamily":"SF Pro Display""#));
        assert!(json.contains(r#""theme":"light""#));
        assert!(json.contains(r#""showWordCount":true"#));
    }

    #[test]
    fn given_out_of_range_values_when_sanitizing_then_clamps_and_resets() {
        let settings = Settings {
            font_size: 40,
            background_color: "blue".to_string(),
            ..Default::default()
        }
        .sanitized();

        assert_eq!(settings.font_size, FONT_SIZE_MAX);
        assert_eq!(settings.background_color, "#ffffff");
    }
}
