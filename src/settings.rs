// Copyright (c) 2019-present Dmitry Stepanov and Fyrox Engine contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Persistent options of the property grid.

use crate::core::log::Log;
use ron::{error::SpannedError, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    fs::File,
    path::Path,
};
use strum_macros::{AsRefStr, EnumString, VariantNames};

/// How properties are laid out.
#[derive(
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    VariantNames,
)]
pub enum ShowStyle {
    /// Properties are grouped by category, every group has an expander.
    #[default]
    Category,
    /// A single list of properties sorted by display name.
    Alphabetic,
}

#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct PropertyGridSettings {
    pub show_style: ShowStyle,
    pub show_title: bool,
    pub allow_filter: bool,
    pub allow_quick_filter: bool,
    pub allow_toggle_view: bool,
    pub name_column_width: f32,
}

impl Default for PropertyGridSettings {
    fn default() -> Self {
        Self {
            show_style: ShowStyle::Category,
            show_title: true,
            allow_filter: true,
            allow_quick_filter: true,
            allow_toggle_view: true,
            name_column_width: 150.0,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Ron(ron::Error),
    Parse(SpannedError),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        Self::Ron(e)
    }
}

impl From<SpannedError> for SettingsError {
    fn from(e: SpannedError) -> Self {
        Self::Parse(e)
    }
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "io error: {e}"),
            SettingsError::Ron(e) => write!(f, "serialization error: {e}"),
            SettingsError::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl PropertyGridSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let file = File::open(path)?;
        Ok(ron::de::from_reader(file)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let file = File::create(path)?;
        ron::ser::to_writer_pretty(file, self, PrettyConfig::default())?;
        Ok(())
    }

    pub fn from_ron_str(source: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(source)?)
    }

    pub fn to_ron_string(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Loads the settings or falls back to defaults if there is no valid file at `path`.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                Log::warn(format!(
                    "Unable to load property grid settings from {}. Reason: {e}. Defaults are used.",
                    path.display()
                ));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::settings::{PropertyGridSettings, SettingsError, ShowStyle};
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let settings = PropertyGridSettings::default();
        assert_eq!(settings.show_style, ShowStyle::Category);
        assert!(settings.show_title);
        assert!(settings.allow_filter);
        assert!(settings.allow_quick_filter);
        assert!(settings.allow_toggle_view);
        assert_eq!(settings.name_column_width, 150.0);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings =
            PropertyGridSettings::from_ron_str("(show_style: Alphabetic, show_title: false)")
                .unwrap();
        assert_eq!(settings.show_style, ShowStyle::Alphabetic);
        assert!(!settings.show_title);
        assert!(settings.allow_toggle_view);
        assert_eq!(settings.name_column_width, 150.0);
    }

    #[test]
    fn test_text_round_trip() {
        let settings = PropertyGridSettings {
            show_style: ShowStyle::Alphabetic,
            name_column_width: 200.0,
            ..Default::default()
        };
        let text = settings.to_ron_string().unwrap();
        assert_eq!(PropertyGridSettings::from_ron_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_malformed_text() {
        assert!(matches!(
            PropertyGridSettings::from_ron_str("(show_style: Sideways)"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_file_round_trip_and_fallback() {
        let dir = std::env::temp_dir().join(format!(
            "property_grid_settings_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.ron");

        let settings = PropertyGridSettings {
            allow_filter: false,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(PropertyGridSettings::load(&path).unwrap(), settings);

        let missing = dir.join("missing.ron");
        assert!(matches!(
            PropertyGridSettings::load(&missing),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(
            PropertyGridSettings::load_or_default(&missing),
            PropertyGridSettings::default()
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_show_style_names() {
        assert_eq!(ShowStyle::Alphabetic.as_ref(), "Alphabetic");
        assert_eq!(ShowStyle::from_str("Category").unwrap(), ShowStyle::Category);
    }
}
