//! Window configuration.
//!
//! Read from an optional `settings.json` in the working directory. A missing
//! file is normal and silently uses the defaults; a file that exists but does
//! not parse is reported and also falls back to the defaults.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

impl Settings {
    /// Parses a JSON document. Absent fields keep their default value.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Loads `path`, falling back to defaults when the file is missing or
    /// malformed.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("ignoring malformed {path}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_parses() {
        let settings = Settings::from_json(
            r#"{ "width": 1280, "height": 720, "fullscreen": true, "vsync": false }"#,
        )
        .unwrap();
        assert_eq!(settings.width, 1280);
        assert_eq!(settings.height, 720);
        assert!(settings.fullscreen);
        assert!(!settings.vsync);
    }

    #[test]
    fn absent_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1024 }"#).unwrap();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, 600);
        assert!(!settings.fullscreen);
        assert!(settings.vsync);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Settings::from_json(r#"{ "widht": 1024 }"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::from_json("{ width: ").is_err());
    }
}
