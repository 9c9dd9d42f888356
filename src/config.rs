//! Run configuration.
//!
//! Settings are layered: stock defaults, then an optional TOML file
//! (`--config`), then command-line flags. The result is validated once,
//! before any file is touched.
//!
//! ## Config File
//!
//! ```toml
//! # All keys are optional - defaults shown below
//! mode = "image"            # image | folder
//! dst = "small"             # destination folder name
//! width = 400               # target width
//! height = 0                # target height, 0 = unset
//! path = "./"               # source file or directory
//! scaler = "NearestNeighbor" # NearestNeighbor | ApproxBiLinear | BiLinear | CatmullRom
//! ```
//!
//! Unknown keys and unknown enum values are rejected.

use crate::imaging::{DEFAULT_WIDTH, Scaler};
use crate::naming::root_folder_name;
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

/// What a run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Resize the single file at `path`.
    #[default]
    Image,
    /// Mirror the tree at `path`, resizing every file.
    Folder,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub mode: Mode,
    /// Destination folder name.
    pub dst: String,
    pub width: u32,
    /// Target height; 0 means unset.
    pub height: u32,
    /// Source file (image mode) or directory (folder mode).
    pub path: String,
    pub scaler: Scaler,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Image,
            dst: "small".to_string(),
            width: DEFAULT_WIDTH,
            height: 0,
            path: "./".to_string(),
            scaler: Scaler::NearestNeighbor,
        }
    }
}

/// Values given explicitly on the command line. `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<Mode>,
    pub dst: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub path: Option<String>,
    pub scaler: Option<Scaler>,
}

impl ResizeConfig {
    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(dst) = overrides.dst {
            self.dst = dst;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(path) = overrides.path {
            self.path = path;
        }
        if let Some(scaler) = overrides.scaler {
            self.scaler = scaler;
        }
        self
    }

    /// Target height with the 0 sentinel mapped to `None`.
    pub fn target_height(&self) -> Option<u32> {
        (self.height != 0).then_some(self.height)
    }

    /// Validate values before any I/O happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be greater than 0".into()));
        }
        if self.dst.is_empty() {
            return Err(ConfigError::Validation("dst must not be empty".into()));
        }
        if self.path.is_empty() {
            return Err(ConfigError::Validation("path must not be empty".into()));
        }
        if self.mode == Mode::Folder && root_folder_name(&self.path).is_empty() {
            return Err(ConfigError::Validation(format!(
                "folder path {:?} must end with a folder name, not '/'",
                self.path
            )));
        }
        Ok(())
    }
}

/// Load a config file, layering it over the stock defaults.
pub fn load_config(path: &Path) -> Result<ResizeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ResizeConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the final config: stock defaults ← optional file ← overrides.
pub fn resolve_config(
    file: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ResizeConfig, ConfigError> {
    let base = match file {
        Some(path) => load_config(path)?,
        None => ResizeConfig::default(),
    };
    let config = base.with_overrides(overrides);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_cli_table() {
        let config = ResizeConfig::default();
        assert_eq!(config.mode, Mode::Image);
        assert_eq!(config.dst, "small");
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 0);
        assert_eq!(config.path, "./");
        assert_eq!(config.scaler, Scaler::NearestNeighbor);
    }

    #[test]
    fn zero_height_is_unset() {
        let config = ResizeConfig::default();
        assert_eq!(config.target_height(), None);
        let config = ResizeConfig {
            height: 250,
            ..ResizeConfig::default()
        };
        assert_eq!(config.target_height(), Some(250));
    }

    #[test]
    fn parse_partial_config() {
        let config: ResizeConfig = toml::from_str(
            r#"
mode = "folder"
scaler = "BiLinear"
"#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Folder);
        assert_eq!(config.scaler, Scaler::BiLinear);
        assert_eq!(config.dst, "small");
        assert_eq!(config.width, 400);
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<ResizeConfig, _> = toml::from_str("quality = 80");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_mode_rejected() {
        let result: Result<ResizeConfig, _> = toml::from_str(r#"mode = "video""#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_scaler_rejected() {
        let result: Result<ResizeConfig, _> = toml::from_str(r#"scaler = "Lanczos3""#);
        assert!(result.is_err());
    }

    #[test]
    fn negative_height_rejected() {
        let result: Result<ResizeConfig, _> = toml::from_str("height = -1");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let base = ResizeConfig {
            dst: "thumbs".into(),
            width: 100,
            height: 80,
            ..ResizeConfig::default()
        };
        let config = base.with_overrides(ConfigOverrides {
            width: Some(640),
            scaler: Some(Scaler::CatmullRom),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.dst, "thumbs");
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 80);
        assert_eq!(config.scaler, Scaler::CatmullRom);
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(ResizeConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_width() {
        let config = ResizeConfig {
            width: 0,
            ..ResizeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_empty_dst() {
        let config = ResizeConfig {
            dst: String::new(),
            ..ResizeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_folder_path_with_trailing_slash() {
        let config = ResizeConfig {
            mode: Mode::Folder,
            path: "photos/".into(),
            ..ResizeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ResizeConfig {
            mode: Mode::Folder,
            path: "photos".into(),
            ..ResizeConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("imgshrink.toml");
        fs::write(
            &path,
            r#"
mode = "folder"
path = "photos"
width = 1024
height = 768
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.mode, Mode::Folder);
        assert_eq!(config.path, "photos");
        assert_eq!(config.target_height(), Some(768));
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "width = [not valid").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn resolve_config_validates_merged_result() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("imgshrink.toml");
        fs::write(&path, "width = 300").unwrap();

        let result = resolve_config(
            Some(&path),
            ConfigOverrides {
                width: Some(0),
                ..ConfigOverrides::default()
            },
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn resolve_config_without_file_uses_defaults() {
        let config = resolve_config(None, ConfigOverrides::default()).unwrap();
        assert_eq!(config, ResizeConfig::default());
    }
}
