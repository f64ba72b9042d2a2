use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::config::*;
use crate::core::artwork::{ArtworkRecord, ImageReference};
use crate::core::asset_loader::bundled_name;
use crate::core::catalog::{Catalog, CatalogError};
use crate::core::image_format::ImageFormat;
use crate::i18n::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreloadSettings {
    /// Neighbours decoded on each side of the current artwork.
    pub range: usize,
    /// Decoded textures kept in memory.
    pub cache_size: usize,
}

impl PreloadSettings {
    /// Artworks one preload pass wants decoded: the current one plus `range`
    /// on each side.
    pub fn window(&self) -> usize {
        self.range.saturating_mul(2).saturating_add(1)
    }
}

impl Default for PreloadSettings {
    fn default() -> Self {
        Self {
            range: DEFAULT_PRELOAD_RANGE,
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

/// One `[[artwork]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtworkEntry {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub description: String,
    /// Bundled image name, or a path relative to the config file.
    pub image: String,
}

impl ArtworkEntry {
    fn image_reference(&self, base_dir: Option<&Path>) -> ImageReference {
        if let Some(name) = bundled_name(&self.image) {
            return ImageReference::Bundled(name);
        }
        let path = PathBuf::from(&self.image);
        match base_dir {
            Some(dir) if path.is_relative() => ImageReference::File(dir.join(path)),
            _ => ImageReference::File(path),
        }
    }

    fn into_record(self, base_dir: Option<&Path>) -> ArtworkRecord {
        let image = self.image_reference(base_dir);
        ArtworkRecord::new(self.title, self.author, self.year, self.description, image)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub locale: Locale,
    pub log_level: LogLevel,
    pub window: WindowSettings,
    pub preload: PreloadSettings,
    /// Replaces the built-in catalog when present.
    #[serde(rename = "artwork")]
    pub artworks: Option<Vec<ArtworkEntry>>,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl Settings {
    /// `<config_dir>/art-space/config.toml`, or the current directory when
    /// the platform has no config directory.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_ID).join(CONFIG_FILE_NAME)
    }

    /// Loads settings from `path`, or from [`default_path`] when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// [`default_path`]: Settings::default_path
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from(p, true),
            None => Self::load_from(&Self::default_path(), false),
        }
    }

    fn load_from(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let path = path.to_path_buf();

        if !explicit && !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;

        let mut settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;

        settings.validate()?;
        log::info!("Loaded config from {}", path.display());
        settings.source = Some(path);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Validation {
                message: format!(
                    "window size must be positive, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }

        if self.preload.cache_size < self.preload.window() {
            return Err(ConfigError::Validation {
                message: format!(
                    "preload.cache_size must hold the preload window of {} (range {}), got {}",
                    self.preload.window(),
                    self.preload.range,
                    self.preload.cache_size
                ),
            });
        }

        if let Some(artworks) = &self.artworks {
            if artworks.is_empty() {
                return Err(ConfigError::Validation {
                    message: "artwork list is present but empty".to_string(),
                });
            }

            for (i, entry) in artworks.iter().enumerate() {
                if entry.title.trim().is_empty() {
                    return Err(ConfigError::Validation {
                        message: format!("artwork #{} has an empty title", i + 1),
                    });
                }
                if bundled_name(&entry.image).is_none()
                    && !ImageFormat::is_supported(Path::new(&entry.image))
                {
                    return Err(ConfigError::Validation {
                        message: format!(
                            "artwork '{}' uses unsupported image '{}' (expected a bundled name or one of: {})",
                            entry.title,
                            entry.image,
                            ImageFormat::supported_extensions().join(", ")
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Builds the session catalog: configured artworks, or the built-in ones.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.artworks {
            None => Ok(Catalog::builtin()),
            Some(entries) => {
                let base_dir = self.source.as_deref().and_then(Path::parent);
                let records = entries
                    .iter()
                    .cloned()
                    .map(|entry| entry.into_record(base_dir))
                    .collect();
                Ok(Catalog::new(records)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_builtin_gallery() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.preload.range, 1);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.catalog().unwrap().len(), 3);
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.source.is_none());
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("locale = \"es\"\n[window]\nwidth = 600.0\n");
        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.locale, Locale::Es);
        assert_eq!(settings.window.width, 600.0);
        assert_eq!(settings.window.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(settings.preload, PreloadSettings::default());
        assert!(settings.artworks.is_none());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let file = write_config("locale = \"en\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let file = write_config("colour = \"blue\"\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_cache_size_fails_validation() {
        let file = write_config("[preload]\ncache_size = 0\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn cache_smaller_than_preload_window_fails_validation() {
        let file = write_config("[preload]\nrange = 1\ncache_size = 2\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { message } if message.contains("cache_size")));

        let file = write_config("[preload]\nrange = 2\ncache_size = 5\n");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.preload.window(), 5);
    }

    #[test]
    fn negative_window_fails_validation() {
        let file = write_config("[window]\nheight = -1.0\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn empty_artwork_list_fails_validation() {
        let file = write_config("artwork = []\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn unsupported_image_fails_validation() {
        let file = write_config(
            r#"
[[artwork]]
title = "Sketch"
author = "A"
year = 1999
description = "a sketch"
image = "sketch.svg"
"#,
        );
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { message } if message.contains("sketch.svg")));
    }

    #[test]
    fn artworks_resolve_bundled_names_and_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(
            &path,
            r#"
[[artwork]]
title = "Library"
author = "John Smith"
year = 2024
description = "Image of a library"
image = "library"

[[artwork]]
title = "Harbour"
author = "Jane Doe"
year = 1987
description = "Boats at dusk"
image = "pictures/harbour.jpg"
"#,
        )
        .unwrap();

        let catalog = Settings::load(Some(&path)).unwrap().catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).image(), &ImageReference::Bundled("library"));
        assert_eq!(catalog.get(1).title(), "Harbour");
        assert_eq!(catalog.get(1).year(), 1987);
        assert_eq!(
            catalog.get(1).image(),
            &ImageReference::File(dir.path().join("pictures/harbour.jpg"))
        );
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(log::LevelFilter::from(LogLevel::Off), log::LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(LogLevel::Debug), log::LevelFilter::Debug);
    }
}
