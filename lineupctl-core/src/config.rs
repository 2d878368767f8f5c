//! lineupctl configuration.
//!
//! Loaded from `~/.lineupctl/config.toml`. A missing file means built-in
//! defaults (the tool works out of the box next to a `lineup/` folder);
//! a file that exists but does not parse is a hard `Config` error so a
//! typo never silently reverts the user to defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{DirectorySpec, ScanOptions, DEFAULT_IMAGE_EXT, DEFAULT_METADATA_FILE};
use crate::error::{LineupError, Result};
use crate::grid::DEFAULT_GRID_WIDTH;
use crate::nav::DEFAULT_ENTRY_HEIGHT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineupConfig {
    pub roots: RootsConfig,
    pub gallery: GalleryConfig,
}

/// The two source roots, consulted in fixed priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootsConfig {
    /// User-editable override root, scanned first
    pub override_dir: PathBuf,
    /// Bundled default root, scanned second
    pub bundled_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Fixed display height of one entry, in scroll units
    pub entry_height: f32,
    /// Shortcut buttons per grid row
    pub grid_width: usize,
    /// Extension of the per-entry image file
    pub image_ext: String,
    /// Name of the per-entry metadata file
    pub metadata_file: String,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            roots: RootsConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            override_dir: PathBuf::from("lineup"),
            bundled_dir: PathBuf::from("resources/lineup"),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            entry_height: DEFAULT_ENTRY_HEIGHT,
            grid_width: DEFAULT_GRID_WIDTH,
            image_ext: DEFAULT_IMAGE_EXT.to_string(),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
        }
    }
}

impl LineupConfig {
    /// Config file path: ~/.lineupctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lineupctl/config.toml")
    }

    /// Load from the config file, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path (the seam the tests use).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| {
            LineupError::config(format!("invalid TOML in {}: {}", path.display(), err))
        })
    }

    /// Write this config to the config file, creating the directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|err| LineupError::config(format!("failed to serialize config: {err}")))?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// The configured roots as ranked directory specs, override first.
    pub fn directory_specs(&self) -> Vec<DirectorySpec> {
        vec![
            DirectorySpec::new(&self.roots.override_dir, 0),
            DirectorySpec::new(&self.roots.bundled_dir, 1),
        ]
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            image_ext: self.gallery.image_ext.clone(),
            metadata_file: self.gallery.metadata_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_gallery_layout() {
        let config = LineupConfig::default();
        assert_eq!(config.roots.override_dir, PathBuf::from("lineup"));
        assert_eq!(config.roots.bundled_dir, PathBuf::from("resources/lineup"));
        assert_eq!(config.gallery.entry_height, 200.0);
        assert_eq!(config.gallery.grid_width, 4);
        assert_eq!(config.gallery.image_ext, "png");
        assert_eq!(config.gallery.metadata_file, "code.json");
    }

    #[test]
    fn test_directory_specs_rank_override_first() {
        let specs = LineupConfig::default().directory_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].rank, 0);
        assert_eq!(specs[0].path, PathBuf::from("lineup"));
        assert_eq!(specs[1].rank, 1);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: LineupConfig = toml::from_str(
            r#"
            [gallery]
            grid_width = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.gallery.grid_width, 6);
        assert_eq!(config.gallery.entry_height, 200.0);
        assert_eq!(config.roots, RootsConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = LineupConfig::default();
        config.roots.override_dir = PathBuf::from("/tmp/my-lineups");
        config.gallery.entry_height = 180.0;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: LineupConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
