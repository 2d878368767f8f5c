//! Lineup catalog construction.
//!
//! A catalog is built once by scanning ranked source roots (the user's
//! override directory first, then the bundled directory). Every immediate
//! subdirectory of a root becomes one entry, in whatever order the
//! filesystem enumerates them. Bad input degrades, it never aborts: a
//! missing root contributes zero entries, a missing or malformed metadata
//! file leaves the entry with empty code/url. One broken entry must never
//! prevent the rest of the catalog from loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{LineupError, Result};
use crate::nav;

/// Default extension of the per-entry image (`lineup.png`)
pub const DEFAULT_IMAGE_EXT: &str = "png";

/// Default name of the per-entry metadata file
pub const DEFAULT_METADATA_FILE: &str = "code.json";

/// One source root together with its priority rank (lower rank wins,
/// i.e. its entries come first in the combined catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: PathBuf,
    pub rank: usize,
}

impl DirectorySpec {
    pub fn new(path: impl Into<PathBuf>, rank: usize) -> Self {
        Self {
            path: path.into(),
            rank,
        }
    }
}

/// Knobs for the directory scan. Defaults reproduce the layout the
/// gallery has always used: `lineup.png` + `code.json` per entry folder.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extension of the entry image file (`lineup.<ext>`)
    pub image_ext: String,
    /// File name of the entry metadata file
    pub metadata_file: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            image_ext: DEFAULT_IMAGE_EXT.to_string(),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
        }
    }
}

/// One lineup in the catalog. Immutable after the scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupEntry {
    /// Folder name, doubles as the display label
    pub name: String,
    /// Recorded image path; existence is not checked at load time
    pub image_path: PathBuf,
    /// Opaque share token, empty when metadata was absent or malformed
    pub share_code: String,
    /// Reference link, empty when metadata was absent or malformed
    pub reference_url: String,
    /// Rank of the source root this entry came from
    pub source_rank: usize,
    /// Position within its own root's listing
    pub source_order: usize,
}

impl LineupEntry {
    /// Whether the recorded image file is actually present on disk.
    /// Missing images are a render-time concern, so the loader only
    /// records the path and lets consumers probe it here.
    pub fn image_exists(&self) -> bool {
        self.image_path.exists()
    }

    pub fn has_code(&self) -> bool {
        !self.share_code.is_empty()
    }

    pub fn has_reference(&self) -> bool {
        !self.reference_url.is_empty()
    }
}

/// Typed view of a `code.json` file. Both fields default to empty and
/// unknown fields are ignored, so under-specified files still parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryMeta {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub url: String,
}

/// Strict metadata read. The loader swallows the error into empty
/// defaults; callers that want to know why a file failed use this directly.
pub fn read_metadata(path: &Path) -> Result<EntryMeta> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| LineupError::metadata(path, source))
}

/// How many entries a single source root contributed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceCount {
    pub path: PathBuf,
    pub rank: usize,
    pub entries: usize,
}

/// Ordered sequence of lineup entries concatenated across source roots.
///
/// The global index of an entry equals the number of entries from
/// lower-ranked roots plus its position within its own root's listing.
/// Names are not deduplicated across roots. Rescanning means building a
/// new `Catalog` and replacing the old one, never mutating in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<LineupEntry>,
    sources: Vec<SourceCount>,
}

impl Catalog {
    /// Scan the given roots, lowest rank first, into a combined catalog.
    ///
    /// Never fails: per the degradation policy every filesystem problem is
    /// logged and shrinks the result instead of raising.
    pub fn load(specs: &[DirectorySpec], options: &ScanOptions) -> Catalog {
        let mut ranked: Vec<&DirectorySpec> = specs.iter().collect();
        ranked.sort_by_key(|spec| spec.rank);

        let mut entries = Vec::new();
        let mut sources = Vec::new();
        for spec in ranked {
            let scanned = scan_root(spec, options);
            sources.push(SourceCount {
                path: spec.path.clone(),
                rank: spec.rank,
                entries: scanned.len(),
            });
            entries.extend(scanned);
        }

        debug!(
            "catalog loaded: {} entries from {} roots",
            entries.len(),
            sources.len()
        );
        Catalog { entries, sources }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LineupEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LineupEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineupEntry> {
        self.entries.iter()
    }

    /// Per-root contribution counts, in rank order.
    pub fn sources(&self) -> &[SourceCount] {
        &self.sources
    }

    /// First entry whose name matches, with its global index.
    pub fn find(&self, name: &str) -> Option<(usize, &LineupEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name == name)
    }

    /// Scroll offset that brings the selected entry into view. The index
    /// is passed explicitly by the caller; there is no shared "current
    /// entry" state to go stale.
    pub fn scroll_to(&self, index: usize, entry_height: f32) -> Result<f32> {
        nav::scroll_offset(index, self.len(), entry_height)
    }
}

/// Scan one root. Missing or unreadable roots yield an empty list.
fn scan_root(spec: &DirectorySpec, options: &ScanOptions) -> Vec<LineupEntry> {
    if !spec.path.is_dir() {
        debug!(
            "source root {} (rank {}) not present, skipping",
            spec.path.display(),
            spec.rank
        );
        return Vec::new();
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(&spec.path).min_depth(1).max_depth(1);
    for dirent in walker {
        let dirent = match dirent {
            Ok(dirent) => dirent,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {}", spec.path.display(), err);
                continue;
            }
        };
        if !dirent.file_type().is_dir() {
            continue;
        }

        let name = dirent.file_name().to_string_lossy().into_owned();
        let entry_dir = dirent.path();
        let meta = load_entry_meta(entry_dir, &name, &options.metadata_file);

        entries.push(LineupEntry {
            name,
            image_path: entry_dir.join(format!("lineup.{}", options.image_ext)),
            share_code: meta.code,
            reference_url: meta.url,
            source_rank: spec.rank,
            source_order: entries.len(),
        });
    }
    entries
}

/// Metadata with the degradation policy applied: absent file is normal
/// (debug), unreadable or malformed file is worth a warning, both yield
/// empty defaults.
fn load_entry_meta(entry_dir: &Path, name: &str, metadata_file: &str) -> EntryMeta {
    let meta_path = entry_dir.join(metadata_file);
    if !meta_path.exists() {
        debug!("entry '{}' has no {}, using empty defaults", name, metadata_file);
        return EntryMeta::default();
    }
    match read_metadata(&meta_path) {
        Ok(meta) => meta,
        Err(err) => {
            warn!("entry '{}': {}, using empty defaults", name, err);
            EntryMeta::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults_for_missing_fields() {
        let meta: EntryMeta = serde_json::from_str(r#"{"code": "abc123"}"#).unwrap();
        assert_eq!(meta.code, "abc123");
        assert_eq!(meta.url, "");

        let meta: EntryMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta, EntryMeta::default());
    }

    #[test]
    fn test_metadata_ignores_unknown_fields() {
        let meta: EntryMeta =
            serde_json::from_str(r#"{"code": "x", "url": "https://a.example", "note": 3}"#)
                .unwrap();
        assert_eq!(meta.code, "x");
        assert_eq!(meta.url, "https://a.example");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::load(&[], &ScanOptions::default());
        assert!(catalog.is_empty());
        assert!(catalog.sources().is_empty());
        assert!(catalog.find("anything").is_none());
    }

    #[test]
    fn test_scan_options_default_layout() {
        let options = ScanOptions::default();
        assert_eq!(options.image_ext, "png");
        assert_eq!(options.metadata_file, "code.json");
    }
}
