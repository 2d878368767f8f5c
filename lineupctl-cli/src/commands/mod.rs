//! Command implementations for lineupctl CLI

pub mod catalog;
pub mod entry;
pub mod guide;

// Re-export main dispatcher functions for flat access from main.rs
pub use catalog::{run_grid, run_list, run_show};
pub use entry::{run_copy, run_open};
pub use guide::run_guide;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use lineupctl_core::{Catalog, DirectorySpec, LineupConfig, LineupEntry};

/// Build the catalog from explicit roots (priority order) or, when none
/// were given, from the configured override/bundled pair.
pub(crate) fn load_catalog(roots: &[PathBuf], config: &LineupConfig) -> Catalog {
    let specs: Vec<DirectorySpec> = if roots.is_empty() {
        config.directory_specs()
    } else {
        roots
            .iter()
            .enumerate()
            .map(|(rank, path)| DirectorySpec::new(path, rank))
            .collect()
    };
    Catalog::load(&specs, &config.scan_options())
}

/// Resolve an entry selector: tried as a global index first, then as a
/// folder name (first match in catalog order wins).
pub(crate) fn resolve_entry<'a>(
    catalog: &'a Catalog,
    selector: &str,
) -> Result<(usize, &'a LineupEntry)> {
    if let Ok(index) = selector.parse::<usize>() {
        return catalog
            .get(index)
            .map(|entry| (index, entry))
            .ok_or_else(|| {
                anyhow!(
                    "Index {} out of range (catalog has {} entries)",
                    index,
                    catalog.len()
                )
            });
    }
    catalog
        .find(selector)
        .ok_or_else(|| anyhow!("No entry named '{}' in the catalog", selector))
}
