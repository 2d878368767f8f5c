//! Per-entry actions
//!
//! Commands: copy (share code to clipboard), open (reference URL in browser)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lineupctl_core::{ActionDispatcher, LineupConfig};
use tracing::info;

use super::{load_catalog, resolve_entry};

#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// Entry selector: global index or folder name
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// Source roots in priority order (default: configured override + bundled roots)
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Entry selector: global index or folder name
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// Source roots in priority order (default: configured override + bundled roots)
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Vec<PathBuf>,
}

pub fn run_copy(args: CopyArgs) -> Result<()> {
    let config = LineupConfig::load()?;
    let catalog = load_catalog(&args.root, &config);
    let (index, entry) = resolve_entry(&catalog, &args.entry)?;

    info!("copying share code of entry {} ('{}')", index, entry.name);
    ActionDispatcher::system()
        .copy_code(entry)
        .with_context(|| format!("failed to copy share code for '{}'", entry.name))?;

    if entry.has_code() {
        println!("Copied share code for '{}'", entry.name);
    } else {
        println!("'{}' has no share code; clipboard cleared", entry.name);
    }
    Ok(())
}

pub fn run_open(args: OpenArgs) -> Result<()> {
    let config = LineupConfig::load()?;
    let catalog = load_catalog(&args.root, &config);
    let (index, entry) = resolve_entry(&catalog, &args.entry)?;

    info!("opening reference of entry {} ('{}')", index, entry.name);
    ActionDispatcher::system()
        .open_reference(entry)
        .with_context(|| format!("failed to open reference for '{}'", entry.name))?;

    println!("Opened {} for '{}'", entry.reference_url, entry.name);
    Ok(())
}
