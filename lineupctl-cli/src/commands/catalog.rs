//! Catalog inspection commands
//!
//! Commands: list, show, grid

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use lineupctl_core::{grid, LineupConfig, ShortcutGrid};

use super::{load_catalog, resolve_entry};

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Source roots in priority order (default: configured override + bundled roots)
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Vec<PathBuf>,

    /// Output format (text, json, names-only)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Entry selector: global index or folder name
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// Source roots in priority order (default: configured override + bundled roots)
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Buttons per row (default: configured grid width)
    #[arg(long, short = 'w')]
    pub width: Option<usize>,

    /// Source roots in priority order (default: configured override + bundled roots)
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Vec<PathBuf>,
}

pub fn run_list(args: ListArgs) -> Result<()> {
    let config = LineupConfig::load()?;
    let catalog = load_catalog(&args.root, &config);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(catalog.entries())?),
        "names-only" => {
            for entry in catalog.iter() {
                println!("{}", entry.name);
            }
        }
        "text" => {
            if catalog.is_empty() {
                println!("No lineup entries found.");
            } else {
                for (index, entry) in catalog.iter().enumerate() {
                    println!(
                        "{:>4}  {:<24}  {:<4}  {}",
                        index,
                        entry.name,
                        if entry.has_code() { "code" } else { "-" },
                        if entry.has_reference() { "url" } else { "-" }
                    );
                }
            }
            for source in catalog.sources() {
                println!(
                    "root {} ({}): {} entries",
                    source.rank,
                    source.path.display(),
                    source.entries
                );
            }
        }
        other => {
            return Err(anyhow!(
                "Unknown format '{}' (expected text, json, names-only)",
                other
            ))
        }
    }
    Ok(())
}

pub fn run_show(args: ShowArgs) -> Result<()> {
    let config = LineupConfig::load()?;
    let catalog = load_catalog(&args.root, &config);
    let (index, entry) = resolve_entry(&catalog, &args.entry)?;

    let (row, col) = grid::position(index, config.gallery.grid_width);
    let offset = catalog.scroll_to(index, config.gallery.entry_height)?;

    println!("{}", entry.name);
    println!("  global index  : {index}");
    println!("  grid cell     : row {row}, col {col}");
    println!("  scroll offset : {offset}");
    println!(
        "  image         : {} ({})",
        entry.image_path.display(),
        if entry.image_exists() {
            "present"
        } else {
            "missing"
        }
    );
    println!(
        "  share code    : {}",
        if entry.has_code() {
            entry.share_code.as_str()
        } else {
            "(none)"
        }
    );
    println!(
        "  reference url : {}",
        if entry.has_reference() {
            entry.reference_url.as_str()
        } else {
            "(none)"
        }
    );
    Ok(())
}

pub fn run_grid(args: GridArgs) -> Result<()> {
    let config = LineupConfig::load()?;
    let catalog = load_catalog(&args.root, &config);
    let width = args.width.unwrap_or(config.gallery.grid_width);
    let grid = ShortcutGrid::assign(&catalog, width);

    if grid.is_empty() {
        println!("No lineup entries found.");
        return Ok(());
    }
    for row in 0..grid.rows() {
        let cells: Vec<String> = grid
            .row(row)
            .iter()
            .map(|shortcut| format!("[{:>2}] {}", shortcut.index, shortcut.label))
            .collect();
        println!("{}", cells.join("   "));
    }
    Ok(())
}
