//! lineupctl CLI - lineup gallery catalog on the command line
//!
//! This is the main entry point for the lineupctl command-line tool, which provides:
//! - Catalog inspection across the override and bundled lineup roots (`list`, `show`)
//! - Shortcut grid rendering (`grid`)
//! - Per-entry actions: share-code copy and reference-URL opening (`copy`, `open`)
//! - The lineup folder layout guide (`guide`)
//! - Configuration management (`config` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "lineupctl",
    author,
    version,
    about = "Lineup gallery catalog: browse entries, copy share codes, open guides",
    long_about = "Scans the override and bundled lineup roots into an ordered catalog. \
                  Entries are addressed by their global index or their folder name; \
                  missing roots and malformed metadata degrade instead of failing."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog entries with their global indices
    List(commands::catalog::ListArgs),
    /// Show one entry in full detail (grid cell, scroll offset, files)
    Show(commands::catalog::ShowArgs),
    /// Render the shortcut grid as rows of jump labels
    Grid(commands::catalog::GridArgs),
    /// Copy an entry's share code to the system clipboard
    Copy(commands::entry::CopyArgs),
    /// Open an entry's reference URL in the default browser
    Open(commands::entry::OpenArgs),
    /// Print the lineup folder layout guide
    Guide,
    /// Manage lineupctl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LINEUPCTL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::run_list(args)?,
        Commands::Show(args) => commands::run_show(args)?,
        Commands::Grid(args) => commands::run_grid(args)?,
        Commands::Copy(args) => commands::run_copy(args)?,
        Commands::Open(args) => commands::run_open(args)?,
        Commands::Guide => commands::run_guide(),
        Commands::Config(args) => config::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
