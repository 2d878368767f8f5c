//! Config command - inspect and initialize ~/.lineupctl/config.toml

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lineupctl_core::LineupConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = LineupConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    LineupConfig::default()
        .save()
        .context("failed to write default config")?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = LineupConfig::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", LineupConfig::config_path().display());
    Ok(())
}
