use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::MAX_MINUTES;

#[derive(Parser)]
#[command(name = "pomo", about = concat!("pomodesk v", env!("CARGO_PKG_VERSION"), " - focus timer and daily checklist"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different config file
    #[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Focus length in minutes for this session
    #[arg(long, value_name = "MIN", value_parser = clap::value_parser!(u32).range(1..=MAX_MINUTES as i64))]
    pub focus: Option<u32>,

    /// Short break length in minutes for this session
    #[arg(long, value_name = "MIN", value_parser = clap::value_parser!(u32).range(1..=MAX_MINUTES as i64))]
    pub short_break: Option<u32>,

    /// Long break length in minutes for this session
    #[arg(long, value_name = "MIN", value_parser = clap::value_parser!(u32).range(1..=MAX_MINUTES as i64))]
    pub long_break: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective configuration, or manage the config file
    Config(ConfigCmd),
}

// ---------------------------------------------------------------------------
// Config args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (default)
    Show,
    /// Print the config file path
    Path,
    /// Write a commented default config file
    Init(InitArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}
