mod init;
pub use init::cmd_config_init;

use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigFile};
use crate::model::Config;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = resolve_config_path(&cli);
    let overrides = SessionOverrides::from_cli(&cli);

    match cli.command {
        None => {
            let file = ConfigFile::load(&path)?;
            crate::io::logging::init_logging(&file.config.log)?;
            tracing::info!(path = %file.path.display(), exists = file.exists, "config loaded");
            let durations = overrides.apply(&file.config).timer.durations();
            crate::tui::run(file, durations)
        }
        Some(Commands::Config(cmd)) => match cmd.action {
            None | Some(ConfigAction::Show) => cmd_config_show(&path, &overrides, json),
            Some(ConfigAction::Path) => cmd_config_path(&path, json),
            Some(ConfigAction::Init(args)) => cmd_config_init(&path, args),
        },
    }
}

/// `--config` if given, otherwise the per-user default location
pub fn resolve_config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(config_io::config_path)
}

/// Duration overrides from the command line. They apply to this run only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOverrides {
    pub focus: Option<u32>,
    pub short_break: Option<u32>,
    pub long_break: Option<u32>,
}

impl SessionOverrides {
    pub fn from_cli(cli: &Cli) -> Self {
        SessionOverrides {
            focus: cli.focus,
            short_break: cli.short_break,
            long_break: cli.long_break,
        }
    }

    /// Copy of `config` with the overridden minutes substituted
    pub fn apply(&self, config: &Config) -> Config {
        let mut effective = config.clone();
        let timer = &mut effective.timer;
        if let Some(m) = self.focus {
            timer.focus_minutes = m;
        }
        if let Some(m) = self.short_break {
            timer.short_break_minutes = m;
        }
        if let Some(m) = self.long_break {
            timer.long_break_minutes = m;
        }
        effective
    }
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

fn cmd_config_show(
    path: &std::path::Path,
    overrides: &SessionOverrides,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = ConfigFile::load(path)?;
    let effective = overrides.apply(&file.config);

    if json {
        let out = ConfigJson {
            path,
            exists: file.exists,
            config: &effective,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_config(path, file.exists, &effective)?);
    }
    Ok(())
}

fn cmd_config_path(path: &std::path::Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = PathJson {
            path,
            exists: path.exists(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
