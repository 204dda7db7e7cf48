use std::path::Path;

use serde::Serialize;

use crate::model::Config;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ConfigJson<'a> {
    pub path: &'a Path,
    /// Whether the file exists; defaults are used when it does not
    pub exists: bool,
    pub config: &'a Config,
}

#[derive(Serialize)]
pub struct PathJson<'a> {
    pub path: &'a Path,
    pub exists: bool,
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Effective configuration as TOML, headed by where it came from
pub fn format_config(path: &Path, exists: bool, config: &Config) -> Result<String, toml::ser::Error> {
    let source = if exists {
        format!("# {}", path.display())
    } else {
        format!("# {} (not found, using defaults)", path.display())
    };
    let body = toml::to_string_pretty(config)?;
    Ok(format!("{}\n\n{}", source, body.trim_end()))
}
