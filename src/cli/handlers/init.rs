use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::config_io;

/// Write the commented default config to `path`
pub fn cmd_config_init(path: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    config_io::init_config(path, args.force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
