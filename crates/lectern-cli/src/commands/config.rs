use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use lectern_core::config::LecternConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the effective config (file merged over defaults) instead of the defaults
    #[arg(long)]
    pub effective: bool,
}

/// Print or save the config as TOML.
pub fn run(args: &ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let config = if args.effective {
        LecternConfig::load_or_default(config_path).context("Failed to load config")?
    } else {
        LecternConfig::default()
    };

    if let Some(ref path) = args.output {
        config
            .save(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Config saved to {}", path.display());
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
