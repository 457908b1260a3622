//! Config command feature.

use crate::config::Config;
use crate::output::OutputMode;
use anyhow::Context;
use colored::Colorize;
use std::path::{Path, PathBuf};

fn resolve_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path().context("Could not determine the config directory"),
    }
}

pub(crate) fn handle_config(
    config: &Config,
    explicit_path: Option<&Path>,
    init: bool,
    force: bool,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let path = resolve_path(explicit_path)?;

    if init {
        if path.exists() && !force {
            anyhow::bail!(
                "Config file {} already exists (use --force to overwrite)",
                path.display()
            );
        }
        Config::default().save_to(&path)?;
        if output_mode != OutputMode::Quiet {
            println!("{} {}", "Wrote default configuration to".green(), path.display());
        }
        return Ok(());
    }

    if output_mode != OutputMode::Quiet {
        let origin = if path.exists() { "" } else { " (not found, using defaults)" };
        println!("{}", format!("# {}{}", path.display(), origin).dimmed());
    }
    print!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
    Ok(())
}
