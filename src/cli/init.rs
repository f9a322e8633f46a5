//! Init command - write a starter config with the built-in word lists

use crate::config::{ProjectConfig, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const CONFIG_HEADER: &str = "\
# gender-decoder configuration
#
# [analysis] hyphens: \"leading\" splits only words that start with '-',
# \"anywhere\" splits every word with an inner hyphen (words starting with
# '-' stay whole) unless it starts with a hyphenated_coded_words prefix.
#
# Word lists hold stems matched anywhere inside a word: \"lead\" also
# matches \"leader\" and \"leadership\". Delete a list to use the built-in one.

";

/// Run the init command
pub fn run(path: &Path, force: bool) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!(
            "{} Config already exists at {} (use --force to overwrite)",
            style("!").yellow(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    let body = ProjectConfig::default().to_toml()?;
    std::fs::write(&config_path, format!("{CONFIG_HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
