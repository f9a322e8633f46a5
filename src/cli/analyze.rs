//! Analyze command - score an advert's gender coding

use super::AnalyzeArgs;
use crate::analysis::{analyse, HyphenPolicy};
use crate::config::{discover_config, load_config_file, ProjectConfig};
use crate::input::{read_advert, STDIN_PATH};
use crate::reporters;
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Run the analyze command
pub fn run(file: &Path, args: &AnalyzeArgs) -> Result<()> {
    let ad_text = read_advert(file)?;
    info!("Analysing {} ({} bytes)", file.display(), ad_text.len());

    let config = load_config(file, args.config.as_deref())?;
    let mut analysis_config = config
        .analysis_config()
        .context("Invalid word lists in config")?;
    if let Some(policy) = &args.hyphens {
        analysis_config.hyphen_policy = policy.parse::<HyphenPolicy>()?;
    }

    let result = analyse(&ad_text, &analysis_config);
    info!(
        "Score: {} (feminine {}, masculine {})",
        result.score,
        result.feminine_total(),
        result.masculine_total()
    );

    let format = effective_format(args.format.as_deref(), &config);
    let rendered = reporters::report(&result, &format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Load an explicit config, or discover one next to the advert or in the working directory
pub fn load_config(file: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        debug!("Using config {}", path.display());
        return Ok(load_config_file(path)?);
    }

    let mut dirs: Vec<PathBuf> = Vec::new();
    if file.as_os_str() != STDIN_PATH {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            dirs.push(parent.to_path_buf());
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.contains(&cwd) {
            dirs.push(cwd);
        }
    }

    Ok(discover_config(&dirs))
}

/// CLI flag > config `[defaults] format` > text
pub fn effective_format(flag: Option<&str>, config: &ProjectConfig) -> String {
    flag.or(config.defaults.format.as_deref())
        .unwrap_or("text")
        .to_string()
}
