use crate::config::DatebookConfig;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// `datebook config`: show where settings come from and what they resolve to.
pub fn run(config_path: &Path, config: &DatebookConfig) -> Result<()> {
    let status = if config_path.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}{}", config_path.display(), status.dimmed());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
