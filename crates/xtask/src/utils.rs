//! Utility functions for xtask commands

use anyhow::{Context, Result};
use console::{Color, Style};
use serde::Serialize;
use std::path::PathBuf;

use reward_content::ContentFactory;
use reward_core::{RewardOption, Tier};

/// Environment variable naming the reward data directory.
pub const DATA_DIR_ENV: &str = "REWARD_DATA_DIR";

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

/// Resolve the data directory: explicit flag, then `REWARD_DATA_DIR`, then
/// the data shipped with `reward-content`.
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../rewards/content/data")
        })
}

pub fn factory(explicit: Option<PathBuf>) -> Result<ContentFactory> {
    let dir = data_dir(explicit);
    if !dir.exists() {
        anyhow::bail!(
            "Data directory does not exist: {}\n\
             Set {} or pass --data-dir.",
            dir.display(),
            DATA_DIR_ENV
        );
    }
    tracing::debug!("using reward data from {}", dir.display());
    Ok(ContentFactory::new(dir))
}

/// Terminal style matching a tier's tint.
pub fn tier_style(tier: Tier) -> Style {
    let tint = tier.text_tint();
    let (r, g, b) = ((tint >> 16) as u8, (tint >> 8) as u8, tint as u8);
    Style::new().fg(Color::Color256(ansi_256(r, g, b))).bold()
}

/// Nearest xterm-256 colour cube index.
fn ansi_256(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// One offer line: tier, name, upgrades and cost.
pub fn format_option(option: &RewardOption) -> String {
    let (label, style) = match option.tier() {
        Some(tier) => (tier.display_name(), tier_style(tier)),
        None => ("-", Style::new().dim()),
    };
    let mut line = format!(
        "{} {}",
        style.apply_to(format!("{:<7}", label)),
        option.reward.name()
    );
    if option.upgrade_count > 0 {
        line.push_str(&format!(" (+{})", option.upgrade_count));
    }
    if option.cost > 0 {
        line.push_str(&format!("  {}₽", option.cost));
    }
    line
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}
