//! Party luck inspection.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use reward_core::{Tier, luck_grade, luck_tier};

use crate::utils::{self, OutputFormat};

/// Show party luck, grade and upgrade odds
#[derive(Parser)]
pub struct Luck {
    /// Party file under `parties/` (without `.ron`)
    #[arg(short, long, default_value = "early")]
    party: String,

    /// Run seed (only daily runs read it)
    #[arg(short, long, default_value_t = 0)]
    run_seed: u64,

    /// Custom data directory (defaults to REWARD_DATA_DIR or the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct LuckSummary {
    luck: u8,
    grade: &'static str,
    tint: Tier,
    upgrade_odds: u32,
    upgrade_success_below: u32,
    /// Chance of at least one upgrade per draw, in percent.
    upgrade_chance: f64,
}

impl Luck {
    pub fn execute(self) -> Result<()> {
        let factory = utils::factory(self.data_dir)?;
        let engine = factory.build_engine(self.run_seed)?;
        let party = factory
            .load_party(&self.party)
            .with_context(|| format!("Failed to load party '{}'", self.party))?;

        let luck = engine.luck(&party);
        let odds = engine.config().upgrade_odds(luck);
        let success = engine.config().upgrade_success_below.min(odds);
        let summary = LuckSummary {
            luck,
            grade: luck_grade(luck),
            tint: luck_tier(luck),
            upgrade_odds: odds,
            upgrade_success_below: success,
            upgrade_chance: f64::from(success) * 100.0 / f64::from(odds),
        };

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {} ({} mode, wave {})",
                    style("Party:").bold().cyan(),
                    self.party,
                    party.mode,
                    party.wave
                );
                println!(
                    "{} {} {}",
                    style("Luck:").bold().cyan(),
                    summary.luck,
                    utils::tier_style(summary.tint).apply_to(summary.grade)
                );
                println!(
                    "{} {} in {} per step ({:.2}%)",
                    style("Upgrade odds:").bold().cyan(),
                    summary.upgrade_success_below,
                    summary.upgrade_odds,
                    summary.upgrade_chance
                );
            }
            OutputFormat::Json => utils::print_json(&summary)?,
            OutputFormat::Debug => println!("{:#?}", summary),
        }

        Ok(())
    }
}
