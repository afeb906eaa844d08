//! Per-tier weight tables for balance review.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use reward_core::{PoolKind, PoolReport, pool};

use crate::utils::{self, OutputFormat};

/// Show per-tier weights and odds of a pool
#[derive(Parser)]
pub struct Odds {
    /// Pool to inspect
    #[arg(long, default_value = "player")]
    pool: PoolKind,

    /// Party file under `parties/` (without `.ron`)
    #[arg(short, long, default_value = "early")]
    party: String,

    /// Override the party's wave
    #[arg(short, long)]
    wave: Option<u32>,

    /// Rerolls already taken on this screen
    #[arg(long, default_value_t = 0)]
    rerolls: u32,

    /// Custom data directory (defaults to REWARD_DATA_DIR or the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Odds {
    pub fn execute(self) -> Result<()> {
        let factory = utils::factory(self.data_dir)?;
        let mut party = factory
            .load_party(&self.party)
            .with_context(|| format!("Failed to load party '{}'", self.party))?;
        if let Some(wave) = self.wave {
            party.wave = wave;
        }

        let report = PoolReport::build(pool(self.pool), &party, self.rerolls);

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => utils::print_json(&report)?,
            OutputFormat::Debug => println!("{:#?}", report),
        }

        Ok(())
    }
}

fn print_summary(report: &PoolReport) {
    println!(
        "{} {} pool, wave {}, rerolls {}",
        style("Odds:").bold().cyan(),
        report.pool,
        report.wave,
        report.reroll_count
    );

    for tier in &report.tiers {
        println!();
        println!(
            "{} {}",
            utils::tier_style(tier.tier).apply_to(tier.tier.display_name()),
            style(format!("(total {})", tier.total)).dim()
        );
        for entry in &tier.entries {
            println!(
                "  {:<28} {:>4} / {:<4} {:>6.2}%",
                entry.id.as_ref(),
                entry.weight,
                entry.max_weight,
                entry.percent
            );
        }
        if !tier.ignored.is_empty() {
            let ids: Vec<&str> = tier.ignored.iter().map(AsRef::as_ref).collect();
            println!("  {} {}", style("ignored:").dim(), ids.join(", "));
        }
    }
}
