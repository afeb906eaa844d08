//! Shop rows and reroll pricing.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use reward_core::{BatchRequest, PcgRng, RewardOption, reroll_cost, shop_options_for_wave};

use crate::utils::{self, OutputFormat};

/// Show shop rows and reroll prices for a wave
#[derive(Parser)]
pub struct Shop {
    /// Wave to price
    #[arg(short, long)]
    wave: u32,

    /// Base money value the row multipliers apply to
    #[arg(short, long, default_value_t = 1000)]
    base_cost: u64,

    /// Reroll prices are listed for 0..=rerolls
    #[arg(short, long, default_value_t = 4)]
    rerolls: u32,

    /// Price rerolls with rarities locked to a rolled offer
    #[arg(long)]
    lock_rarities: bool,

    /// Party file used for the rolled offer (without `.ron`)
    #[arg(short, long, default_value = "early")]
    party: String,

    /// Seed of the rolled offer
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Settings preset under `settings/` (without `.ron`)
    #[arg(long)]
    settings: Option<String>,

    /// Custom data directory (defaults to REWARD_DATA_DIR or the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ShopSummary {
    wave: u32,
    rows: Vec<RewardOption>,
    offer: Vec<RewardOption>,
    /// `None` where rerolling is disabled.
    reroll_costs: Vec<Option<u64>>,
}

impl Shop {
    pub fn execute(self) -> Result<()> {
        let factory = utils::factory(self.data_dir)?;
        let engine = factory.build_engine(self.seed)?;
        let mut party = factory
            .load_party(&self.party)
            .with_context(|| format!("Failed to load party '{}'", self.party))?;
        party.wave = self.wave;

        let settings = match &self.settings {
            Some(name) => Some(
                factory
                    .load_settings(name)
                    .with_context(|| format!("Failed to load settings '{}'", name))?,
            ),
            None => None,
        };

        let offer = engine
            .generate(&BatchRequest::new(3), &party, &mut PcgRng::new(self.seed))
            .map_err(|e| anyhow::anyhow!("offer roll failed: {}", e))?;
        let reroll_costs = (0..=self.rerolls)
            .map(|count| {
                reroll_cost(&offer, self.wave, count, self.lock_rarities, settings.as_ref())
            })
            .collect();

        let summary = ShopSummary {
            wave: self.wave,
            rows: shop_options_for_wave(self.wave, self.base_cost),
            offer,
            reroll_costs,
        };

        match self.format {
            OutputFormat::Summary => print_summary(&summary),
            OutputFormat::Json => utils::print_json(&summary)?,
            OutputFormat::Debug => println!("{:#?}", summary),
        }

        Ok(())
    }
}

fn print_summary(summary: &ShopSummary) {
    println!("{} wave {}", style("Shop:").bold().cyan(), summary.wave);
    println!();

    if summary.rows.is_empty() {
        println!("  {}", style("no shop on this wave").dim());
    }
    for option in &summary.rows {
        println!("  {}", utils::format_option(option));
    }
    println!();

    println!("{}", style("Offer:").bold().yellow());
    for option in &summary.offer {
        println!("  {}", utils::format_option(option));
    }
    println!();

    println!("{}", style("Reroll cost:").bold().yellow());
    for (count, cost) in summary.reroll_costs.iter().enumerate() {
        match cost {
            Some(cost) => println!("  #{:<3} {}₽", count, cost),
            None => println!("  #{:<3} {}", count, style("disabled").dim()),
        }
    }
}
