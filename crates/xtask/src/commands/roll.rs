//! Generate reward batches from the data directory.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use reward_core::{BatchRequest, EngineError, PcgRng, PoolKind, Tier, luck_grade, reroll_cost};

use crate::utils::{self, OutputFormat};

/// Generate reward batches for a party and seed
#[derive(Parser)]
pub struct Roll {
    /// Party file under `parties/` (without `.ron`)
    #[arg(short, long, default_value = "early")]
    party: String,

    /// Seed of the draw stream
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Run seed for daily luck (defaults to the draw seed)
    #[arg(long)]
    run_seed: Option<u64>,

    /// Options per batch
    #[arg(short, long, default_value_t = 3)]
    count: usize,

    /// Pool to draw from
    #[arg(long, default_value = "player")]
    pool: PoolKind,

    /// Settings preset under `settings/` (without `.ron`)
    #[arg(long)]
    settings: Option<String>,

    /// Base tier per slot, comma separated (e.g. `ultra,great`)
    #[arg(long, value_delimiter = ',')]
    pin: Vec<Tier>,

    /// Rerolls already taken on this screen
    #[arg(long, default_value_t = 0)]
    rerolls: u32,

    /// Consecutive batches drawn from the same stream
    #[arg(short, long, default_value_t = 1)]
    batches: usize,

    /// Custom data directory (defaults to REWARD_DATA_DIR or the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Roll {
    pub fn execute(self) -> Result<()> {
        let factory = utils::factory(self.data_dir)?;
        let engine = factory.build_engine(self.run_seed.unwrap_or(self.seed))?;
        let party = factory
            .load_party(&self.party)
            .with_context(|| format!("Failed to load party '{}'", self.party))?;

        let mut request = BatchRequest::new(self.count)
            .with_pool(self.pool)
            .with_pinned_tiers(self.pin)
            .with_reroll_count(self.rerolls);
        if let Some(name) = &self.settings {
            let settings = factory
                .load_settings(name)
                .with_context(|| format!("Failed to load settings '{}'", name))?;
            request = request.with_settings(settings);
        }

        let mut rng = PcgRng::new(self.seed);
        let mut batches = Vec::with_capacity(self.batches);
        for index in 0..self.batches {
            let options = engine.generate(&request, &party, &mut rng).map_err(|e| {
                anyhow::anyhow!("batch {} failed [{}]: {}", index, e.error_code(), e)
            })?;
            batches.push(options);
        }

        match self.format {
            OutputFormat::Json => return utils::print_json(&batches),
            OutputFormat::Debug => {
                println!("{:#?}", batches);
                return Ok(());
            }
            OutputFormat::Summary => {}
        }

        let luck = engine.luck(&party);
        println!(
            "{} {} pool, wave {}, luck {} ({}), seed {}",
            style("Roll:").bold().cyan(),
            self.pool,
            party.wave,
            luck,
            luck_grade(luck),
            self.seed
        );
        println!();

        for (index, options) in batches.iter().enumerate() {
            println!("{}", style(format!("Batch {}", index + 1)).bold().yellow());
            for option in options {
                println!("  {}", utils::format_option(option));
            }
            match reroll_cost(options, party.wave, self.rerolls, false, request.settings.as_ref()) {
                Some(cost) => println!("  {} {}₽", style("reroll:").dim(), cost),
                None => println!("  {}", style("reroll disabled").dim()),
            }
            println!();
        }

        Ok(())
    }
}
