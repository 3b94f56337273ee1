use anyhow::Result;
use clap::Parser;
use runtime::RuntimeConfig;

use super::open_ledger;
use crate::render;

/// Show played, win rate, streaks, and the guess distribution
#[derive(Parser, Debug)]
pub struct Stats;

impl Stats {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let ledger = open_ledger(config)?;
        let stats = ledger.stats(ledger.clock().today())?;
        print!("{}", render::stats(&stats));
        Ok(())
    }
}
