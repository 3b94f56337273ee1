use anyhow::Result;
use clap::Parser;
use runtime::{RuntimeConfig, compute_streak};

use super::{open_ledger, resolve_date};

/// Show the streak of consecutive days with a completed puzzle
#[derive(Parser, Debug)]
pub struct Streak {
    /// Count back from this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
}

impl Streak {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let today = resolve_date(self.today.as_deref())?;
        let ledger = open_ledger(config)?;
        let streak = compute_streak(&ledger.list_completed_sessions()?, today);
        println!("{streak}");
        Ok(())
    }
}
