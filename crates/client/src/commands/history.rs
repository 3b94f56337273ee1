use anyhow::Result;
use clap::Parser;
use runtime::RuntimeConfig;

use super::open_ledger;

/// List completed sessions, oldest first
#[derive(Parser, Debug)]
pub struct History {
    /// Only show sessions of this pack
    #[arg(long)]
    pack: Option<String>,
}

impl History {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let ledger = open_ledger(config)?;
        let sessions: Vec<_> = ledger
            .list_completed_sessions()?
            .into_iter()
            .filter(|s| self.pack.as_ref().is_none_or(|pack| &s.pack_id == pack))
            .collect();

        if sessions.is_empty() {
            println!("No completed sessions yet");
            return Ok(());
        }

        for session in sessions {
            let result = if session.success { "won " } else { "lost" };
            let played = session
                .completed_at
                .map(|at| at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_owned());
            println!(
                "{}  {:<12} {} in {}/5  played {}",
                session.date, session.pack_id, result, session.attempt_count, played
            );
        }
        Ok(())
    }
}
