use anyhow::Result;
use clap::Parser;
use game_core::select_target_index;
use runtime::ledger::DATE_FORMAT;

use super::resolve_date;

/// Print the target index chosen for a pack, date, and corpus size
#[derive(Parser, Debug)]
pub struct Select {
    /// Pack identifier
    #[arg(long)]
    pack: String,

    /// Puzzle date (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,

    /// Number of lines in the flattened corpus
    #[arg(long)]
    corpus_len: usize,
}

impl Select {
    pub fn execute(self) -> Result<()> {
        let date = resolve_date(self.date.as_deref())?
            .format(DATE_FORMAT)
            .to_string();
        let index = select_target_index(&self.pack, &date, self.corpus_len);
        println!("{index}");
        Ok(())
    }
}
