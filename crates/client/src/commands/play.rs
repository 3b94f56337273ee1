//! Interactive play loop over stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::ContentFactory;
use game_core::{Guess, GuessOutcome, share_row};
use runtime::ledger::DATE_FORMAT;
use runtime::{GameController, RuntimeConfig, SessionEvent, StartKind};
use tokio::sync::broadcast;

use super::{open_ledger, resolve_date};
use crate::render;

/// Play the puzzle for a pack and date
#[derive(Parser, Debug)]
pub struct Play {
    /// Pack identifier
    #[arg(long)]
    pack: String,

    /// Puzzle date (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,

    /// Directory with packs/, scripts/ and daily/
    #[arg(long, value_name = "DIR", default_value = "content")]
    content_dir: PathBuf,
}

impl Play {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let date = resolve_date(self.date.as_deref())?
            .format(DATE_FORMAT)
            .to_string();

        let factory = ContentFactory::new(&self.content_dir);
        let target = factory
            .resolve_target(&self.pack, &date)
            .with_context(|| format!("No puzzle for {} on {}", self.pack, date))?;
        let metadata = factory
            .load_daily(&self.pack, &date)
            .map(|daily| daily.metadata)
            .inspect_err(|e| tracing::debug!("No answer lists for {}: {:#}", self.pack, e))
            .ok();
        let manifest = factory
            .load_manifest(&self.pack)
            .inspect_err(|e| tracing::debug!("No manifest for {}: {:#}", self.pack, e))
            .ok();

        let ledger = open_ledger(config)?;
        let mut controller =
            GameController::start(ledger, &self.pack, &date, target, config.event_buffer_size)?;
        let mut events = controller.subscribe();

        println!("{} / {}", self.pack, date);
        match controller.start_kind() {
            StartKind::FirstStart => {}
            StartKind::Resume => println!(
                "Resuming: {} guesses left",
                controller.session().remaining_attempts()
            ),
            StartKind::Revisit => println!("Already played"),
        }

        let stdin = io::stdin();
        let mut input = stdin.lock().lines();

        while !controller.session().is_over {
            println!();
            print!("{}", render::puzzle(controller.target(), &controller.reveal()));
            println!(
                "Guess {} of 5 (type 'quit' to stop)",
                controller.session().attempt_count + 1
            );

            let session = controller.session();
            let movie = if session.movie_locked {
                println!("Movie: {} (locked)", controller.target().movie);
                String::new()
            } else {
                if let Some(choices) = metadata.as_ref().and_then(render::movie_choices) {
                    println!("Movies: {choices}");
                }
                match prompt(&mut input, "Movie")? {
                    Some(movie) => movie,
                    None => return Ok(()),
                }
            };
            let character = if session.character_locked {
                println!("Character: {} (locked)", controller.target().character);
                String::new()
            } else {
                let title = if session.movie_locked {
                    controller.target().movie.as_str()
                } else {
                    movie.as_str()
                };
                if let Some(choices) = metadata
                    .as_ref()
                    .and_then(|m| render::character_choices(m, title))
                {
                    println!("Characters: {choices}");
                }
                match prompt(&mut input, "Character")? {
                    Some(character) => character,
                    None => return Ok(()),
                }
            };

            let outcome = controller.submit(&Guess::new(movie, character));
            report_events(&mut events);
            if let GuessOutcome::Continue { .. } = outcome {
                println!("Not quite.");
            }
        }

        let session = controller.session();
        if let Some(tier) = controller.result_tier() {
            println!();
            print!("{}", render::puzzle(controller.target(), &controller.reveal()));
            println!();
            let message = manifest.as_ref().and_then(|m| m.tier_message(tier));
            print!("{}", render::summary(controller.target(), session, tier, message));
        }

        if session.is_win && !session.celebration_shown {
            println!("\n*** Congratulations! ***");
            controller.mark_celebration_shown();
            report_events(&mut events);
        }
        Ok(())
    }
}

/// Next trimmed line for `label`; `None` on end of input or `quit`.
fn prompt(
    input: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}> ");
    io::stdout().flush()?;

    let Some(line) = input.next().transpose()? else {
        return Ok(None);
    };
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return Ok(None);
    }
    Ok(Some(line.to_owned()))
}

fn report_events(events: &mut broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::GuessRecorded { record, .. } => println!("{}", share_row(&record)),
            SessionEvent::PersistFailed { reason } => {
                eprintln!("warning: progress not saved ({reason})")
            }
            _ => {}
        }
    }
}
