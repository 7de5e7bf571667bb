use std::path::PathBuf;

use clap::Args;
use classkit_core::{read_label_file, Config, DrawSource, Entry, Event};

use super::CommandResult;

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct PoolArgs {
    /// Draw from the numbers 1..=N
    #[arg(long)]
    total: Option<u32>,
    /// Draw from a label list file (newline or comma separated)
    #[arg(long)]
    names: Option<PathBuf>,
}

impl PoolArgs {
    pub fn into_source(self) -> Result<DrawSource, Box<dyn std::error::Error>> {
        match (self.total, self.names) {
            (_, Some(path)) => Ok(DrawSource::Labels(read_label_file(path)?)),
            (Some(total), None) => Ok(DrawSource::Count(total)),
            (None, None) => Ok(DrawSource::Count(0)),
        }
    }
}

#[derive(Args)]
pub struct DrawArgs {
    #[command(flatten)]
    pool: PoolArgs,
    /// Entries per round
    #[arg(long, short, default_value_t = 1)]
    count: usize,
    /// Number of rounds to draw
    #[arg(long, short, default_value_t = 1)]
    rounds: usize,
    /// Print events as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: DrawArgs) -> CommandResult {
    let config = Config::load_or_default();
    let mut drawer = super::drawer(&config);

    let source = args.pool.into_source()?;
    let Some(initialized) = drawer.initialize(source) else {
        eprintln!("nothing to draw: the pool is empty");
        return Ok(());
    };

    let mut events = vec![initialized];
    for round in 1..=args.rounds {
        let Some(event) = drawer.draw(args.count) else {
            break;
        };
        if !args.json {
            println!("Round {round}: {}", join(drawer.last_batch()));
        }
        events.push(event);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        let drawn = events
            .iter()
            .filter(|e| matches!(e, Event::EntriesDrawn { .. }))
            .count();
        if drawn == 0 {
            eprintln!("nothing drawn: --count must be at least 1");
        }
        println!("Remaining: {} / {}", drawer.remaining(), drawer.total());
    }
    Ok(())
}

pub fn join(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(Entry::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
