use std::io::Write;
use std::time::Duration;

use clap::Args;
use classkit_core::{Clock, Config, Ticker, ValidationError, TIMEZONES};

use super::CommandResult;

#[derive(Args)]
pub struct ClockArgs {
    /// IANA timezone (see `classkit timezones`); defaults to clock.timezone
    #[arg(long, short)]
    timezone: Option<String>,
    /// Print a single line and exit
    #[arg(long)]
    once: bool,
}

pub fn run(args: ClockArgs) -> CommandResult {
    let config = Config::load_or_default();
    let name = args.timezone.unwrap_or(config.clock.timezone);
    let clock =
        Clock::with_timezone(&name).ok_or(ValidationError::UnsupportedTimezone(name.clone()))?;

    if args.once {
        println!("{}", clock.now_line());
        return Ok(());
    }

    println!("{}", clock.timezone().label);
    print_line(&clock);
    super::runtime()?.block_on(async move {
        let ticking = clock.clone();
        let _handle = Ticker::start(Duration::from_secs(1), move || print_line(&ticking));
        tokio::signal::ctrl_c().await
    })?;
    println!();
    Ok(())
}

fn print_line(clock: &Clock) {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "\r{}", clock.now_line());
    let _ = stdout.flush();
}

pub fn list_timezones() -> CommandResult {
    let current = Config::load_or_default().clock.timezone;
    for option in TIMEZONES.iter() {
        let marker = if option.id() == current { "*" } else { " " };
        println!("{marker} {:<20} {}", option.id(), option.label);
    }
    Ok(())
}
