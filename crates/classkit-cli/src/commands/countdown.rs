use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Args;
use classkit_core::error::Result as CoreResult;
use classkit_core::timer::format_mm_ss;
use classkit_core::{
    Alarm, AlarmSink, AlarmSound, Config, Countdown, Event, Ticker, ValidationError,
};
use tokio::sync::mpsc;

use super::CommandResult;

#[derive(Args)]
pub struct CountdownArgs {
    #[arg(long, short, default_value_t = 0)]
    minutes: u64,
    #[arg(long, short, default_value_t = 0)]
    seconds: u64,
    /// Alarm volume between 0.0 and 1.0; defaults to alarm.volume
    #[arg(long)]
    volume: Option<f32>,
    /// Custom alarm sound file; defaults to alarm.custom_sound
    #[arg(long)]
    sound: Option<PathBuf>,
    /// Do not ring the alarm at the end
    #[arg(long)]
    quiet: bool,
}

/// Rings the terminal bell; custom sounds are announced by path.
struct TerminalBell;

impl AlarmSink for TerminalBell {
    fn play(&mut self, sound: &AlarmSound, volume: f32) -> CoreResult<()> {
        let mut stderr = std::io::stderr();
        match sound {
            AlarmSound::Beep { frequency_hz, .. } => {
                writeln!(stderr, "\u{7}beep ({frequency_hz} Hz, volume {:.0}%)", volume * 100.0)?
            }
            AlarmSound::Custom(path) => writeln!(
                stderr,
                "\u{7}playing {} (volume {:.0}%)",
                path.display(),
                volume * 100.0
            )?,
        }
        stderr.flush()?;
        Ok(())
    }
}

pub fn run(args: CountdownArgs) -> CommandResult {
    let config = Config::load_or_default();
    let mut settings = config.alarm_settings();
    if let Some(volume) = args.volume {
        if !(0.0..=1.0).contains(&volume) {
            return Err(ValidationError::InvalidValue {
                field: "volume".into(),
                message: format!("{volume} is outside 0.0..=1.0"),
            }
            .into());
        }
        settings.set_volume(volume);
    }
    if let Some(path) = args.sound {
        settings.sound = AlarmSound::Custom(path);
    }

    let mut countdown = Countdown::new();
    if countdown.start(args.minutes, args.seconds).is_none() {
        eprintln!("nothing to count down: set --minutes and/or --seconds");
        return Ok(());
    }
    print_remaining(countdown.remaining_secs());

    let countdown = Arc::new(Mutex::new(countdown));
    let runtime = super::runtime()?;
    let completed = runtime.block_on(async {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let shared = Arc::clone(&countdown);
        let handle = Ticker::start(Duration::from_secs(1), move || {
            let event = match shared.lock() {
                Ok(mut countdown) => countdown.tick(),
                Err(_) => None,
            };
            if let Some(event) = event {
                let _ = tx.send(event);
            }
        });

        loop {
            tokio::select! {
                event = rx.recv() => match event {
                    Some(Event::CountdownTick { remaining_secs, .. }) => print_remaining(remaining_secs),
                    Some(Event::CountdownCompleted { .. }) => {
                        handle.cancel();
                        print_remaining(0);
                        println!();
                        return true;
                    }
                    Some(_) => {}
                    None => return false,
                },
                _ = tokio::signal::ctrl_c() => {
                    handle.cancel();
                    tracing::info!("countdown interrupted");
                    if let Ok(mut countdown) = countdown.lock() {
                        countdown.stop();
                    }
                    println!();
                    println!("stopped");
                    return false;
                }
            }
        }
    });

    if completed && !args.quiet {
        let mut alarm = Alarm::new(settings);
        let played = runtime.block_on(alarm.ring(&mut TerminalBell))?;
        tracing::debug!(plays = played.len(), "alarm finished");
    }
    Ok(())
}

fn print_remaining(secs: u64) {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "\r{}", format_mm_ss(secs));
    let _ = stdout.flush();
}
