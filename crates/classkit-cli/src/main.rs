use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logger;

#[derive(Parser)]
#[command(name = "classkit", version, about = "Classroom toolbox: clock, countdown, lottery and grouping")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current time in a timezone
    Clock(commands::clock::ClockArgs),
    /// List selectable timezones
    Timezones,
    /// Run a countdown and ring the alarm when it ends
    Countdown(commands::countdown::CountdownArgs),
    /// Draw random entries without replacement
    Draw(commands::draw::DrawArgs),
    /// Split participants into random groups
    Group(commands::group::GroupArgs),
    /// Interactive session keeping lottery and grouping state in memory
    Session,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Clock(args) => commands::clock::run(args),
        Commands::Timezones => commands::clock::list_timezones(),
        Commands::Countdown(args) => commands::countdown::run(args),
        Commands::Draw(args) => commands::draw::run(args),
        Commands::Group(args) => commands::group::run(args),
        Commands::Session => commands::session::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "classkit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
