use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use switchwise_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::evaluate::{OutputOptions, View};

#[derive(Parser)]
#[command(name = "switchwise", version, about = "Health-plan switching windows and premium comparison")]
struct Cli {
    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which switching windows are open
    Windows(commands::evaluate::InputArgs),
    /// Compare the current plan with the cheapest alternatives
    Compare(commands::evaluate::InputArgs),
    /// List same-insurer plans in other coverage models
    Alternatives(commands::evaluate::InputArgs),
    /// Windows, comparison and alternatives in one report
    Evaluate(commands::evaluate::InputArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::load_or_default().log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let opts = OutputOptions {
        today: cli.today,
        json: cli.json,
    };
    let result = match cli.command {
        Commands::Windows(input) => commands::evaluate::run(View::Windows, input, opts),
        Commands::Compare(input) => commands::evaluate::run(View::Compare, input, opts),
        Commands::Alternatives(input) => commands::evaluate::run(View::Alternatives, input, opts),
        Commands::Evaluate(input) => commands::evaluate::run(View::All, input, opts),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
