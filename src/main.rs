use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// vitaplan - Weekly activity and daily meal planning
#[derive(Parser)]
#[command(name = "vitaplan")]
#[command(about = "Weekly activity and daily meal planning", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan seven days of physical activity
    Week(cli::week::WeekArgs),
    /// Plan breakfast, lunch and dinner for one day
    Meals(cli::meals::MealsArgs),
    /// Load and validate configuration, then print it
    CheckConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = vitaplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    vitaplan::observability::init_observability(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Week(args) => cli::week::run(config, args),
        Commands::Meals(args) => cli::meals::run(config, args),
        Commands::CheckConfig => {
            tracing::info!("Configuration is valid");
            cli::print(&config, cli::OutputFormat::Pretty)
        }
    }
}
