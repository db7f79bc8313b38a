mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use weather_insights_core::{
    AppConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_PAGE, DEFAULT_HOST, DEFAULT_PORT,
};

#[derive(Parser)]
#[command(name = "weather-insights")]
#[command(about = "Current weather, weekly summaries and history backed by OpenWeatherMap", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
        host: String,
    },
    /// Print current weather for a city
    Current { city: String },
    /// Print the 7-day temperature summary for a city
    Summary { city: String },
    /// Print one page of recorded observations for a city
    History {
        city: String,
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_PAGE)]
        page: u32,
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, &host, port).await,
        Commands::Current { city } => commands::query::current(&config, &city).await,
        Commands::Summary { city } => commands::query::summary(&config, &city).await,
        Commands::History { city, page, limit } => {
            commands::query::history(&config, &city, page, limit).await
        },
    }
}
