use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use slq::board::{render_departures, render_stations};
use slq::domain::{TransportPatterns, TransportType, minutes_until};
use slq::query::{DepartureFilter, SlClient};
use slq::sl::{MockTransport, SlConfig, Transport};

const AFTER_HELP: &str = "\
Examples:
    slq search \"Central\"
    slq departures \"T-Centralen\"
    slq departures 9001 --line 14
    slq departures \"T-Centralen\" --transport-type metro
    slq departures \"Odenplan\" --destination \"Airport\" --count 20

Environment:
    SLQ_BASE_URL      Override the API base URL
    SLQ_TIMEOUT_SECS  Request timeout in seconds (default: 30)
    RUST_LOG          Log filter, e.g. slq=debug (logs go to stderr)";

#[derive(Parser)]
#[command(name = "slq")]
#[command(about = "Query Storstockholms Lokaltrafik (SL)", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Serve responses from sites.json and <site id>.json in this directory
    #[arg(long, global = true, value_name = "DIR")]
    mock_data: Option<PathBuf>,

    /// JSON file mapping transport types to group-name patterns
    #[arg(long, global = true, value_name = "FILE")]
    patterns: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find station names and IDs (prints one "name<TAB>id" line per match)
    Search {
        /// Search query for station names
        query: String,
    },
    /// Show upcoming departures for a station
    Departures {
        /// Station name or site ID
        station: String,

        /// Filter by line number (e.g. "14", or "28" to include variants like "28X")
        #[arg(short, long)]
        line: Option<String>,

        /// Filter by transport type: metro, bus, train, tram
        #[arg(short = 't', long)]
        transport_type: Option<TransportType>,

        /// Number of departures to show
        #[arg(
            short = 'c',
            long,
            default_value_t = 10,
            value_parser = clap::value_parser!(u8).range(1..=100)
        )]
        count: u8,

        /// Filter by destination name or ID
        #[arg(short = 'd', long)]
        destination: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SlConfig::from_env();

    let patterns = match &cli.patterns {
        Some(path) => TransportPatterns::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TransportPatterns::default(),
    };

    match &cli.mock_data {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "using mock data");
            let transport = MockTransport::from_dir(dir, &config)
                .with_context(|| format!("loading mock data from {}", dir.display()))?;
            run(SlClient::new(transport, config).with_patterns(patterns), cli.command).await
        }
        None => {
            let client = SlClient::http(config).context("creating HTTP client")?;
            run(client.with_patterns(patterns), cli.command).await
        }
    }
}

async fn run<T: Transport>(client: SlClient<T>, command: Commands) -> Result<()> {
    match command {
        Commands::Search { query } => {
            let stations = client.search_stations(&query).await?;
            print!("{}", render_stations(&stations));
        }
        Commands::Departures {
            station,
            line,
            transport_type,
            count,
            destination,
        } => {
            let filter = DepartureFilter {
                line,
                transport: transport_type,
                destination,
            };
            let departures = client
                .get_departures(&station, &filter)
                .await
                .context("failed to get departures")?;
            print!(
                "{}",
                render_departures(
                    &station,
                    &filter,
                    &departures,
                    usize::from(count),
                    minutes_until
                )
            );
        }
    }
    Ok(())
}
