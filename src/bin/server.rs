use clap::Parser;
use quiet_systems::{
    alerts::AlertRegistry,
    api::{ApiState, spawn_api_server},
    config::Config,
    payments::PaymentProcessor,
    sheets::SheetsClient,
};
use tracing::{info, level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Environment file to load before reading configuration
    #[arg(short, long)]
    env_file: Option<String>,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("quiet_systems", LevelFilter::TRACE),
        ("qs_server", LevelFilter::TRACE),
        ("tower_http", LevelFilter::DEBUG),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    match &args.env_file {
        Some(path) => {
            dotenv::from_path(path)?;
        }
        None => {
            dotenv::dotenv().ok();
        }
    }

    let config = Config::from_env();
    info!("quiet-systems v{} starting", config.version);

    // Collaborators are built once and injected; handlers never
    // construct their own clients.
    let sheets = SheetsClient::new(&config);
    let payments = PaymentProcessor::new(&config);
    let alerts = AlertRegistry::new();

    let state = ApiState::new(config, sheets, payments, alerts);
    let addr = spawn_api_server(state).await?;

    info!("dashboard: http://{addr}/dashboard");
    info!("API: http://{addr}/api");
    info!("health: http://{addr}/health");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    Ok(())
}
