//! dappnode Binary
//!
//! Runs the request loop against a rollup server.

use clap::Parser;
use dappnode::network::RollupClient;
use dappnode::{Config, Dispatcher};
use tracing_subscriber::{fmt, EnvFilter};

/// dappnode
#[derive(Parser, Debug)]
#[command(name = "dappnode")]
#[command(about = "Off-chain rollup node: upper-cases sentences and tracks their senders")]
#[command(version)]
struct Args {
    /// Rollup server base URL
    #[arg(short, long, env = "ROLLUP_HTTP_SERVER_URL", default_value = "http://127.0.0.1:5004")]
    rollup_server: String,

    /// Per-request timeout in milliseconds (0 = wait forever)
    #[arg(short = 't', long, default_value = "0")]
    timeout_ms: u64,

    /// Sleep between polls when no request is pending, in milliseconds (0 = busy poll)
    #[arg(short = 'b', long, default_value = "0")]
    idle_backoff_ms: u64,

    /// Stop after this many loop iterations
    #[arg(long)]
    max_iterations: Option<u64>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dappnode=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("dappnode v{}", dappnode::VERSION);
    tracing::info!("HTTP rollup_server url is {}", args.rollup_server);

    // Build config from args
    let mut builder = Config::builder()
        .rollup_server_url(&args.rollup_server)
        .request_timeout_ms(args.timeout_ms)
        .idle_backoff_ms(args.idle_backoff_ms);
    if let Some(max) = args.max_iterations {
        builder = builder.max_iterations(max);
    }
    let config = builder.build();

    let client = match RollupClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to create rollup client: {}", e);
            std::process::exit(1);
        }
    };

    let mut dispatcher = Dispatcher::new(config, client);
    if let Err(e) = dispatcher.run() {
        tracing::error!("Fatal: {}", e);
        std::process::exit(1);
    }

    let stats = dispatcher.stats();
    tracing::info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        idle_polls = stats.idle_polls,
        "Loop stopped"
    );
}
