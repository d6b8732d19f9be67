use std::{net::SocketAddr, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::StatusCode,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trx_service::{
    AppState, build_router, graceful_shutdown, stores::InMemoryTransactionStore,
};

/// The JSON API server for recording transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// How long to wait for a request to complete, in seconds, before giving up.
    #[arg(long, default_value_t = 30)]
    read_timeout_secs: u64,

    /// The log filter used when the `RUST_LOG` environment variable is not set.
    #[arg(long, default_value = "debug")]
    log_filter: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_filter);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let state = AppState::new(InMemoryTransactionStore::with_seed_data());

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state)).layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(args.read_timeout_secs),
    ));

    tracing::info!("server running on port {}", args.port);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("failed to start server, due: {error}");
        std::process::exit(1);
    }
}

/// Write logs as JSON lines to stdout.
///
/// The `RUST_LOG` environment variable takes precedence over `default_filter`.
fn setup_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
