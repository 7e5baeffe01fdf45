use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kepler::{AppState, PlanetCatalog, Server, app, config::Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("kepler={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The catalog must be complete before the listener binds; a load failure
    // means the service never starts.
    let catalog = match PlanetCatalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let router = app::router(AppState::new(catalog, args.public_dir));

    info!("Starting server on {}...", args.listen);
    match Server::bind(args.listen).serve(router).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
