//! Pricewatch - product alert demonstration.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricewatch::{open_store, run, Args};
use pricewatch_core::StdoutSink;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Notices go to stdout, diagnostics to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricewatch=info,pricewatch_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        store = ?config.store,
        clear_on_exit = config.clear_on_exit,
        "starting pricewatch demo"
    );

    let store = open_store(&config).map_err(|e| {
        tracing::error!(error = %e, "failed to open store");
        e
    })?;

    if let Err(e) = run(&store, &config, Arc::new(StdoutSink)) {
        tracing::error!(error = %e, "demo failed");
        return Err(e.into());
    }

    Ok(())
}
