//! Document store HTTP entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use doclens::{analysis, api, config, logging, server};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "doclens",
    about = "Document store and cross-document relationship engine"
)]
struct Cli {
    /// Port to listen on; overrides DOCLENS_PORT.
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::init_config().context("failed to load configuration")?;
    logging::init_tracing("doclens", config.log_file.as_deref());
    logging::log_config(config);

    let service = analysis::DocumentService::new(analysis::AnalysisSettings::from(config));
    let app = api::create_router(Arc::new(service));

    let port = cli.port.or(config.doc_server_port);
    let (listener, port) = server::bind_listener(port, server::DOC_PORT_RANGE)
        .await
        .context("failed to bind listener")?;
    tracing::info!("Listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app)
        .await
        .context("document server terminated unexpectedly")?;
    Ok(())
}
