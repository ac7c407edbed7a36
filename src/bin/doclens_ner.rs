//! Entity extraction HTTP entrypoint.
//!
//! Serves `/api/ner`, `/api/ner-bulk`, and `/api/health` for front ends that highlight people,
//! places, organizations, and dates in page text. Shares configuration and logging setup with
//! the document service binary.
use anyhow::{Context, Result};
use clap::Parser;
use doclens::entities::{EntityApi, EntityService};
use doclens::{api, config, logging, server};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "doclens-ner", about = "Named entity extraction service")]
struct Cli {
    /// Port to listen on; overrides DOCLENS_NER_PORT.
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::init_config().context("failed to load configuration")?;
    logging::init_tracing("doclens-ner", config.log_file.as_deref());
    logging::log_config(config);

    let service = EntityService::default();
    tracing::info!(model = %service.model_name(), "Entity recognizer ready");
    let app = api::ner::create_ner_router(Arc::new(service));

    let port = cli.port.or(config.ner_server_port);
    let (listener, port) = server::bind_listener(port, server::NER_PORT_RANGE)
        .await
        .context("failed to bind listener")?;
    tracing::info!("Listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app)
        .await
        .context("entity server terminated unexpectedly")?;
    Ok(())
}

