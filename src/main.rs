use anyhow::Context;
use tracing_subscriber::EnvFilter;

use media_catalog::{
    api::{create_router, AppState},
    catalog::Catalog,
    config::Config,
    document,
    middleware::batch_id::BatchId,
    services,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let input = document::load_document(&config.catalog_path)
        .with_context(|| format!("Failed to load {}", config.catalog_path))?;
    let mut catalog = Catalog::new(input.catalog);

    if let Some(output_path) = &config.output_path {
        let outcomes = services::process_batch(&mut catalog, BatchId::new(), &input.commands);
        document::write_outcomes(output_path, &outcomes)
            .with_context(|| format!("Failed to write {}", output_path))?;
        return Ok(());
    }

    let app = create_router(AppState::new(catalog));

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Server running on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
