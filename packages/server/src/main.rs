use std::sync::Arc;

use anyhow::Context;
use common::CatalogSet;
use common::catalog::Domain;
use common::media::MediaStore;
use tracing::info;

use server::config::AppConfig;
use server::generation::HttpGenerator;
use server::state::AppState;
use server::uploads::UploadStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let catalogs = CatalogSet::load();
    info!(
        home_goods = catalogs.get(Domain::HomeGoods).product_count(),
        fashion = catalogs.get(Domain::Fashion).product_count(),
        "Catalogs loaded"
    );

    let state = AppState {
        catalogs: Arc::new(catalogs),
        uploads: Arc::new(UploadStore::new()),
        media: Arc::new(MediaStore::new()),
        generator: Arc::new(HttpGenerator::new(config.generation.clone())),
        config: config.clone(),
    };

    let app = server::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
