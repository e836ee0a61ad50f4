use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use ectopica_api::config::ServiceConfig;
use ectopica_api::router;
use ectopica_api::state::AppState;
use ectopica_cases::store::{AnyCaseStore, FileCaseStore, MemoryCaseStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;

    let store = match &config.data_dir {
        Some(dir) => {
            tracing::info!(data_dir = %dir.display(), "using file case store");
            AnyCaseStore::File(FileCaseStore::open(dir.clone()).await?)
        }
        None => {
            tracing::warn!("ECTOPICA_DATA_DIR not set, cases are kept in memory only");
            AnyCaseStore::Memory(MemoryCaseStore::new())
        }
    };

    let app = router(AppState::new(store, config.rate_limit));

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
