use credlio_risk::config::AppConfig;
use credlio_risk::http::routes::router;
use credlio_risk::service::risk_service::RiskService;
use credlio_risk::store::postgres::PgBorrowerStore;
use credlio_risk::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_max_connections)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let store = Arc::new(PgBorrowerStore::new(pool.clone()));
    let state = AppState {
        risk_service: RiskService::new(store),
        pool,
    };

    let app = router(state, cfg.internal_api_key.clone());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
