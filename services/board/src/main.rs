use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait as _;
use tracing::info;

use jobboard_board::config::BoardConfig;
use jobboard_board::router::build_router;
use jobboard_board::state::AppState;
use jobboard_board_migration::Migrator;
use jobboard_core::config::Config as _;
use jobboard_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = BoardConfig::from_env().context("load board config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    if config.run_migrations {
        Migrator::up(&db, None).await.context("run migrations")?;
        info!("migrations applied");
    }

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.board_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("bind {http_addr}"))?;

    info!("board service listening on {http_addr}");
    axum::serve(listener, router).await.context("serve http")?;
    Ok(())
}
