//! In-memory SQLite database with the board schema applied.

use jobboard_board_migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open a fresh in-memory database and run every migration.
///
/// The pool holds exactly one connection: each SQLite in-memory connection is
/// its own database, so a second connection would see empty tables.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("in-memory sqlite should open");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}
