use serde::Deserialize;

use jobboard_core::config::Config;

/// Board service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Store connection URL (`postgres://...` or `sqlite://...`).
    pub database_url: String,
    /// TCP port for the HTTP server. Env var: `BOARD_PORT`.
    #[serde(default = "default_port")]
    pub board_port: u16,
    /// Apply pending migrations before serving. Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_port() -> u16 {
    3120
}

fn default_run_migrations() -> bool {
    true
}

impl Config for BoardConfig {}
