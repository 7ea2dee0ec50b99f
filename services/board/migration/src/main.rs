use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(jobboard_board_migration::Migrator).await;
}
