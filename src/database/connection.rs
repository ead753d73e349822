use crate::config::DatabaseConfig;
use crate::error::AppResult;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let conn = Database::connect(options).await?;
    Ok(conn)
}

pub async fn run_migrations(conn: &DatabaseConnection) -> AppResult<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}
