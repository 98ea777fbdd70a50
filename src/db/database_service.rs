use migration::{Migrator, MigratorTrait};
use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector,
};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    /// Connects and brings the schema up to date.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = if uri.starts_with("sqlite:") {
            Self::connect_sqlite(uri).await?
        } else {
            let mut options = ConnectOptions::new(uri);
            options.sqlx_logging(false);
            Database::connect(options).await?
        };
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }

    /// An in-memory SQLite database lives and dies with its connection, so the
    /// pool holds exactly one and never recycles it.
    async fn connect_sqlite(uri: &str) -> Result<DatabaseConnection, DbErr> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(None)
            .idle_timeout(None)
            .connect(uri)
            .await
            .map_err(|e| DbErr::Conn(RuntimeErr::Internal(e.to_string())))?;
        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Drops every table and re-applies all migrations.
    pub async fn reset(&self) -> Result<(), DbErr> {
        info!("Resetting database schema.");
        Migrator::refresh(&self.db).await
    }
}
