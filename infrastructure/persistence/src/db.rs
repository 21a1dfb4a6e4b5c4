use sqlx::{
    SqlitePool,
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// Schema migrations embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error: {0}")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
    #[error("database.directory_error: {0}")]
    DirectoryError(#[source] std::io::Error),
    #[error("database.seed_error: {0}")]
    SeedError(#[source] sqlx::Error),
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// One database file per deployment environment: `<dir>/<environment>.db`
    pub fn for_environment(dir: impl AsRef<Path>, environment: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{environment}.db")))
    }
}

/// Creates a SQLite connection pool, creating the file and its directory if missing
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(DatabaseError::DirectoryError)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Creates an isolated in-memory database with the schema applied.
///
/// The pool holds a single connection that is never recycled, since the
/// database disappears with its last connection.
pub async fn create_in_memory_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(DatabaseError::ConnectionError)?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Runs the embedded schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)
}
