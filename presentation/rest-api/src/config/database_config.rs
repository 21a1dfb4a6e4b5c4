use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use persistence::product::seed::seed_if_empty;
use sqlx::SqlitePool;
use std::env;
use std::path::PathBuf;

/// Where the SQLite file lives and whether to seed it.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub environment: String,
    pub directory: PathBuf,
    pub seed: bool,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - APP_ENV: deployment environment, names the database file (default: "development")
    /// - DATABASE_DIR: directory holding the database files (default: "database")
    /// - SEED_DATABASE: seed sample products into an empty table (default: "false")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("APP_ENV").ok(),
            env::var("DATABASE_DIR").ok(),
            env::var("SEED_DATABASE").ok(),
        )
    }

    fn from_values(
        environment: Option<String>,
        directory: Option<String>,
        seed: Option<String>,
    ) -> Self {
        Self {
            environment: environment
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| "development".to_string()),
            directory: PathBuf::from(directory.unwrap_or_else(|| "database".to_string())),
            seed: seed.is_some_and(|value| {
                matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
            }),
        }
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::for_environment(&self.directory, &self.environment)
    }
}

/// Open the environment's database, apply the schema and optionally seed it
///
/// # Errors
/// Returns error if the file cannot be opened or the schema cannot be applied
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<SqlitePool> {
    let config = settings.database_config();
    let pool = create_sqlite_pool(&config).await?;
    run_migrations(&pool).await?;
    tracing::info!("Connected to the SQLite database at {}", config.path.display());

    if settings.seed {
        seed_if_empty(&pool).await?;
    }

    Ok(pool)
}
