//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpost_core::ports::{CategoryRepository, PostRepository};
use inkpost_infra::{InMemoryCategoryRepository, InMemoryPostRepository};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use inkpost_infra::{PostgresCategoryRepository, PostgresPostRepository};

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => match Self::postgres(db_config, config.auto_migrate).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!(
                        "Failed to initialize database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        state.seed_categories(&config.seed_categories).await;

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");
        state
    }

    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        let categories = InMemoryCategoryRepository::new();
        let posts = InMemoryPostRepository::new(&categories);

        Self {
            posts: Arc::new(posts),
            categories: Arc::new(categories),
            storage: Storage::Memory,
        }
    }

    #[cfg(feature = "postgres")]
    async fn postgres(
        db_config: &inkpost_infra::DatabaseConfig,
        auto_migrate: bool,
    ) -> Result<Self, migration::sea_orm::DbErr> {
        use migration::MigratorTrait;

        let conn = inkpost_infra::database::connect(db_config).await?;

        if auto_migrate {
            tracing::info!("Applying pending migrations");
            migration::Migrator::up(&conn, None).await?;
        }

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(conn)),
            storage: Storage::Postgres,
        })
    }

    /// Make sure every named category exists. Failures are logged, not fatal.
    pub async fn seed_categories(&self, names: &[String]) {
        for name in names {
            if let Err(e) = self.categories.ensure(name).await {
                tracing::error!(category = %name, "Failed to seed category: {}", e);
            }
        }
    }
}
