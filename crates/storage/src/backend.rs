//! Unified storage backend with enum dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use weather_insights_core::{NewObservation, WeatherObservation};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::traits::{HistoryQuery, HistoryStore};

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <MemoryStorage as HistoryStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as HistoryStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(Arc<MemoryStorage>),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(Arc::new(MemoryStorage::new()))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Postgres when a URL is given, otherwise the in-process backend.
    pub async fn connect(database_url: Option<&str>) -> Result<Self, StorageError> {
        match database_url {
            #[cfg(feature = "postgres")]
            Some(url) => Self::new_postgres(url).await,
            #[cfg(not(feature = "postgres"))]
            Some(_) => Err(StorageError::Migration(
                "DATABASE_URL set but postgres support is not compiled in".to_owned(),
            )),
            None => {
                tracing::warn!("DATABASE_URL not set, weather history is kept in memory only");
                Ok(Self::new_memory())
            },
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl HistoryStore for StorageBackend {
    async fn insert(&self, obs: NewObservation) -> Result<WeatherObservation, StorageError> {
        dispatch!(self, insert(obs))
    }

    async fn find_by_city(
        &self,
        city: &str,
        query: HistoryQuery,
    ) -> Result<Vec<WeatherObservation>, StorageError> {
        dispatch!(self, find_by_city(city, query))
    }

    async fn count_by_city(&self, city: &str) -> Result<u64, StorageError> {
        dispatch!(self, count_by_city(city))
    }
}
