//! Beer repository persisted as a single JSON document.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::memory::InMemoryBeerRepository;
use crate::domain::model::Beer;
use crate::domain::ports::{BeerRepository, Storage};
use crate::utils::error::{BeerStockError, Result};

/// Keeps the stock in memory and rewrites the whole document under `key`
/// after every mutation. A missing document is an empty stock. When the
/// rewrite fails the in-memory stock is rolled back to what is on disk.
pub struct JsonFileBeerRepository<S: Storage> {
    storage: S,
    key: String,
    inner: InMemoryBeerRepository,
    write_lock: Mutex<()>,
}

impl<S: Storage> JsonFileBeerRepository<S> {
    pub async fn open(storage: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        let beers: Vec<Beer> = match storage.read_file(&key).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(BeerStockError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No stock file at '{}', starting empty", key);
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("Loaded {} beers from '{}'", beers.len(), key);

        Ok(Self {
            storage,
            key,
            inner: InMemoryBeerRepository::with_beers(beers),
            write_lock: Mutex::new(()),
        })
    }

    async fn persist_or_rollback(&self, before: Vec<Beer>) -> Result<()> {
        if let Err(e) = self.persist().await {
            tracing::warn!("Writing '{}' failed, rolling back: {}", self.key, e);
            self.inner.restore(before).await;
            return Err(e);
        }
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        let beers = self.inner.snapshot().await;
        let data = serde_json::to_vec_pretty(&beers)?;
        tracing::debug!("Writing {} beers ({} bytes) to '{}'", beers.len(), data.len(), self.key);
        self.storage.write_file(&self.key, &data).await
    }
}

#[async_trait]
impl<S: Storage> BeerRepository for JsonFileBeerRepository<S> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>> {
        self.inner.find_by_name(name).await
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Beer>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Beer>> {
        self.inner.find_all().await
    }

    async fn save(&self, beer: Beer) -> Result<Beer> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot().await;
        let saved = self.inner.save(beer).await?;
        self.persist_or_rollback(before).await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let before = self.inner.snapshot().await;
        self.inner.delete_by_id(id).await?;
        self.persist_or_rollback(before).await
    }
}
