//! In-memory beer repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::model::Beer;
use crate::domain::ports::BeerRepository;
use crate::utils::error::Result;

/// Repository backed by a map keyed on id. Data does not outlive the process
/// unless wrapped by [`super::file::JsonFileBeerRepository`].
#[derive(Debug, Default)]
pub struct InMemoryBeerRepository {
    beers: RwLock<BTreeMap<u64, Beer>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository. Beers without an id get one assigned in order.
    pub fn with_beers(beers: impl IntoIterator<Item = Beer>) -> Self {
        let mut map = BTreeMap::new();
        for mut beer in beers {
            let id = beer.id.unwrap_or_else(|| next_id(&map));
            beer.id = Some(id);
            map.insert(id, beer);
        }
        Self {
            beers: RwLock::new(map),
        }
    }

    pub async fn snapshot(&self) -> Vec<Beer> {
        self.beers.read().await.values().cloned().collect()
    }

    /// Replaces the whole content with a previous [`snapshot`](Self::snapshot).
    pub async fn restore(&self, beers: Vec<Beer>) {
        let restored: BTreeMap<u64, Beer> = beers
            .into_iter()
            .filter_map(|beer| beer.id.map(|id| (id, beer)))
            .collect();
        *self.beers.write().await = restored;
    }
}

fn next_id(beers: &BTreeMap<u64, Beer>) -> u64 {
    beers.keys().next_back().map_or(1, |last| last + 1)
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.values().find(|beer| beer.name == name).cloned())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Beer>> {
        Ok(self.beers.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Beer>> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, mut beer: Beer) -> Result<Beer> {
        let mut beers = self.beers.write().await;
        let id = beer.id.unwrap_or_else(|| next_id(&beers));
        beer.id = Some(id);
        beers.insert(id, beer.clone());
        Ok(beer)
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        self.beers.write().await.remove(&id);
        Ok(())
    }
}
