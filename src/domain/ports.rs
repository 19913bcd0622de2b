use crate::domain::model::Beer;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Persistence port for beers. `save` inserts or replaces by id and assigns
/// a fresh id when the beer has none.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Beer>>;
    async fn find_all(&self) -> Result<Vec<Beer>>;
    async fn save(&self, beer: Beer) -> Result<Beer>;
    async fn delete_by_id(&self, id: u64) -> Result<()>;
}
