use crate::core::mapper::BeerMapper;
use crate::domain::model::{Beer, BeerDto, StockLimits};
use crate::domain::ports::BeerRepository;
use crate::utils::error::{BeerStockError, Result};

/// Registration, lookup and stock movements for beers held in a
/// [`BeerRepository`]. Names are unique; the service checks this before
/// every create.
pub struct BeerService<R: BeerRepository> {
    repository: R,
    mapper: BeerMapper,
    limits: StockLimits,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_limits(repository, StockLimits::default())
    }

    pub fn with_limits(repository: R, limits: StockLimits) -> Self {
        Self {
            repository,
            mapper: BeerMapper,
            limits,
        }
    }

    pub async fn create_beer(&self, dto: BeerDto) -> Result<BeerDto> {
        dto.validate_with(&self.limits)?;
        self.verify_if_is_already_registered(&dto.name).await?;
        if let Some(id) = dto.id {
            self.verify_if_id_is_free(id).await?;
        }

        let beer = self.mapper.to_model(dto);
        let saved = self.repository.save(beer).await?;
        tracing::info!("🍺 Registered beer '{}' (id {:?})", saved.name, saved.id);

        Ok(self.mapper.to_dto(saved))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<BeerDto> {
        tracing::debug!("Looking up beer by name: {}", name);
        let found = self
            .repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| BeerStockError::NotFound {
                name: name.to_string(),
            })?;

        Ok(self.mapper.to_dto(found))
    }

    pub async fn list_all(&self) -> Result<Vec<BeerDto>> {
        let mut beers = self.repository.find_all().await?;
        beers.sort_by_key(|beer| beer.id);
        tracing::debug!("Listing {} beers", beers.len());

        Ok(beers
            .into_iter()
            .map(|beer| self.mapper.to_dto(beer))
            .collect())
    }

    pub async fn delete_by_id(&self, id: u64) -> Result<()> {
        self.verify_if_exists(id).await?;
        self.repository.delete_by_id(id).await?;
        tracing::info!("🗑️ Deleted beer with id {}", id);
        Ok(())
    }

    /// Adds `amount` to the stock. Fails without touching the record when the
    /// result would pass the beer's `max`.
    pub async fn increment(&self, id: u64, amount: u32) -> Result<BeerDto> {
        let mut beer = self.verify_if_exists(id).await?;

        let after = beer
            .quantity
            .checked_add(amount)
            .filter(|quantity| *quantity <= beer.max)
            .ok_or_else(|| {
                tracing::warn!(
                    "Increment of {} rejected for beer {}: stock {}/{}",
                    amount,
                    id,
                    beer.quantity,
                    beer.max
                );
                BeerStockError::StockExceeded {
                    id,
                    quantity: amount,
                }
            })?;

        beer.quantity = after;
        self.store_quantity_change(beer).await
    }

    /// Removes `amount` from the stock. Fails without touching the record when
    /// the stock would go below zero.
    pub async fn decrement(&self, id: u64, amount: u32) -> Result<BeerDto> {
        let mut beer = self.verify_if_exists(id).await?;

        let after = beer.quantity.checked_sub(amount).ok_or_else(|| {
            tracing::warn!(
                "Decrement of {} rejected for beer {}: only {} in stock",
                amount,
                id,
                beer.quantity
            );
            BeerStockError::StockExceeded {
                id,
                quantity: amount,
            }
        })?;

        beer.quantity = after;
        self.store_quantity_change(beer).await
    }

    async fn store_quantity_change(&self, beer: Beer) -> Result<BeerDto> {
        let saved = self.repository.save(beer).await?;
        tracing::info!(
            "📦 Stock of '{}' is now {}/{}",
            saved.name,
            saved.quantity,
            saved.max
        );
        Ok(self.mapper.to_dto(saved))
    }

    async fn verify_if_is_already_registered(&self, name: &str) -> Result<()> {
        if self.repository.find_by_name(name).await?.is_some() {
            tracing::warn!("Beer '{}' is already registered", name);
            return Err(BeerStockError::AlreadyRegistered {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    async fn verify_if_id_is_free(&self, id: u64) -> Result<()> {
        if let Some(existing) = self.repository.find_by_id(id).await? {
            tracing::warn!("Beer id {} is already taken by '{}'", id, existing.name);
            return Err(BeerStockError::IdAlreadyTaken {
                id,
                existing: existing.name,
            });
        }
        Ok(())
    }

    async fn verify_if_exists(&self, id: u64) -> Result<Beer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BeerStockError::NotFoundById { id })
    }
}
