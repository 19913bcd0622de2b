pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::StockConfig;

pub use adapters::{InMemoryBeerRepository, JsonFileBeerRepository, LocalStorage};
pub use crate::core::{mapper::BeerMapper, service::BeerService};
pub use domain::model::{Beer, BeerDto, BeerType, StockLimits};
pub use domain::ports::{BeerRepository, Storage};
pub use utils::error::{BeerStockError, Result};
