pub mod mapper;
pub mod service;

pub use crate::domain::model::{Beer, BeerDto, BeerType, StockLimits};
pub use crate::domain::ports::{BeerRepository, Storage};
pub use crate::utils::error::Result;
