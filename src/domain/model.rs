use crate::utils::error::Result;
use crate::utils::validation::{
    validate_max_length, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

pub const MAX_TEXT_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

/// Stored entity. `id` is `None` until a repository has saved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: Option<u64>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Boundary-facing representation of a [`Beer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Upper bounds applied when a beer is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockLimits {
    /// Largest `max` a beer may declare.
    pub max_stock: u32,
    /// Largest quantity a beer may be registered with.
    pub max_initial_quantity: u32,
}

impl Default for StockLimits {
    fn default() -> Self {
        Self {
            max_stock: 500,
            max_initial_quantity: 100,
        }
    }
}

impl BeerDto {
    pub fn validate_with(&self, limits: &StockLimits) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_max_length("name", &self.name, MAX_TEXT_LENGTH)?;
        validate_non_empty_string("brand", &self.brand)?;
        validate_max_length("brand", &self.brand, MAX_TEXT_LENGTH)?;
        validate_range("max", self.max, 1, limits.max_stock)?;
        validate_range(
            "quantity",
            self.quantity,
            0,
            limits.max_initial_quantity.min(self.max),
        )?;
        Ok(())
    }
}

impl Validate for BeerDto {
    fn validate(&self) -> Result<()> {
        self.validate_with(&StockLimits::default())
    }
}
