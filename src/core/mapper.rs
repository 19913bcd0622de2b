use crate::domain::model::{Beer, BeerDto};

/// Converts between the boundary [`BeerDto`] and the stored [`Beer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BeerMapper;

impl BeerMapper {
    pub fn to_model(&self, dto: BeerDto) -> Beer {
        Beer {
            id: dto.id,
            name: dto.name,
            brand: dto.brand,
            max: dto.max,
            quantity: dto.quantity,
            beer_type: dto.beer_type,
        }
    }

    pub fn to_dto(&self, beer: Beer) -> BeerDto {
        BeerDto {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BeerType;

    #[test]
    fn test_mapping_preserves_every_field() {
        let dto = BeerDto {
            id: Some(7),
            name: "Guinness".to_string(),
            brand: "Diageo".to_string(),
            max: 80,
            quantity: 12,
            beer_type: BeerType::Stout,
        };

        let beer = BeerMapper.to_model(dto.clone());
        assert_eq!(beer.id, Some(7));
        assert_eq!(beer.beer_type, BeerType::Stout);
        assert_eq!(BeerMapper.to_dto(beer), dto);
    }
}
