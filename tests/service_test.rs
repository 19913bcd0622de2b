use beer_stock::{
    BeerDto, BeerMapper, BeerService, BeerStockError, BeerType, InMemoryBeerRepository,
};

fn beer_dto() -> BeerDto {
    BeerDto {
        id: Some(1),
        name: "Brahma".to_string(),
        brand: "Ambev".to_string(),
        max: 50,
        quantity: 10,
        beer_type: BeerType::Lager,
    }
}

#[tokio::test]
async fn test_beer_informed_is_created() {
    let service = BeerService::new(InMemoryBeerRepository::new());
    let expected = beer_dto();

    let created = service.create_beer(expected.clone()).await.unwrap();

    assert_eq!(created.id, expected.id);
    assert_eq!(created.name, expected.name);
    assert_eq!(created.quantity, expected.quantity);
}

#[tokio::test]
async fn test_already_registered_beer_is_rejected() {
    let duplicated = BeerMapper.to_model(beer_dto());
    let service = BeerService::new(InMemoryBeerRepository::with_beers(vec![duplicated]));

    let result = service.create_beer(beer_dto()).await;

    assert!(matches!(result, Err(BeerStockError::AlreadyRegistered { .. })));
}

#[tokio::test]
async fn test_valid_name_returns_beer() {
    let stored = BeerMapper.to_model(beer_dto());
    let service = BeerService::new(InMemoryBeerRepository::with_beers(vec![stored]));

    let found = service.find_by_name("Brahma").await.unwrap();

    assert_eq!(found, beer_dto());
}

#[tokio::test]
async fn test_unregistered_name_is_not_found() {
    let service = BeerService::new(InMemoryBeerRepository::new());

    let result = service.find_by_name("Brahma").await;

    match result {
        Err(err @ BeerStockError::NotFound { .. }) => {
            assert_eq!(err.to_string(), "Beer with name Brahma not found in the system.");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_taken_id_does_not_replace_existing_beer() {
    let service = BeerService::new(InMemoryBeerRepository::new());
    service.create_beer(beer_dto()).await.unwrap();

    let result = service
        .create_beer(BeerDto {
            name: "Heineken".to_string(),
            brand: "Heineken".to_string(),
            ..beer_dto()
        })
        .await;

    assert!(matches!(
        result,
        Err(BeerStockError::IdAlreadyTaken { id: 1, .. })
    ));
    assert_eq!(service.find_by_name("Brahma").await.unwrap(), beer_dto());
    let all = service.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(matches!(
        service.find_by_name("Heineken").await,
        Err(BeerStockError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_ids_stay_unique_with_mixed_explicit_and_assigned() {
    let service = BeerService::new(InMemoryBeerRepository::new());
    service
        .create_beer(BeerDto {
            id: Some(3),
            ..beer_dto()
        })
        .await
        .unwrap();

    let assigned = service
        .create_beer(BeerDto {
            id: None,
            name: "Skol".to_string(),
            ..beer_dto()
        })
        .await
        .unwrap();

    assert_eq!(assigned.id, Some(4));
    let ids: Vec<_> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|dto| dto.id)
        .collect();
    assert_eq!(ids, vec![Some(3), Some(4)]);
}
