//! Integration tests for the in-memory repository behind the trait object.

use std::sync::Arc;

use place_catalog::catalog::{MemoryRepository, PlaceRepository, RepositoryError};
use place_catalog::models::{Category, GeoPoint, Place, PlaceId, PlaceStatus};

fn place(name: &str, category: Category, creator: &str, lat: f64, lon: f64) -> Place {
    Place::new(name, category, GeoPoint::new(lat, lon).unwrap(), creator)
}

fn sample_places() -> Vec<Place> {
    vec![
        place("loc1", Category::Restaurant, "ana", 4.5339, -75.6811),
        place("loc2", Category::Cafe, "ana", 4.5315, -75.6804),
        place("loc3", Category::Bar, "carlos", 4.5360, -75.6790),
        place("loc4", Category::Cafe, "carlos", 4.5400, -75.6850),
        place("loc5", Category::Park, "ana", 4.5510, -75.6820),
    ]
}

async fn seeded_repo() -> Arc<dyn PlaceRepository> {
    let repo: Arc<dyn PlaceRepository> = Arc::new(MemoryRepository::new());
    for p in sample_places() {
        repo.create(p).await.unwrap();
    }
    repo
}

#[tokio::test]
async fn test_full_crud_flow() {
    let repo = seeded_repo().await;
    assert_eq!(repo.count().await.unwrap(), 5);

    let loc3 = repo.find_by_name_contains("loc3").await.unwrap().remove(0);
    assert_eq!(loc3.status, PlaceStatus::Pending);

    repo.update_status(loc3.id, PlaceStatus::Authorized)
        .await
        .unwrap();
    let mut updated = repo.find_by_id(loc3.id).await.unwrap().unwrap();
    assert_eq!(updated.status, PlaceStatus::Authorized);

    updated.description = "Rooftop bar".to_string();
    repo.update(loc3.id, updated).await.unwrap();
    let fetched = repo.find_by_id(loc3.id).await.unwrap().unwrap();
    assert_eq!(fetched.description, "Rooftop bar");
    // Wholesale update keeps status and position
    assert_eq!(fetched.status, PlaceStatus::Authorized);

    repo.delete(loc3.id).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 4);
    assert!(repo.find_by_id(loc3.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_mutations_on_missing_ids_report_not_found() {
    let repo = seeded_repo().await;
    let ghost = PlaceId::generate();

    let err = repo.delete(ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = repo
        .update_status(ghost, PlaceStatus::Rejected)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = repo
        .update(ghost, place("ghost", Category::Other, "ana", 0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_find_by_creator_keeps_insertion_order() {
    let repo = seeded_repo().await;
    let anas = repo.find_by_creator("ana").await.unwrap();
    let names: Vec<&str> = anas.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["loc1", "loc2", "loc5"]);
}

#[tokio::test]
async fn test_find_by_category() {
    let repo = seeded_repo().await;
    let cafes = repo.find_by_category(Category::Cafe).await.unwrap();
    let names: Vec<&str> = cafes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["loc2", "loc4"]);
}

#[tokio::test]
async fn test_radius_keeps_near_drops_far() {
    let repo = seeded_repo().await;
    let center = GeoPoint::new(4.5339, -75.6811).unwrap();

    let nearby = repo.find_within_radius(center, 0.3).await.unwrap();
    let names: Vec<&str> = nearby.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"loc2"), "loc2 is ~0.27 km away: {:?}", names);
    assert!(!names.contains(&"loc5"), "loc5 is ~1.9 km away: {:?}", names);
}

#[tokio::test]
async fn test_widening_radius_is_monotonic() {
    let repo = seeded_repo().await;
    let center = GeoPoint::new(4.5339, -75.6811).unwrap();

    let mut previous = 0;
    for radius in [0.1, 0.3, 1.0, 5.0] {
        let hits = repo.find_within_radius(center, radius).await.unwrap();
        assert!(hits.len() >= previous);
        previous = hits.len();
    }
    assert_eq!(previous, 5);
}

#[tokio::test]
async fn test_queries_do_not_mutate() {
    let repo = seeded_repo().await;
    let before = repo.list_all().await.unwrap();

    repo.find_by_name_contains("LOC").await.unwrap();
    repo.find_by_category(Category::Park).await.unwrap();
    repo.find_within_radius(GeoPoint::new(0.0, 0.0).unwrap(), 100.0)
        .await
        .unwrap();

    let after = repo.list_all().await.unwrap();
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a.id, b.id);
    }
}

#[tokio::test]
async fn test_concurrent_status_updates_serialize() {
    let repo = seeded_repo().await;
    let target = repo.find_by_name_contains("loc1").await.unwrap().remove(0);

    let mut handles = Vec::new();
    for i in 0..20 {
        let repo = Arc::clone(&repo);
        let id = target.id;
        handles.push(tokio::spawn(async move {
            let status = if i % 2 == 0 {
                PlaceStatus::Authorized
            } else {
                PlaceStatus::Rejected
            };
            repo.update_status(id, status).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // The record survives with one of the contended values and the rest of
    // the catalog is untouched.
    let final_place = repo.find_by_id(target.id).await.unwrap().unwrap();
    assert_ne!(final_place.status, PlaceStatus::Pending);
    assert_eq!(repo.count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_caller_copies_do_not_alias_storage() {
    let repo = seeded_repo().await;
    let mut copy = repo.find_by_name_contains("loc1").await.unwrap().remove(0);

    copy.name = "hijacked".to_string();

    let stored = repo.find_by_id(copy.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "loc1");
}
