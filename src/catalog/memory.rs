//! In-memory place repository with copy-on-write snapshots.
//!
//! The place list lives behind `RwLock<Arc<Vec<Place>>>`. Reads clone the
//! `Arc` under a short read lock and then work on an immutable snapshot, so
//! they never observe a half-applied mutation. Mutations build a fresh list
//! and swap it in under the write lock; that single lock is the entire
//! serialization story the catalog needs.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use super::repository::{PlaceRepository, RepositoryError, RepositoryResult};
use crate::models::{Category, GeoPoint, Place, PlaceId, PlaceStatus};

/// Attempts to resolve an id collision before giving up. With v4 UUIDs this
/// bound exists for correctness, not because it is ever expected to trip.
const MAX_ID_RETRIES: usize = 8;

/// In-memory repository backend.
#[derive(Default)]
pub struct MemoryRepository {
    places: RwLock<Arc<Vec<Place>>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with an initial place list.
    pub fn with_places(initial: Vec<Place>) -> Self {
        Self {
            places: RwLock::new(Arc::new(initial)),
        }
    }

    /// Atomic snapshot of the current place list.
    fn snapshot(&self) -> Arc<Vec<Place>> {
        Arc::clone(&self.places.read())
    }

    /// Replace the list produced by `mutate`, or keep the old one on `None`.
    fn swap_with<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&[Place]) -> Option<Vec<Place>>,
    {
        let mut guard = self.places.write();
        match mutate(&guard) {
            Some(next) => {
                *guard = Arc::new(next);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl PlaceRepository for MemoryRepository {
    async fn create(&self, mut place: Place) -> RepositoryResult<PlaceId> {
        let mut guard = self.places.write();

        let mut retries = 0;
        while guard.iter().any(|p| p.id == place.id) {
            retries += 1;
            if retries > MAX_ID_RETRIES {
                return Err(RepositoryError::Conflict {
                    message: "Could not generate a unique place id".to_string(),
                    context: super::repository::ErrorContext::new("create")
                        .with_entity_id(place.id),
                });
            }
            place.id = PlaceId::generate();
        }

        let id = place.id;
        let mut next = guard.as_ref().clone();
        next.push(place);
        *guard = Arc::new(next);

        log::debug!("Created place {}", id);
        Ok(id)
    }

    async fn update(&self, id: PlaceId, mut place: Place) -> RepositoryResult<()> {
        place.id = id;
        let replaced = self.swap_with(|current| {
            let index = current.iter().position(|p| p.id == id)?;
            let mut next = current.to_vec();
            next[index] = place;
            Some(next)
        });

        if replaced {
            Ok(())
        } else {
            Err(RepositoryError::place_not_found("update", id))
        }
    }

    async fn update_status(&self, id: PlaceId, status: PlaceStatus) -> RepositoryResult<()> {
        let replaced = self.swap_with(|current| {
            let index = current.iter().position(|p| p.id == id)?;
            let mut next = current.to_vec();
            next[index].status = status;
            Some(next)
        });

        if replaced {
            log::info!("Place {} status set to {:?}", id, status);
            Ok(())
        } else {
            Err(RepositoryError::place_not_found("update_status", id))
        }
    }

    async fn delete(&self, id: PlaceId) -> RepositoryResult<()> {
        let removed = self.swap_with(|current| {
            if !current.iter().any(|p| p.id == id) {
                return None;
            }
            Some(current.iter().filter(|p| p.id != id).cloned().collect())
        });

        if removed {
            Ok(())
        } else {
            Err(RepositoryError::place_not_found("delete", id))
        }
    }

    async fn find_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>> {
        Ok(self.snapshot().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_creator(&self, creator_id: &str) -> RepositoryResult<Vec<Place>> {
        Ok(self
            .snapshot()
            .iter()
            .filter(|p| p.creator_id == creator_id)
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category: Category) -> RepositoryResult<Vec<Place>> {
        Ok(self
            .snapshot()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_name_contains(&self, text: &str) -> RepositoryResult<Vec<Place>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let needle = text.to_lowercase();
        Ok(self
            .snapshot()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> RepositoryResult<Vec<Place>> {
        Ok(self
            .snapshot()
            .iter()
            .filter(|p| center.distance_km(&p.location) <= radius_km)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Place>> {
        Ok(self.snapshot().as_ref().clone())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.snapshot().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn place(name: &str, lat: f64, lon: f64) -> Place {
        Place::new(
            name,
            Category::Restaurant,
            GeoPoint::new(lat, lon).unwrap(),
            "tester",
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let repo = MemoryRepository::new();
        let id = repo.create(place("loc1", 4.53, -75.68)).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found.unwrap().name, "loc1");
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        let repo = MemoryRepository::new();
        let found = repo.find_by_id(PlaceId::generate()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insertion_order_is_stable() {
        let repo = MemoryRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(place(name, 4.53, -75.68)).await.unwrap();
        }
        let all = repo.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_name_search_is_case_insensitive() {
        let repo = MemoryRepository::new();
        repo.create(place("Café Colonial", 4.53, -75.68)).await.unwrap();

        let hits = repo.find_by_name_contains("colonial").await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_name_search_matches_nothing() {
        let repo = MemoryRepository::new();
        repo.create(place("anything", 4.53, -75.68)).await.unwrap();

        let hits = repo.find_by_name_contains("").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_update_status_and_not_found() {
        let repo = MemoryRepository::new();
        let id = repo.create(place("loc1", 4.53, -75.68)).await.unwrap();

        repo.update_status(id, PlaceStatus::Authorized).await.unwrap();
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.status, PlaceStatus::Authorized);

        let err = repo
            .update_status(PlaceId::generate(), PlaceStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let repo = MemoryRepository::new();
        let id1 = repo.create(place("first", 4.53, -75.68)).await.unwrap();
        let id2 = repo.create(place("second", 4.53, -75.68)).await.unwrap();

        repo.delete(id1).await.unwrap();
        assert!(repo.find_by_id(id1).await.unwrap().is_none());
        assert!(repo.find_by_id(id2).await.unwrap().is_some());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_radius_filter_is_boundary_inclusive() {
        let repo = MemoryRepository::new();
        let center = GeoPoint::new(4.5339, -75.6811).unwrap();
        repo.create(place("center", 4.5339, -75.6811)).await.unwrap();

        let hits = repo.find_within_radius(center, 0.0).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_radius_filter_near_and_far() {
        let repo = MemoryRepository::new();
        // loc2 is ~0.27 km from the reference point, loc5 ~1.9 km.
        repo.create(place("loc2", 4.5315, -75.6804)).await.unwrap();
        repo.create(place("loc5", 4.5510, -75.6820)).await.unwrap();

        let center = GeoPoint::new(4.5339, -75.6811).unwrap();
        let hits = repo.find_within_radius(center, 0.3).await.unwrap();
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["loc2"]);
    }

    #[tokio::test]
    async fn test_reads_see_consistent_snapshots_under_writes() {
        let repo = Arc::new(MemoryRepository::new());
        let writer = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for i in 0..50 {
                    repo.create(place(&format!("p{}", i), 4.53, -75.68))
                        .await
                        .unwrap();
                }
            })
        };
        let reader = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for _ in 0..50 {
                    // A snapshot is always a prefix of the insertion sequence,
                    // never a half-applied mutation.
                    let all = repo.list_all().await.unwrap();
                    for (i, p) in all.iter().enumerate() {
                        assert_eq!(p.name, format!("p{}", i));
                    }
                }
            })
        };
        writer.await.unwrap();
        reader.await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 50);
    }
}
