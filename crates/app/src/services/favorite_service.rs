//! Favorite service: linking users to planets and people.
//!
//! Favorites are created and removed by `(user, target)` pair. Existence of
//! the referenced user, planet or person is left to the store: with foreign
//! keys enforced a dangling reference surfaces as a conflict, otherwise it is
//! accepted as-is.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::favorite::{Favorite, FavoriteTarget, NewFavorite};
use holocron_domain::id::{FavoriteId, UserId};

use crate::ports::FavoriteRepository;

/// Application service for favorite operations.
pub struct FavoriteService<R> {
    repo: R,
}

impl<R: FavoriteRepository> FavoriteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Mark `favorite.target` as a favorite of `favorite.user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Conflict`] when the store rejects a dangling
    /// reference, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_favorite(&self, favorite: NewFavorite) -> Result<Favorite, HolocronError> {
        self.repo.create(favorite).await
    }

    /// Remove the favorite matching `(user_id, target)`.
    ///
    /// Only the first match is removed when duplicates exist.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when the pair has no favorite,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Favorite, HolocronError> {
        let not_found = || -> HolocronError {
            NotFoundError {
                entity: match target {
                    FavoriteTarget::Planet(_) => "Favorite planet",
                    FavoriteTarget::Person(_) => "Favorite person",
                },
                id: format!("user {user_id} / {} {}", target.label(), target_id(target)),
            }
            .into()
        };

        let favorite = self
            .repo
            .find_by_user_and_target(user_id, target)
            .await?
            .ok_or_else(not_found)?;

        if self.repo.delete(favorite.id).await? {
            Ok(favorite)
        } else {
            Err(not_found())
        }
    }

    /// Look up a favorite by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no favorite with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_favorite(&self, id: FavoriteId) -> Result<Favorite, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Favorite",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all favorites.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_favorites(&self) -> Result<Vec<Favorite>, HolocronError> {
        self.repo.get_all().await
    }

    /// List the favorites of one user. Unknown users simply have none.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_user_favorites(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Favorite>, HolocronError> {
        self.repo.find_by_user(user_id).await
    }
}

fn target_id(target: FavoriteTarget) -> i64 {
    match target {
        FavoriteTarget::Planet(id) => id.get(),
        FavoriteTarget::Person(id) => id.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_domain::id::{PersonId, PlanetId};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryFavoriteRepo {
        store: Mutex<Vec<Favorite>>,
        next_id: Mutex<i64>,
    }

    impl FavoriteRepository for InMemoryFavoriteRepo {
        fn create(
            &self,
            favorite: NewFavorite,
        ) -> impl Future<Output = Result<Favorite, HolocronError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let created = Favorite::from_draft(FavoriteId::try_from(*next_id).unwrap(), favorite);
            self.store.lock().unwrap().push(created.clone());
            async { Ok(created) }
        }

        fn get_by_id(
            &self,
            id: FavoriteId,
        ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send {
            let result = self.store.lock().unwrap().iter().find(|f| f.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send {
            let result = self.store.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn find_by_user(
            &self,
            user_id: UserId,
        ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send {
            let result: Vec<Favorite> = self
                .store
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.user_id == user_id)
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn find_by_user_and_target(
            &self,
            user_id: UserId,
            target: FavoriteTarget,
        ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send {
            let result = self
                .store
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.user_id == user_id && f.target == target)
                .cloned();
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: FavoriteId,
        ) -> impl Future<Output = Result<bool, HolocronError>> + Send {
            let mut store = self.store.lock().unwrap();
            let before = store.len();
            store.retain(|f| f.id != id);
            let removed = store.len() != before;
            async move { Ok(removed) }
        }
    }

    fn make_service() -> FavoriteService<InMemoryFavoriteRepo> {
        FavoriteService::new(InMemoryFavoriteRepo::default())
    }

    fn user(id: i64) -> UserId {
        UserId::try_from(id).unwrap()
    }

    fn planet(id: i64) -> PlanetId {
        PlanetId::try_from(id).unwrap()
    }

    fn person(id: i64) -> PersonId {
        PersonId::try_from(id).unwrap()
    }

    #[tokio::test]
    async fn should_add_planet_favorite_with_only_planet_set() {
        let svc = make_service();
        let favorite = svc
            .add_favorite(NewFavorite::planet(user(3), planet(5)))
            .await
            .unwrap();

        assert_eq!(favorite.user_id, user(3));
        assert_eq!(favorite.target.planet_id(), Some(planet(5)));
        assert_eq!(favorite.target.people_id(), None);
    }

    #[tokio::test]
    async fn should_add_person_favorite_with_only_person_set() {
        let svc = make_service();
        let favorite = svc
            .add_favorite(NewFavorite::person(user(3), person(7)))
            .await
            .unwrap();

        assert_eq!(favorite.target.planet_id(), None);
        assert_eq!(favorite.target.people_id(), Some(person(7)));
    }

    #[tokio::test]
    async fn should_remove_favorite_matching_pair() {
        let svc = make_service();
        svc.add_favorite(NewFavorite::planet(user(1), planet(2)))
            .await
            .unwrap();
        svc.add_favorite(NewFavorite::person(user(1), person(2)))
            .await
            .unwrap();

        let removed = svc
            .remove_favorite(user(1), FavoriteTarget::Planet(planet(2)))
            .await
            .unwrap();
        assert_eq!(removed.target, FavoriteTarget::Planet(planet(2)));

        let remaining = svc.list_favorites().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].target, FavoriteTarget::Person(person(2)));
    }

    #[tokio::test]
    async fn should_leave_store_unchanged_when_pair_not_found() {
        let svc = make_service();
        svc.add_favorite(NewFavorite::planet(user(1), planet(2)))
            .await
            .unwrap();

        let result = svc
            .remove_favorite(user(2), FavoriteTarget::Planet(planet(2)))
            .await;
        match result {
            Err(HolocronError::NotFound(err)) => {
                assert_eq!(err.to_string(), "Favorite planet not found");
            }
            other => panic!("expected not found, got {other:?}"),
        }
        assert_eq!(svc.list_favorites().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_not_match_person_favorite_when_removing_planet_with_same_id() {
        let svc = make_service();
        svc.add_favorite(NewFavorite::person(user(1), person(4)))
            .await
            .unwrap();

        let result = svc
            .remove_favorite(user(1), FavoriteTarget::Planet(planet(4)))
            .await;
        assert!(matches!(result, Err(HolocronError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_only_favorites_of_given_user() {
        let svc = make_service();
        svc.add_favorite(NewFavorite::planet(user(1), planet(1)))
            .await
            .unwrap();
        svc.add_favorite(NewFavorite::planet(user(2), planet(1)))
            .await
            .unwrap();

        let favorites = svc.list_user_favorites(user(1)).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert!(svc.list_user_favorites(user(99)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_favorite_id_missing() {
        let svc = make_service();
        let result = svc.get_favorite(FavoriteId::try_from(1).unwrap()).await;
        assert!(matches!(result, Err(HolocronError::NotFound(_))));
    }
}
