//! Person service: use-cases for managing people.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::PersonId;
use holocron_domain::person::{NewPerson, Person};

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new person after the presence checks pass.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if a field is empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, person), fields(person_name = %person.name))]
    pub async fn create_person(&self, person: NewPerson) -> Result<Person, HolocronError> {
        person.validate()?;
        self.repo.create(person).await
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, HolocronError> {
        self.repo.get_all().await
    }

    /// Delete a person and, through the store, every favorite pointing at it.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_person(&self, id: PersonId) -> Result<(), HolocronError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPersonRepo {
        store: Mutex<Vec<Person>>,
        next_id: Mutex<i64>,
    }

    impl PersonRepository for InMemoryPersonRepo {
        fn create(
            &self,
            person: NewPerson,
        ) -> impl Future<Output = Result<Person, HolocronError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let created = Person::from_draft(PersonId::try_from(*next_id).unwrap(), person);
            self.store.lock().unwrap().push(created.clone());
            async { Ok(created) }
        }

        fn get_by_id(
            &self,
            id: PersonId,
        ) -> impl Future<Output = Result<Option<Person>, HolocronError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|p| p.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, HolocronError>> + Send {
            let result = self.store.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, HolocronError>> + Send {
            let mut store = self.store.lock().unwrap();
            let before = store.len();
            store.retain(|p| p.id != id);
            let removed = store.len() != before;
            async move { Ok(removed) }
        }
    }

    fn make_service() -> PersonService<InMemoryPersonRepo> {
        PersonService::new(InMemoryPersonRepo::default())
    }

    fn leia() -> NewPerson {
        Person::builder()
            .name("Leia Organa")
            .species("Human")
            .gender("female")
            .homeworld("Alderaan")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_get_person() {
        let svc = make_service();
        let created = svc.create_person(leia()).await.unwrap();

        let fetched = svc.get_person(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_list_people_in_insertion_order() {
        let svc = make_service();
        svc.create_person(leia()).await.unwrap();
        let mut chewie = leia();
        chewie.name = "Chewbacca".to_string();
        chewie.species = "Wookiee".to_string();
        svc.create_person(chewie).await.unwrap();

        let names: Vec<String> = svc
            .list_people()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Leia Organa", "Chewbacca"]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_person() {
        let svc = make_service();
        let result = svc.delete_person(PersonId::try_from(1).unwrap()).await;
        assert!(matches!(result, Err(HolocronError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_person() {
        let svc = make_service();
        let created = svc.create_person(leia()).await.unwrap();

        svc.delete_person(created.id).await.unwrap();

        let result = svc.get_person(created.id).await;
        assert!(matches!(result, Err(HolocronError::NotFound(_))));
    }
}
