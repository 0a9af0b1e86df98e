//! In-memory event storage.
//!
//! Used when no `DATABASE_URL` is configured and by the test suite. Keeps
//! insertion order, which is what `find_all` returns.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{EventRepository, RepositoryResult};
use crate::models::{Event, EventInput};

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Event>> {
        Ok(self.events.read().iter().find(|e| e.id == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Event>> {
        Ok(self.events.read().clone())
    }

    async fn insert(&self, input: EventInput) -> RepositoryResult<Event> {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            titulo: input.titulo,
            descripcion: input.descripcion,
            fecha_inicio: input.fecha_inicio,
            fecha_fin: input.fecha_fin,
            ubicacion: input.ubicacion,
            created_at: now,
            updated_at: now,
        };

        self.events.write().push(event.clone());
        Ok(event)
    }

    async fn update(&self, id: Uuid, input: EventInput) -> RepositoryResult<Option<Event>> {
        let mut events = self.events.write();
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        event.apply(input, Utc::now());
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut events = self.events.write();
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::parse_datetime;

    fn input(titulo: &str) -> EventInput {
        EventInput {
            titulo: titulo.to_string(),
            descripcion: format!("{titulo} description"),
            fecha_inicio: parse_datetime("2024-01-01").unwrap(),
            fecha_fin: parse_datetime("2024-01-02").unwrap(),
            ubicacion: "HQ".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryEventRepository::new();
        let created = repo.insert(input("Launch")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.titulo, "Launch");
        assert_eq!(found.created_at, found.updated_at);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order_and_duplicates() {
        let repo = InMemoryEventRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.insert(input("B")).await.unwrap();
        repo.insert(input("A")).await.unwrap();
        repo.insert(input("B")).await.unwrap();

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.titulo)
            .collect();
        assert_eq!(titles, vec!["B", "A", "B"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = InMemoryEventRepository::new();
        let created = repo.insert(input("Launch")).await.unwrap();

        let mut replacement = input("Relaunch");
        replacement.ubicacion = "Annex".to_string();
        let updated = repo.update(created.id, replacement).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.titulo, "Relaunch");
        assert_eq!(updated.descripcion, "Relaunch description");
        assert_eq!(updated.ubicacion, "Annex");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryEventRepository::new();
        assert!(repo.update(Uuid::new_v4(), input("X")).await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryEventRepository::new();
        let keep = repo.insert(input("Keep")).await.unwrap();
        let gone = repo.insert(input("Gone")).await.unwrap();

        assert!(repo.delete(gone.id).await.unwrap());
        assert!(!repo.delete(gone.id).await.unwrap());
        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_id(keep.id).await.unwrap().is_some());
    }
}
