//! Storage seam for events.
//!
//! Handlers only see [`EventRepository`]; the Postgres and in-memory
//! backends provide the same semantics.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Event, EventInput};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEventRepository;
pub use postgres::PgEventRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Event>>;

    /// All events in storage-native order.
    async fn find_all(&self) -> RepositoryResult<Vec<Event>>;

    /// Stores a new event; the backend assigns `id` and both timestamps.
    async fn insert(&self, input: EventInput) -> RepositoryResult<Event>;

    /// Overwrites all five fields of an existing event.
    ///
    /// Returns `None` when the row disappeared after the caller looked it up.
    async fn update(&self, id: Uuid, input: EventInput) -> RepositoryResult<Option<Event>>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}
