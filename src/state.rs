use std::sync::Arc;

use crate::repositories::EventRepository;

/// Shared by every handler. Cloning only bumps the repository refcount.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }
}
