//! Application state shared across all handlers.

use crate::store::ProjectStore;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct AppState {
    pub store: RwLock<ProjectStore>,
}

impl AppState {
    pub fn new(store: ProjectStore) -> AppState {
        AppState {
            store: RwLock::new(store),
        }
    }
}
