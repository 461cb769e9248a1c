// db/db.rs
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::propertymodel::Property;

/// Owner of the session's property list. Lives only as long as the process.
#[derive(Clone, Default)]
pub struct DBClient {
    pub(super) properties: Arc<RwLock<Vec<Property>>>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("properties", &"RwLock<Vec<Property>>")
            .finish()
    }
}

impl DBClient {
    /// Create an empty store
    pub fn new() -> Self {
        DBClient::default()
    }

    /// Create a store holding `properties` in the given order
    pub fn with_properties(properties: Vec<Property>) -> Self {
        DBClient {
            properties: Arc::new(RwLock::new(properties)),
        }
    }

    /// Number of stored listings, for logging
    pub async fn property_count(&self) -> usize {
        self.properties.read().await.len()
    }
}
