use async_trait::async_trait;
use thiserror::Error;

use crate::{
    db::db::DBClient,
    models::propertymodel::{Property, PropertyStatus, PropertyType, Tag},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Property {0} not found")]
    NotFound(i64),

    #[error("Property {0} already exists")]
    DuplicateId(i64),

    #[error("Replacement for property {expected} carries id {found}")]
    IdMismatch { expected: i64, found: i64 },
}

#[derive(Debug, Default, Clone)]
pub struct PropertySearchFilters {
    pub search: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
    pub tag: Option<Tag>,
}

impl PropertySearchFilters {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = [&property.title, &property.location, &property.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        self.property_type.map_or(true, |t| property.property_type == t)
            && self.status.map_or(true, |s| property.status == s)
            && self.featured.map_or(true, |f| property.featured == f)
            && self.tag.map_or(true, |t| property.has_tag(t))
    }
}

#[async_trait]
pub trait PropertyExt {
    async fn list_properties(&self) -> Vec<Property>;

    async fn get_property(&self, property_id: i64) -> Option<Property>;

    async fn search_properties(&self, filters: &PropertySearchFilters) -> Vec<Property>;

    async fn append_property(&self, property: Property) -> Result<Property, StoreError>;

    async fn replace_property(
        &self,
        property_id: i64,
        property: Property,
    ) -> Result<Property, StoreError>;

    async fn remove_property(&self, property_id: i64) -> Result<Property, StoreError>;

    async fn allocate_property_id(&self, now_ms: i64) -> i64;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn list_properties(&self) -> Vec<Property> {
        self.properties.read().await.clone()
    }

    async fn get_property(&self, property_id: i64) -> Option<Property> {
        self.properties
            .read()
            .await
            .iter()
            .find(|p| p.id == property_id)
            .cloned()
    }

    async fn search_properties(&self, filters: &PropertySearchFilters) -> Vec<Property> {
        self.properties
            .read()
            .await
            .iter()
            .filter(|p| filters.matches(p))
            .cloned()
            .collect()
    }

    async fn append_property(&self, property: Property) -> Result<Property, StoreError> {
        let mut properties = self.properties.write().await;

        if properties.iter().any(|p| p.id == property.id) {
            return Err(StoreError::DuplicateId(property.id));
        }

        properties.push(property.clone());
        tracing::debug!("Properties count: {}", properties.len());
        Ok(property)
    }

    async fn replace_property(
        &self,
        property_id: i64,
        property: Property,
    ) -> Result<Property, StoreError> {
        if property.id != property_id {
            return Err(StoreError::IdMismatch {
                expected: property_id,
                found: property.id,
            });
        }

        let mut properties = self.properties.write().await;
        let slot = properties
            .iter_mut()
            .find(|p| p.id == property_id)
            .ok_or(StoreError::NotFound(property_id))?;

        *slot = property.clone();
        tracing::debug!("Properties count: {}", properties.len());
        Ok(property)
    }

    async fn remove_property(&self, property_id: i64) -> Result<Property, StoreError> {
        let mut properties = self.properties.write().await;
        let index = properties
            .iter()
            .position(|p| p.id == property_id)
            .ok_or(StoreError::NotFound(property_id))?;

        let removed = properties.remove(index);
        tracing::debug!("Properties count: {}", properties.len());
        Ok(removed)
    }

    async fn allocate_property_id(&self, now_ms: i64) -> i64 {
        let properties = self.properties.read().await;
        let mut id = now_ms;
        while properties.iter().any(|p| p.id == id) {
            id += 1;
        }
        id
    }
}
