use crate::model::{
    id::PropertyId,
    list::ListOptions,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property, PropertyListFilter,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, event: CreateProperty) -> AppResult<Property>;
    // Active properties only.
    async fn find_all(
        &self,
        filter: PropertyListFilter,
        options: ListOptions,
    ) -> AppResult<Vec<Property>>;
    async fn find_by_id(&self, property_id: PropertyId) -> AppResult<Option<Property>>;
    async fn update(&self, event: UpdateProperty) -> AppResult<Property>;
    // Soft delete: the row stays with is_active = FALSE.
    async fn delete(&self, property_id: PropertyId) -> AppResult<()>;
}
