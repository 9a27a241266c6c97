use crate::model::{
    id::PropertyId,
    property_amenity::{
        event::{CreatePropertyAmenity, DeletePropertyAmenity, ReplacePropertyAmenity},
        PropertyAmenity,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyAmenityRepository: Send + Sync {
    async fn create(&self, event: CreatePropertyAmenity) -> AppResult<PropertyAmenity>;
    async fn find_by_property_id(&self, property_id: PropertyId)
        -> AppResult<Vec<PropertyAmenity>>;
    /// Removes the old pair and inserts the new one in a single transaction.
    async fn replace(&self, event: ReplacePropertyAmenity) -> AppResult<PropertyAmenity>;
    async fn delete(&self, event: DeletePropertyAmenity) -> AppResult<()>;
}
