use crate::model::{
    amenity::{
        event::{CreateAmenity, UpdateAmenity},
        Amenity,
    },
    id::AmenityId,
    list::ListOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, event: CreateAmenity) -> AppResult<Amenity>;
    // Active amenities only.
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Amenity>>;
    async fn find_by_id(&self, amenity_id: AmenityId) -> AppResult<Option<Amenity>>;
    async fn update(&self, event: UpdateAmenity) -> AppResult<Amenity>;
    async fn delete(&self, amenity_id: AmenityId) -> AppResult<()>;
}
