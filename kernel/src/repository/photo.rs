use crate::model::{
    id::PhotoId,
    list::ListOptions,
    photo::{
        event::{CreatePropertyPhoto, UpdatePropertyPhoto},
        PropertyPhoto,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyPhotoRepository: Send + Sync {
    async fn create(&self, event: CreatePropertyPhoto) -> AppResult<PropertyPhoto>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<PropertyPhoto>>;
    async fn find_by_id(&self, photo_id: PhotoId) -> AppResult<Option<PropertyPhoto>>;
    async fn update(&self, event: UpdatePropertyPhoto) -> AppResult<PropertyPhoto>;
    async fn delete(&self, photo_id: PhotoId) -> AppResult<()>;
}
