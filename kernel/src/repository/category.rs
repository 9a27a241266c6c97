use crate::model::{
    category::{
        event::{CreateCategory, UpdateCategory},
        PropertyCategory,
    },
    id::CategoryId,
    list::ListOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, event: CreateCategory) -> AppResult<PropertyCategory>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<PropertyCategory>>;
    async fn find_by_id(&self, category_id: CategoryId) -> AppResult<Option<PropertyCategory>>;
    async fn update(&self, event: UpdateCategory) -> AppResult<PropertyCategory>;
    async fn delete(&self, category_id: CategoryId) -> AppResult<()>;
}
