use crate::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // 409 when the e-mail is already registered
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn update(&self, event: UpdateUser) -> AppResult<User>;
    async fn delete(&self, user_id: UserId) -> AppResult<()>;
}
