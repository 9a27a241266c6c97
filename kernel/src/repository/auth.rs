use crate::model::auth::AccessToken;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Ok when the token is one the service accepts.
    async fn verify_access_token(&self, access_token: &AccessToken) -> AppResult<()>;
}
