use async_trait::async_trait;
use kernel::{model::auth::AccessToken, repository::auth::AuthRepository};
use shared::{
    config::AuthConfig,
    error::{AppError, AppResult},
};
use std::collections::HashSet;

/// Accepts the bearer tokens listed in the service configuration.
pub struct AuthRepositoryImpl {
    tokens: HashSet<String>,
}

impl AuthRepositoryImpl {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            tokens: config.tokens.iter().cloned().collect(),
        }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_access_token(&self, access_token: &AccessToken) -> AppResult<()> {
        if self.tokens.contains(&access_token.0) {
            Ok(())
        } else {
            tracing::debug!("rejected bearer token");
            Err(AppError::UnauthenticatedError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn only_configured_tokens_pass() {
        let repo = AuthRepositoryImpl::new(&AuthConfig {
            tokens: vec!["secret-1".into(), "secret-2".into()],
        });
        assert!(repo
            .verify_access_token(&AccessToken("secret-2".into()))
            .await
            .is_ok());
        assert!(matches!(
            repo.verify_access_token(&AccessToken("guess".into())).await,
            Err(AppError::UnauthenticatedError)
        ));
        assert!(repo
            .verify_access_token(&AccessToken(String::new()))
            .await
            .is_err());
    }
}
