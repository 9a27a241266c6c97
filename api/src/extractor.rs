use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use kernel::model::auth::AccessToken;
use registry::AppRegistry;
use shared::error::AppError;

/// `axum::Json` whose rejections answer with the usual `{"detail": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// A caller that presented one of the configured bearer tokens.
pub struct AuthorizedClient {
    pub access_token: AccessToken,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let access_token = bearer_token(parts)
            .map(|token| AccessToken(token.to_string()))
            .ok_or(AppError::UnauthenticatedError)?;

        registry
            .auth_repository()
            .verify_access_token(&access_token)
            .await?;

        Ok(Self { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::bearer_token;
    use axum::http::Request;

    fn parts(header: Option<&str>) -> axum::http::request::Parts {
        let mut builder = Request::builder().uri("/users");
        if let Some(value) = header {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn bearer_scheme_is_required() {
        assert_eq!(bearer_token(&parts(Some("Bearer abc"))), Some("abc"));
        assert_eq!(bearer_token(&parts(Some("bearer abc"))), Some("abc"));
        assert_eq!(bearer_token(&parts(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts(Some("Bearer "))), None);
        assert_eq!(bearer_token(&parts(None)), None);
    }
}
