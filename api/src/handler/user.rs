use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        user::{CreateUserRequest, UpdateUserRequest, UpdateUserRequestWithId, UserResponse},
        ListQuery, MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{id::UserId, user::event::UpdateUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(user.into())))
}

pub async fn show_user_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<UserResponse>>> {
    query.validate(&())?;

    registry
        .user_repository()
        .find_all(query.into())
        .await
        .map(|users| users.into_iter().map(UserResponse::from).collect())
        .map(Json)
}

pub async fn show_user(
    _client: AuthorizedClient,
    AppPath(user_id): AppPath<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound("User not found".into())),
        })
}

pub async fn update_user(
    _client: AuthorizedClient,
    AppPath(user_id): AppPath<UserId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    let update_user: UpdateUser = UpdateUserRequestWithId::new(user_id, req).into();
    if update_user.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .user_repository()
        .update(update_user)
        .await
        .map(|user| Json(user.into()))
}

pub async fn delete_user(
    _client: AuthorizedClient,
    AppPath(user_id): AppPath<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .user_repository()
        .delete(user_id)
        .await
        .map(|_| Json(MessageResponse::new("User deleted successfully")))
}
