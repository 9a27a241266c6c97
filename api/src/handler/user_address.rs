use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        user_address::{
            CreateUserAddressRequest, UserAddressResponse, UpdateUserAddressRequest,
            UpdateUserAddressRequestWithId,
        },
        ListQuery, MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{user_address::event::UpdateUserAddress, id::UserAddressId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user_address(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateUserAddressRequest>,
) -> AppResult<(StatusCode, Json<UserAddressResponse>)> {
    req.validate(&())?;

    registry
        .user_address_repository()
        .create(req.into())
        .await
        .map(|address| (StatusCode::CREATED, Json(address.into())))
}

pub async fn show_user_address_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<UserAddressResponse>>> {
    query.validate(&())?;

    registry
        .user_address_repository()
        .find_all(query.into())
        .await
        .map(|addresses| addresses.into_iter().map(UserAddressResponse::from).collect())
        .map(Json)
}

pub async fn show_user_address(
    _client: AuthorizedClient,
    AppPath(address_id): AppPath<UserAddressId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserAddressResponse>> {
    registry
        .user_address_repository()
        .find_by_id(address_id)
        .await
        .and_then(|address| match address {
            Some(address) => Ok(Json(address.into())),
            None => Err(AppError::EntityNotFound("Address not found".into())),
        })
}

pub async fn update_user_address(
    _client: AuthorizedClient,
    AppPath(address_id): AppPath<UserAddressId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateUserAddressRequest>,
) -> AppResult<Json<UserAddressResponse>> {
    req.validate(&())?;

    let update_user_address: UpdateUserAddress =
        UpdateUserAddressRequestWithId::new(address_id, req).into();
    if update_user_address.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .user_address_repository()
        .update(update_user_address)
        .await
        .map(|address| Json(address.into()))
}

pub async fn delete_user_address(
    _client: AuthorizedClient,
    AppPath(address_id): AppPath<UserAddressId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .user_address_repository()
        .delete(address_id)
        .await
        .map(|_| Json(MessageResponse::new("Address deleted successfully")))
}
