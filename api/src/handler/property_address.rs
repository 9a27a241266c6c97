use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        property_address::{
            CreatePropertyAddressRequest, PropertyAddressResponse, UpdatePropertyAddressRequest,
            UpdatePropertyAddressRequestWithId,
        },
        ListQuery, MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{property_address::event::UpdatePropertyAddress, id::PropertyAddressId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_property_address(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreatePropertyAddressRequest>,
) -> AppResult<(StatusCode, Json<PropertyAddressResponse>)> {
    req.validate(&())?;

    registry
        .property_address_repository()
        .create(req.into())
        .await
        .map(|address| (StatusCode::CREATED, Json(address.into())))
}

pub async fn show_property_address_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PropertyAddressResponse>>> {
    query.validate(&())?;

    registry
        .property_address_repository()
        .find_all(query.into())
        .await
        .map(|addresses| addresses.into_iter().map(PropertyAddressResponse::from).collect())
        .map(Json)
}

pub async fn show_property_address(
    _client: AuthorizedClient,
    AppPath(address_id): AppPath<PropertyAddressId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PropertyAddressResponse>> {
    registry
        .property_address_repository()
        .find_by_id(address_id)
        .await
        .and_then(|address| match address {
            Some(address) => Ok(Json(address.into())),
            None => Err(AppError::EntityNotFound("Address not found".into())),
        })
}

pub async fn update_property_address(
    _client: AuthorizedClient,
    AppPath(address_id): AppPath<PropertyAddressId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdatePropertyAddressRequest>,
) -> AppResult<Json<PropertyAddressResponse>> {
    req.validate(&())?;

    let update_property_address: UpdatePropertyAddress =
        UpdatePropertyAddressRequestWithId::new(address_id, req).into();
    if update_property_address.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .property_address_repository()
        .update(update_property_address)
        .await
        .map(|address| Json(address.into()))
}

pub async fn delete_property_address(
    _client: AuthorizedClient,
    AppPath(address_id): AppPath<PropertyAddressId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .property_address_repository()
        .delete(address_id)
        .await
        .map(|_| Json(MessageResponse::new("Address deleted successfully")))
}
