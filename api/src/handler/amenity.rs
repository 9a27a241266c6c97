use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        amenity::{
            CreateAmenityRequest, AmenityResponse, UpdateAmenityRequest,
            UpdateAmenityRequestWithId,
        },
        ListQuery, MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{amenity::event::UpdateAmenity, id::AmenityId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_amenity(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateAmenityRequest>,
) -> AppResult<(StatusCode, Json<AmenityResponse>)> {
    req.validate(&())?;

    registry
        .amenity_repository()
        .create(req.into())
        .await
        .map(|amenity| (StatusCode::CREATED, Json(amenity.into())))
}

pub async fn show_amenity_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<AmenityResponse>>> {
    query.validate(&())?;

    registry
        .amenity_repository()
        .find_all(query.into())
        .await
        .map(|amenities| amenities.into_iter().map(AmenityResponse::from).collect())
        .map(Json)
}

pub async fn show_amenity(
    _client: AuthorizedClient,
    AppPath(amenity_id): AppPath<AmenityId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AmenityResponse>> {
    registry
        .amenity_repository()
        .find_by_id(amenity_id)
        .await
        .and_then(|amenity| match amenity {
            Some(amenity) => Ok(Json(amenity.into())),
            None => Err(AppError::EntityNotFound("Amenity not found".into())),
        })
}

pub async fn update_amenity(
    _client: AuthorizedClient,
    AppPath(amenity_id): AppPath<AmenityId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateAmenityRequest>,
) -> AppResult<Json<AmenityResponse>> {
    req.validate(&())?;

    let update_amenity: UpdateAmenity = UpdateAmenityRequestWithId::new(amenity_id, req).into();
    if update_amenity.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .amenity_repository()
        .update(update_amenity)
        .await
        .map(|amenity| Json(amenity.into()))
}

pub async fn delete_amenity(
    _client: AuthorizedClient,
    AppPath(amenity_id): AppPath<AmenityId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .amenity_repository()
        .delete(amenity_id)
        .await
        .map(|_| Json(MessageResponse::new("Amenity deactivated successfully")))
}
