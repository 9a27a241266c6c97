use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        photo::{
            CreatePropertyPhotoRequest, PropertyPhotoResponse, UpdatePropertyPhotoRequest,
            UpdatePropertyPhotoRequestWithId,
        },
        ListQuery, MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{photo::event::UpdatePropertyPhoto, id::PhotoId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_property_photo(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreatePropertyPhotoRequest>,
) -> AppResult<(StatusCode, Json<PropertyPhotoResponse>)> {
    req.validate(&())?;

    registry
        .property_photo_repository()
        .create(req.into())
        .await
        .map(|photo| (StatusCode::CREATED, Json(photo.into())))
}

pub async fn show_property_photo_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PropertyPhotoResponse>>> {
    query.validate(&())?;

    registry
        .property_photo_repository()
        .find_all(query.into())
        .await
        .map(|photos| photos.into_iter().map(PropertyPhotoResponse::from).collect())
        .map(Json)
}

pub async fn show_property_photo(
    _client: AuthorizedClient,
    AppPath(photo_id): AppPath<PhotoId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PropertyPhotoResponse>> {
    registry
        .property_photo_repository()
        .find_by_id(photo_id)
        .await
        .and_then(|photo| match photo {
            Some(photo) => Ok(Json(photo.into())),
            None => Err(AppError::EntityNotFound("Property photo not found".into())),
        })
}

pub async fn update_property_photo(
    _client: AuthorizedClient,
    AppPath(photo_id): AppPath<PhotoId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdatePropertyPhotoRequest>,
) -> AppResult<Json<PropertyPhotoResponse>> {
    req.validate(&())?;

    let update_property_photo: UpdatePropertyPhoto =
        UpdatePropertyPhotoRequestWithId::new(photo_id, req).into();
    if update_property_photo.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .property_photo_repository()
        .update(update_property_photo)
        .await
        .map(|photo| Json(photo.into()))
}

pub async fn delete_property_photo(
    _client: AuthorizedClient,
    AppPath(photo_id): AppPath<PhotoId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .property_photo_repository()
        .delete(photo_id)
        .await
        .map(|_| Json(MessageResponse::new("Property photo deleted successfully")))
}
