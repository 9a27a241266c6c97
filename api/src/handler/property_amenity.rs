use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        property_amenity::{
            CreatePropertyAmenityRequest, DeletePropertyAmenityQuery, PropertyAmenityResponse,
            PropertyIdQuery, ReplacePropertyAmenityRequest,
        },
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::id::PropertyId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn attach_amenity(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreatePropertyAmenityRequest>,
) -> AppResult<(StatusCode, Json<PropertyAmenityResponse>)> {
    req.validate(&())?;

    registry
        .property_amenity_repository()
        .create(req.into())
        .await
        .map(|pa| (StatusCode::CREATED, Json(pa.into())))
}

pub async fn show_property_amenities(
    _client: AuthorizedClient,
    AppPath(property_id): AppPath<PropertyId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PropertyAmenityResponse>>> {
    registry
        .property_amenity_repository()
        .find_by_property_id(property_id)
        .await
        .map(|pas| pas.into_iter().map(PropertyAmenityResponse::from).collect())
        .map(Json)
}

pub async fn replace_amenity(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<PropertyIdQuery>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<ReplacePropertyAmenityRequest>,
) -> AppResult<Json<PropertyAmenityResponse>> {
    req.validate(&())?;

    registry
        .property_amenity_repository()
        .replace(req.into_event(query.property_id))
        .await
        .map(|pa| Json(pa.into()))
}

pub async fn detach_amenity(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<DeletePropertyAmenityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .property_amenity_repository()
        .delete(query.into())
        .await
        .map(|_| Json(MessageResponse::new("Amenity removed from property successfully")))
}
