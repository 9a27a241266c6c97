use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        property::{
            CreatePropertyRequest, PropertyListQuery, PropertyResponse, UpdatePropertyRequest,
            UpdatePropertyRequestWithId,
        },
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{id::PropertyId, property::event::UpdateProperty};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_property(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreatePropertyRequest>,
) -> AppResult<(StatusCode, Json<PropertyResponse>)> {
    req.validate(&())?;
    req.check_night_range()?;

    registry
        .property_repository()
        .create(req.into())
        .await
        .map(|property| (StatusCode::CREATED, Json(property.into())))
}

/// Lists active properties, optionally narrowed by price, type and category.
pub async fn show_property_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<PropertyListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    query.validate(&())?;

    let (filter, options) = query.into_parts();
    registry
        .property_repository()
        .find_all(filter, options)
        .await
        .map(|properties| {
            properties
                .into_iter()
                .map(PropertyResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn show_property(
    _client: AuthorizedClient,
    AppPath(property_id): AppPath<PropertyId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PropertyResponse>> {
    registry
        .property_repository()
        .find_by_id(property_id)
        .await
        .and_then(|property| match property {
            Some(property) => Ok(Json(property.into())),
            None => Err(AppError::EntityNotFound("Property not found".into())),
        })
}

pub async fn update_property(
    _client: AuthorizedClient,
    AppPath(property_id): AppPath<PropertyId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdatePropertyRequest>,
) -> AppResult<Json<PropertyResponse>> {
    req.validate(&())?;
    req.check_night_range()?;

    let update_property: UpdateProperty = UpdatePropertyRequestWithId::new(property_id, req).into();
    if update_property.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .property_repository()
        .update(update_property)
        .await
        .map(|property| Json(property.into()))
}

pub async fn delete_property(
    _client: AuthorizedClient,
    AppPath(property_id): AppPath<PropertyId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .property_repository()
        .delete(property_id)
        .await
        .map(|_| Json(MessageResponse::new("Property deactivated successfully")))
}
