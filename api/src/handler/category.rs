use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        category::{
            CreateCategoryRequest, CategoryResponse, UpdateCategoryRequest,
            UpdateCategoryRequestWithId,
        },
        ListQuery, MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{category::event::UpdateCategory, id::CategoryId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_category(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    req.validate(&())?;

    registry
        .category_repository()
        .create(req.into())
        .await
        .map(|category| (StatusCode::CREATED, Json(category.into())))
}

pub async fn show_category_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<CategoryResponse>>> {
    query.validate(&())?;

    registry
        .category_repository()
        .find_all(query.into())
        .await
        .map(|categories| categories.into_iter().map(CategoryResponse::from).collect())
        .map(Json)
}

pub async fn show_category(
    _client: AuthorizedClient,
    AppPath(category_id): AppPath<CategoryId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CategoryResponse>> {
    registry
        .category_repository()
        .find_by_id(category_id)
        .await
        .and_then(|category| match category {
            Some(category) => Ok(Json(category.into())),
            None => Err(AppError::EntityNotFound("Category not found".into())),
        })
}

pub async fn update_category(
    _client: AuthorizedClient,
    AppPath(category_id): AppPath<CategoryId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    req.validate(&())?;

    let update_category: UpdateCategory = UpdateCategoryRequestWithId::new(category_id, req).into();
    if update_category.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .category_repository()
        .update(update_category)
        .await
        .map(|category| Json(category.into()))
}

pub async fn delete_category(
    _client: AuthorizedClient,
    AppPath(category_id): AppPath<CategoryId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .category_repository()
        .delete(category_id)
        .await
        .map(|_| Json(MessageResponse::new("Category deleted successfully")))
}
