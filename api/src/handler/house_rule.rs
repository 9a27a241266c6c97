use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        house_rule::{
            CreateHouseRuleRequest, HouseRuleListQuery, HouseRuleResponse, UpdateHouseRuleRequest,
            UpdateHouseRuleRequestWithId,
        },
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{house_rule::event::UpdateHouseRule, id::HouseRuleId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_house_rule(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateHouseRuleRequest>,
) -> AppResult<(StatusCode, Json<HouseRuleResponse>)> {
    req.validate(&())?;

    registry
        .house_rule_repository()
        .create(req.into())
        .await
        .map(|rule| (StatusCode::CREATED, Json(rule.into())))
}

pub async fn show_house_rule_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<HouseRuleListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HouseRuleResponse>>> {
    query.validate(&())?;

    let (property_id, options) = query.into_parts();
    registry
        .house_rule_repository()
        .find_by_property_id(property_id, options)
        .await
        .map(|rules| rules.into_iter().map(HouseRuleResponse::from).collect())
        .map(Json)
}

pub async fn show_house_rule(
    _client: AuthorizedClient,
    AppPath(rule_id): AppPath<HouseRuleId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HouseRuleResponse>> {
    registry
        .house_rule_repository()
        .find_by_id(rule_id)
        .await
        .and_then(|rule| match rule {
            Some(rule) => Ok(Json(rule.into())),
            None => Err(AppError::EntityNotFound("House rule not found".into())),
        })
}

pub async fn update_house_rule(
    _client: AuthorizedClient,
    AppPath(rule_id): AppPath<HouseRuleId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateHouseRuleRequest>,
) -> AppResult<Json<HouseRuleResponse>> {
    req.validate(&())?;

    let update_rule: UpdateHouseRule = UpdateHouseRuleRequestWithId::new(rule_id, req).into();
    if update_rule.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .house_rule_repository()
        .update(update_rule)
        .await
        .map(|rule| Json(rule.into()))
}

pub async fn delete_house_rule(
    _client: AuthorizedClient,
    AppPath(rule_id): AppPath<HouseRuleId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .house_rule_repository()
        .delete(rule_id)
        .await
        .map(|_| Json(MessageResponse::new("House rule deleted successfully")))
}
