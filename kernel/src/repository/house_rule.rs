use crate::model::{
    house_rule::{
        event::{CreateHouseRule, UpdateHouseRule},
        HouseRule,
    },
    id::{HouseRuleId, PropertyId},
    list::ListOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HouseRuleRepository: Send + Sync {
    async fn create(&self, event: CreateHouseRule) -> AppResult<HouseRule>;
    // 404 when the property does not exist
    async fn find_by_property_id(
        &self,
        property_id: PropertyId,
        options: ListOptions,
    ) -> AppResult<Vec<HouseRule>>;
    async fn find_by_id(&self, rule_id: HouseRuleId) -> AppResult<Option<HouseRule>>;
    async fn update(&self, event: UpdateHouseRule) -> AppResult<HouseRule>;
    async fn delete(&self, rule_id: HouseRuleId) -> AppResult<()>;
}
