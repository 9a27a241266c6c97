use super::{default_limit, default_skip};
use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    house_rule::{
        event::{CreateHouseRule, UpdateHouseRule},
        HouseRule,
    },
    id::{HouseRuleId, PropertyId},
    list::ListOptions,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct HouseRuleListQuery {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(range(min = 0))]
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl HouseRuleListQuery {
    pub fn into_parts(self) -> (PropertyId, ListOptions) {
        (
            self.property_id,
            ListOptions {
                skip: self.skip,
                limit: self.limit,
            },
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHouseRuleRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(length(chars, min = 1, max = 2000))]
    pub rule_text: String,
}

impl From<CreateHouseRuleRequest> for CreateHouseRule {
    fn from(value: CreateHouseRuleRequest) -> Self {
        CreateHouseRule::new(value.property_id, value.rule_text)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHouseRuleRequest {
    #[garde(length(chars, min = 1, max = 2000))]
    pub rule_text: Option<String>,
}

#[derive(new)]
pub struct UpdateHouseRuleRequestWithId(HouseRuleId, UpdateHouseRuleRequest);

impl From<UpdateHouseRuleRequestWithId> for UpdateHouseRule {
    fn from(value: UpdateHouseRuleRequestWithId) -> Self {
        let UpdateHouseRuleRequestWithId(rule_id, UpdateHouseRuleRequest { rule_text }) = value;
        UpdateHouseRule::new(rule_id, rule_text)
    }
}

#[derive(Debug, Serialize)]
pub struct HouseRuleResponse {
    pub rule_id: HouseRuleId,
    pub property_id: PropertyId,
    pub rule_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<HouseRule> for HouseRuleResponse {
    fn from(value: HouseRule) -> Self {
        let HouseRule {
            rule_id,
            property_id,
            rule_text,
            created_at,
        } = value;
        Self {
            rule_id,
            property_id,
            rule_text,
            created_at,
        }
    }
}
