use crate::model::id::{HouseRuleId, PropertyId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseRule {
    pub rule_id: HouseRuleId,
    pub property_id: PropertyId,
    pub rule_text: String,
    pub created_at: DateTime<Utc>,
}
