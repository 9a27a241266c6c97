use chrono::{DateTime, Utc};
use kernel::model::{
    house_rule::HouseRule,
    id::{HouseRuleId, PropertyId},
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct HouseRuleRow {
    pub rule_id: HouseRuleId,
    pub property_id: PropertyId,
    pub rule_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<HouseRuleRow> for HouseRule {
    fn from(value: HouseRuleRow) -> Self {
        let HouseRuleRow {
            rule_id,
            property_id,
            rule_text,
            created_at,
        } = value;
        HouseRule {
            rule_id,
            property_id,
            rule_text,
            created_at,
        }
    }
}
