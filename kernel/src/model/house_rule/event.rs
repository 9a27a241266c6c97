use crate::model::id::{HouseRuleId, PropertyId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateHouseRule {
    pub property_id: PropertyId,
    pub rule_text: String,
}

#[derive(Debug, new)]
pub struct UpdateHouseRule {
    pub rule_id: HouseRuleId,
    pub rule_text: Option<String>,
}

impl UpdateHouseRule {
    pub fn is_empty(&self) -> bool {
        self.rule_text.is_none()
    }
}
