use crate::model::id::{UserAddressId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AddressType {
    #[default]
    Home,
    Billing,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAddress {
    pub address_id: UserAddressId,
    pub user_id: UserId,
    pub address_type: AddressType,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::AddressType;

    #[test]
    fn address_type_round_trips_through_its_column_text() {
        assert_eq!(AddressType::Billing.to_string(), "billing");
        assert_eq!("other".parse::<AddressType>().unwrap(), AddressType::Other);
        assert!("work".parse::<AddressType>().is_err());
    }
}
