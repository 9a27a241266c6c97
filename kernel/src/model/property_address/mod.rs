use crate::model::id::{PropertyAddressId, PropertyId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAddress {
    pub address_id: PropertyAddressId,
    pub property_id: PropertyId,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub neighborhood: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}
