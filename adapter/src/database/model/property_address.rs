use super::{with_scale, COORDINATE_SCALE};
use chrono::{DateTime, Utc};
use kernel::model::{
    id::{PropertyAddressId, PropertyId},
    property_address::PropertyAddress,
};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct PropertyAddressRow {
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

impl From<PropertyAddressRow> for PropertyAddress {
    fn from(value: PropertyAddressRow) -> Self {
        let PropertyAddressRow {
            address_id,
            property_id,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            neighborhood,
            latitude,
            longitude,
            created_at,
        } = value;
        PropertyAddress {
            address_id,
            property_id,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            neighborhood,
            latitude: latitude.map(|v| with_scale(v, COORDINATE_SCALE)),
            longitude: longitude.map(|v| with_scale(v, COORDINATE_SCALE)),
            created_at,
        }
    }
}
