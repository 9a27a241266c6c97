use crate::model::id::{CategoryId, PropertyId, UserId};
use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PropertyType {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub property_id: PropertyId,
    pub host_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: Decimal,
    pub price_per_night: Decimal,
    pub cleaning_fee: Decimal,
    pub service_fee_percentage: Decimal,
    pub minimum_nights: i32,
    pub maximum_nights: i32,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub instant_book: bool,
    pub is_active: bool,
    pub host: PropertyHost,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyHost {
    pub first_name: String,
    pub last_name: String,
}

/// Filters accepted by the property listing. Only active properties are listed.
#[derive(Debug, Clone, Default)]
pub struct PropertyListFilter {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub property_type: Option<PropertyType>,
    pub category_id: Option<CategoryId>,
}

pub fn ensure_night_range(minimum_nights: i32, maximum_nights: i32) -> AppResult<()> {
    if maximum_nights < minimum_nights {
        return Err(AppError::InvalidInput(
            "Maximum nights cannot be less than minimum nights".into(),
        ));
    }
    Ok(())
}
