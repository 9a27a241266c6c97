use super::{parse_enum, with_scale, BATHROOM_SCALE, MONEY_SCALE};
use chrono::{DateTime, NaiveTime, Utc};
use kernel::model::{
    id::{CategoryId, PropertyId, UserId},
    property::{Property, PropertyHost},
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::FromRow;

// Columns selected by every property read, joined with the host and category names.
pub const PROPERTY_COLUMNS: &str = r#"
    p.property_id, p.host_id, p.category_id, p.title, p.description,
    p.property_type, p.max_guests, p.bedrooms, p.beds, p.bathrooms,
    p.price_per_night, p.cleaning_fee, p.service_fee_percentage,
    p.minimum_nights, p.maximum_nights, p.check_in_time, p.check_out_time,
    p.instant_book, p.is_active, p.created_at, p.updated_at,
    u.first_name AS host_first_name, u.last_name AS host_last_name,
    c.category_name
"#;

pub const PROPERTY_FROM: &str = r#"
    FROM properties p
    INNER JOIN users u ON u.user_id = p.host_id
    INNER JOIN property_categories c ON c.category_id = p.category_id
"#;

#[derive(FromRow)]
pub struct PropertyRow {
    pub property_id: PropertyId,
    pub host_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    pub description: String,
    pub property_type: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub host_first_name: String,
    pub host_last_name: String,
    pub category_name: String,
}

impl TryFrom<PropertyRow> for Property {
    type Error = AppError;

    fn try_from(value: PropertyRow) -> Result<Self, Self::Error> {
        let PropertyRow {
            property_id,
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
            created_at,
            updated_at,
            host_first_name,
            host_last_name,
            category_name,
        } = value;
        Ok(Property {
            property_id,
            host_id,
            category_id,
            title,
            description,
            property_type: parse_enum("property_type", &property_type)?,
            max_guests,
            bedrooms,
            beds,
            bathrooms: with_scale(bathrooms, BATHROOM_SCALE),
            price_per_night: with_scale(price_per_night, MONEY_SCALE),
            cleaning_fee: with_scale(cleaning_fee, MONEY_SCALE),
            service_fee_percentage: with_scale(service_fee_percentage, MONEY_SCALE),
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
            host: PropertyHost {
                first_name: host_first_name,
                last_name: host_last_name,
            },
            category_name,
            created_at,
            updated_at,
        })
    }
}

#[derive(FromRow)]
pub struct NightRangeRow {
    pub minimum_nights: i32,
    pub maximum_nights: i32,
}
