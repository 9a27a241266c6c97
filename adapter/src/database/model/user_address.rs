use super::parse_enum;
use chrono::{DateTime, Utc};
use kernel::model::{
    id::{UserAddressId, UserId},
    user_address::UserAddress,
};
use shared::error::AppError;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserAddressRow {
    pub address_id: UserAddressId,
    pub user_id: UserId,
    pub address_type: String,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserAddressRow> for UserAddress {
    type Error = AppError;

    fn try_from(value: UserAddressRow) -> Result<Self, Self::Error> {
        let UserAddressRow {
            address_id,
            user_id,
            address_type,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            is_primary,
            created_at,
        } = value;
        Ok(UserAddress {
            address_id,
            user_id,
            address_type: parse_enum("address_type", &address_type)?,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            is_primary,
            created_at,
        })
    }
}
