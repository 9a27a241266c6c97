use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{UserAddressId, UserId},
    user_address::{
        event::{CreateUserAddress, UpdateUserAddress},
        AddressType, UserAddress,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserAddressRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    #[serde(default)]
    pub address_type: AddressType,
    #[garde(length(chars, min = 1, max = 255))]
    pub street_address: String,
    #[garde(length(chars, min = 1, max = 100))]
    pub city: String,
    #[garde(length(chars, max = 100))]
    pub state_province: Option<String>,
    #[garde(length(chars, max = 20))]
    pub postal_code: Option<String>,
    #[garde(length(chars, min = 1, max = 100))]
    pub country: String,
    #[garde(skip)]
    #[serde(default)]
    pub is_primary: bool,
}

impl From<CreateUserAddressRequest> for CreateUserAddress {
    fn from(value: CreateUserAddressRequest) -> Self {
        let CreateUserAddressRequest {
            user_id,
            address_type,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            is_primary,
        } = value;
        CreateUserAddress {
            user_id,
            address_type,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            is_primary,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserAddressRequest {
    #[garde(skip)]
    pub address_type: Option<AddressType>,
    #[garde(length(chars, min = 1, max = 255))]
    pub street_address: Option<String>,
    #[garde(length(chars, min = 1, max = 100))]
    pub city: Option<String>,
    #[garde(length(chars, max = 100))]
    pub state_province: Option<String>,
    #[garde(length(chars, max = 20))]
    pub postal_code: Option<String>,
    #[garde(length(chars, min = 1, max = 100))]
    pub country: Option<String>,
    #[garde(skip)]
    pub is_primary: Option<bool>,
}

#[derive(new)]
pub struct UpdateUserAddressRequestWithId(UserAddressId, UpdateUserAddressRequest);

impl From<UpdateUserAddressRequestWithId> for UpdateUserAddress {
    fn from(value: UpdateUserAddressRequestWithId) -> Self {
        let UpdateUserAddressRequestWithId(
            address_id,
            UpdateUserAddressRequest {
                address_type,
                street_address,
                city,
                state_province,
                postal_code,
                country,
                is_primary,
            },
        ) = value;
        UpdateUserAddress {
            address_id,
            address_type,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            is_primary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserAddressResponse {
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

impl From<UserAddress> for UserAddressResponse {
    fn from(value: UserAddress) -> Self {
        let UserAddress {
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
        Self {
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_type_defaults_to_home() {
        let req: CreateUserAddressRequest = serde_json::from_value(serde_json::json!({
            "user_id": 3,
            "street_address": "4-5 Sakura",
            "city": "Sendai",
            "country": "Japan",
        }))
        .unwrap();
        assert_eq!(req.address_type, AddressType::Home);
        assert!(!req.is_primary);
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn unknown_address_type_does_not_parse() {
        let res = serde_json::from_value::<CreateUserAddressRequest>(serde_json::json!({
            "user_id": 3,
            "address_type": "office",
            "street_address": "x",
            "city": "y",
            "country": "z",
        }));
        assert!(res.is_err());
    }
}
