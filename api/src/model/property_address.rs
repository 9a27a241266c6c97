use super::validate::{opt_latitude, opt_longitude};
use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{PropertyAddressId, PropertyId},
    property_address::{
        event::{CreatePropertyAddress, UpdatePropertyAddress},
        PropertyAddress,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePropertyAddressRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
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
    #[garde(length(chars, max = 100))]
    pub neighborhood: Option<String>,
    #[garde(custom(opt_latitude))]
    pub latitude: Option<Decimal>,
    #[garde(custom(opt_longitude))]
    pub longitude: Option<Decimal>,
}

impl From<CreatePropertyAddressRequest> for CreatePropertyAddress {
    fn from(value: CreatePropertyAddressRequest) -> Self {
        let CreatePropertyAddressRequest {
            property_id,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            neighborhood,
            latitude,
            longitude,
        } = value;
        CreatePropertyAddress {
            property_id,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            neighborhood,
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePropertyAddressRequest {
    #[garde(skip)]
    pub property_id: Option<PropertyId>,
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
    #[garde(length(chars, max = 100))]
    pub neighborhood: Option<String>,
    #[garde(custom(opt_latitude))]
    pub latitude: Option<Decimal>,
    #[garde(custom(opt_longitude))]
    pub longitude: Option<Decimal>,
}

#[derive(new)]
pub struct UpdatePropertyAddressRequestWithId(PropertyAddressId, UpdatePropertyAddressRequest);

impl From<UpdatePropertyAddressRequestWithId> for UpdatePropertyAddress {
    fn from(value: UpdatePropertyAddressRequestWithId) -> Self {
        let UpdatePropertyAddressRequestWithId(
            address_id,
            UpdatePropertyAddressRequest {
                property_id,
                street_address,
                city,
                state_province,
                postal_code,
                country,
                neighborhood,
                latitude,
                longitude,
            },
        ) = value;
        UpdatePropertyAddress {
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
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyAddressResponse {
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

impl From<PropertyAddress> for PropertyAddressResponse {
    fn from(value: PropertyAddress) -> Self {
        let PropertyAddress {
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
        Self {
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let req: CreatePropertyAddressRequest = serde_json::from_value(serde_json::json!({
            "property_id": 1,
            "street_address": "1 Harbor Rd",
            "city": "Hakodate",
            "country": "Japan",
            "latitude": "95.0",
            "longitude": "140.72",
        }))
        .unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn coordinates_are_optional() {
        let req: CreatePropertyAddressRequest = serde_json::from_value(serde_json::json!({
            "property_id": 1,
            "street_address": "1 Harbor Rd",
            "city": "Hakodate",
            "country": "Japan",
        }))
        .unwrap();
        assert!(req.validate(&()).is_ok());
    }
}
