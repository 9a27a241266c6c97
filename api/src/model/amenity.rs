use super::{default_true, validate::opt_http_url};
use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    amenity::{
        event::{CreateAmenity, UpdateAmenity},
        Amenity,
    },
    id::AmenityId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmenityRequest {
    #[garde(length(chars, min = 1, max = 100))]
    pub amenity_name: String,
    #[garde(length(chars, min = 1, max = 50))]
    pub amenity_category: String,
    #[garde(custom(opt_http_url), length(chars, max = 500))]
    pub icon_url: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateAmenityRequest> for CreateAmenity {
    fn from(value: CreateAmenityRequest) -> Self {
        let CreateAmenityRequest {
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
        } = value;
        CreateAmenity {
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAmenityRequest {
    #[garde(length(chars, min = 1, max = 100))]
    pub amenity_name: Option<String>,
    #[garde(length(chars, min = 1, max = 50))]
    pub amenity_category: Option<String>,
    #[garde(custom(opt_http_url), length(chars, max = 500))]
    pub icon_url: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub is_active: Option<bool>,
}

#[derive(new)]
pub struct UpdateAmenityRequestWithId(AmenityId, UpdateAmenityRequest);

impl From<UpdateAmenityRequestWithId> for UpdateAmenity {
    fn from(value: UpdateAmenityRequestWithId) -> Self {
        let UpdateAmenityRequestWithId(
            amenity_id,
            UpdateAmenityRequest {
                amenity_name,
                amenity_category,
                icon_url,
                description,
                is_active,
            },
        ) = value;
        UpdateAmenity {
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AmenityResponse {
    pub amenity_id: AmenityId,
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Amenity> for AmenityResponse {
    fn from(value: Amenity) -> Self {
        let Amenity {
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
            created_at,
        } = value;
        Self {
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
            created_at,
        }
    }
}
