use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{PhotoId, PropertyId},
    photo::{
        event::{CreatePropertyPhoto, UpdatePropertyPhoto},
        PropertyPhoto,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePropertyPhotoRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(length(chars, min = 1, max = 500))]
    pub photo_url: String,
    #[garde(length(chars, max = 255))]
    pub caption: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub is_cover_photo: bool,
    #[garde(skip)]
    #[serde(default)]
    pub display_order: i32,
}

impl From<CreatePropertyPhotoRequest> for CreatePropertyPhoto {
    fn from(value: CreatePropertyPhotoRequest) -> Self {
        let CreatePropertyPhotoRequest {
            property_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
        } = value;
        CreatePropertyPhoto {
            property_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePropertyPhotoRequest {
    #[garde(length(chars, min = 1, max = 500))]
    pub photo_url: Option<String>,
    #[garde(length(chars, max = 255))]
    pub caption: Option<String>,
    #[garde(skip)]
    pub is_cover_photo: Option<bool>,
    #[garde(skip)]
    pub display_order: Option<i32>,
}

#[derive(new)]
pub struct UpdatePropertyPhotoRequestWithId(PhotoId, UpdatePropertyPhotoRequest);

impl From<UpdatePropertyPhotoRequestWithId> for UpdatePropertyPhoto {
    fn from(value: UpdatePropertyPhotoRequestWithId) -> Self {
        let UpdatePropertyPhotoRequestWithId(
            photo_id,
            UpdatePropertyPhotoRequest {
                photo_url,
                caption,
                is_cover_photo,
                display_order,
            },
        ) = value;
        UpdatePropertyPhoto {
            photo_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyPhotoResponse {
    pub photo_id: PhotoId,
    pub property_id: PropertyId,
    pub photo_url: String,
    pub caption: Option<String>,
    pub is_cover_photo: bool,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}

impl From<PropertyPhoto> for PropertyPhotoResponse {
    fn from(value: PropertyPhoto) -> Self {
        let PropertyPhoto {
            photo_id,
            property_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
            uploaded_at,
        } = value;
        Self {
            photo_id,
            property_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
            uploaded_at,
        }
    }
}
