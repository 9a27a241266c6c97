use chrono::{DateTime, Utc};
use kernel::model::{
    id::{PhotoId, PropertyId},
    photo::PropertyPhoto,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct PropertyPhotoRow {
    pub photo_id: PhotoId,
    pub property_id: PropertyId,
    pub photo_url: String,
    pub caption: Option<String>,
    pub is_cover_photo: bool,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}

impl From<PropertyPhotoRow> for PropertyPhoto {
    fn from(value: PropertyPhotoRow) -> Self {
        let PropertyPhotoRow {
            photo_id,
            property_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
            uploaded_at,
        } = value;
        PropertyPhoto {
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
