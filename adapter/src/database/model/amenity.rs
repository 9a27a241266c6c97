use chrono::{DateTime, Utc};
use kernel::model::{amenity::Amenity, id::AmenityId};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct AmenityRow {
    pub amenity_id: AmenityId,
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<AmenityRow> for Amenity {
    fn from(value: AmenityRow) -> Self {
        let AmenityRow {
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
            created_at,
        } = value;
        Amenity {
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
