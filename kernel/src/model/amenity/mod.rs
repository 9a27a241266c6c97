use crate::model::id::AmenityId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    pub amenity_id: AmenityId,
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
