use crate::model::id::{PhotoId, PropertyId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPhoto {
    pub photo_id: PhotoId,
    pub property_id: PropertyId,
    pub photo_url: String,
    pub caption: Option<String>,
    pub is_cover_photo: bool,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}
