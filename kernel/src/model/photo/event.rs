use crate::model::id::{PhotoId, PropertyId};

#[derive(Debug)]
pub struct CreatePropertyPhoto {
    pub property_id: PropertyId,
    pub photo_url: String,
    pub caption: Option<String>,
    pub is_cover_photo: bool,
    pub display_order: i32,
}

#[derive(Debug, Default)]
pub struct UpdatePropertyPhoto {
    pub photo_id: PhotoId,
    pub photo_url: Option<String>,
    pub caption: Option<String>,
    pub is_cover_photo: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdatePropertyPhoto {
    pub fn is_empty(&self) -> bool {
        self.photo_url.is_none()
            && self.caption.is_none()
            && self.is_cover_photo.is_none()
            && self.display_order.is_none()
    }
}
