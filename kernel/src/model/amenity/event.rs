use crate::model::id::AmenityId;

#[derive(Debug)]
pub struct CreateAmenity {
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Default)]
pub struct UpdateAmenity {
    pub amenity_id: AmenityId,
    pub amenity_name: Option<String>,
    pub amenity_category: Option<String>,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateAmenity {
    pub fn is_empty(&self) -> bool {
        self.amenity_name.is_none()
            && self.amenity_category.is_none()
            && self.icon_url.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
    }
}
