use crate::model::id::{AmenityId, PropertyId};

pub mod event;

/// An amenity attached to a property, with the amenity's own details joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAmenity {
    pub property_id: PropertyId,
    pub amenity_id: AmenityId,
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
}
