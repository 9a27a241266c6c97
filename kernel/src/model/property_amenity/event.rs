use crate::model::id::{AmenityId, PropertyId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreatePropertyAmenity {
    pub property_id: PropertyId,
    pub amenity_id: AmenityId,
}

/// Swaps one associated amenity for another on the same property.
#[derive(Debug, new)]
pub struct ReplacePropertyAmenity {
    pub property_id: PropertyId,
    pub old_amenity_id: AmenityId,
    pub new_amenity_id: AmenityId,
}

#[derive(Debug, new)]
pub struct DeletePropertyAmenity {
    pub property_id: PropertyId,
    pub amenity_id: AmenityId,
}
