use kernel::model::{
    id::{AmenityId, PropertyId},
    property_amenity::PropertyAmenity,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct PropertyAmenityRow {
    pub property_id: PropertyId,
    pub amenity_id: AmenityId,
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
}

impl From<PropertyAmenityRow> for PropertyAmenity {
    fn from(value: PropertyAmenityRow) -> Self {
        let PropertyAmenityRow {
            property_id,
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
        } = value;
        PropertyAmenity {
            property_id,
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
        }
    }
}
