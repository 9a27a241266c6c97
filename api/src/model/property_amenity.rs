use garde::Validate;
use kernel::model::{
    id::{AmenityId, PropertyId},
    property_amenity::{
        event::{CreatePropertyAmenity, DeletePropertyAmenity, ReplacePropertyAmenity},
        PropertyAmenity,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePropertyAmenityRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(skip)]
    pub amenity_id: AmenityId,
}

impl From<CreatePropertyAmenityRequest> for CreatePropertyAmenity {
    fn from(value: CreatePropertyAmenityRequest) -> Self {
        CreatePropertyAmenity::new(value.property_id, value.amenity_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct PropertyIdQuery {
    pub property_id: PropertyId,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplacePropertyAmenityRequest {
    #[garde(skip)]
    pub old_amenity_id: AmenityId,
    #[garde(skip)]
    pub new_amenity_id: AmenityId,
}

impl ReplacePropertyAmenityRequest {
    pub fn into_event(self, property_id: PropertyId) -> ReplacePropertyAmenity {
        ReplacePropertyAmenity::new(property_id, self.old_amenity_id, self.new_amenity_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct DeletePropertyAmenityQuery {
    pub property_id: PropertyId,
    pub amenity_id: AmenityId,
}

impl From<DeletePropertyAmenityQuery> for DeletePropertyAmenity {
    fn from(value: DeletePropertyAmenityQuery) -> Self {
        DeletePropertyAmenity::new(value.property_id, value.amenity_id)
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyAmenityResponse {
    pub property_id: PropertyId,
    pub amenity_id: AmenityId,
    pub amenity_name: String,
    pub amenity_category: String,
    pub icon_url: Option<String>,
}

impl From<PropertyAmenity> for PropertyAmenityResponse {
    fn from(value: PropertyAmenity) -> Self {
        let PropertyAmenity {
            property_id,
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
        } = value;
        Self {
            property_id,
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_carries_the_property_from_the_query() {
        let req: ReplacePropertyAmenityRequest =
            serde_json::from_str(r#"{"old_amenity_id": 3, "new_amenity_id": 7}"#).unwrap();
        let event = req.into_event(PropertyId::new(12));
        assert_eq!(event.property_id, PropertyId::new(12));
        assert_eq!(event.old_amenity_id, AmenityId::new(3));
        assert_eq!(event.new_amenity_id, AmenityId::new(7));
    }
}
