use crate::model::id::{PropertyAddressId, PropertyId};
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct CreatePropertyAddress {
    pub property_id: PropertyId,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub neighborhood: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

#[derive(Debug, Default)]
pub struct UpdatePropertyAddress {
    pub address_id: PropertyAddressId,
    pub property_id: Option<PropertyId>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub neighborhood: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl UpdatePropertyAddress {
    pub fn is_empty(&self) -> bool {
        self.property_id.is_none()
            && self.street_address.is_none()
            && self.city.is_none()
            && self.state_province.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
            && self.neighborhood.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
    }
}
