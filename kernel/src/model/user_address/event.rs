use super::AddressType;
use crate::model::id::{UserAddressId, UserId};

#[derive(Debug)]
pub struct CreateUserAddress {
    pub user_id: UserId,
    pub address_type: AddressType,
    pub street_address: String,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub is_primary: bool,
}

#[derive(Debug, Default)]
pub struct UpdateUserAddress {
    pub address_id: UserAddressId,
    pub address_type: Option<AddressType>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_primary: Option<bool>,
}

impl UpdateUserAddress {
    pub fn is_empty(&self) -> bool {
        self.address_type.is_none()
            && self.street_address.is_none()
            && self.city.is_none()
            && self.state_province.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
            && self.is_primary.is_none()
    }
}
