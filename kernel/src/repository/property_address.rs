use crate::model::{
    id::PropertyAddressId,
    list::ListOptions,
    property_address::{
        event::{CreatePropertyAddress, UpdatePropertyAddress},
        PropertyAddress,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyAddressRepository: Send + Sync {
    async fn create(&self, event: CreatePropertyAddress) -> AppResult<PropertyAddress>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<PropertyAddress>>;
    async fn find_by_id(
        &self,
        address_id: PropertyAddressId,
    ) -> AppResult<Option<PropertyAddress>>;
    async fn update(&self, event: UpdatePropertyAddress) -> AppResult<PropertyAddress>;
    async fn delete(&self, address_id: PropertyAddressId) -> AppResult<()>;
}
