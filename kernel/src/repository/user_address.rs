use crate::model::{
    id::UserAddressId,
    list::ListOptions,
    user_address::{
        event::{CreateUserAddress, UpdateUserAddress},
        UserAddress,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserAddressRepository: Send + Sync {
    // Marking an address primary clears the flag on the user's other addresses.
    async fn create(&self, event: CreateUserAddress) -> AppResult<UserAddress>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<UserAddress>>;
    async fn find_by_id(&self, address_id: UserAddressId) -> AppResult<Option<UserAddress>>;
    async fn update(&self, event: UpdateUserAddress) -> AppResult<UserAddress>;
    async fn delete(&self, address_id: UserAddressId) -> AppResult<()>;
}
