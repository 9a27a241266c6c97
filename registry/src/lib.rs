use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    amenity::AmenityRepositoryImpl, auth::AuthRepositoryImpl, booking::BookingRepositoryImpl,
    category::CategoryRepositoryImpl, health::HealthCheckRepositoryImpl,
    house_rule::HouseRuleRepositoryImpl, photo::PropertyPhotoRepositoryImpl,
    property::PropertyRepositoryImpl, property_address::PropertyAddressRepositoryImpl,
    property_amenity::PropertyAmenityRepositoryImpl, user::UserRepositoryImpl,
    user_address::UserAddressRepositoryImpl,
};
use kernel::repository::{
    amenity::AmenityRepository, auth::AuthRepository, booking::BookingRepository,
    category::CategoryRepository, health::HealthCheckRepository, house_rule::HouseRuleRepository,
    photo::PropertyPhotoRepository, property::PropertyRepository,
    property_address::PropertyAddressRepository, property_amenity::PropertyAmenityRepository,
    user::UserRepository, user_address::UserAddressRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    user_address_repository: Arc<dyn UserAddressRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    property_repository: Arc<dyn PropertyRepository>,
    property_address_repository: Arc<dyn PropertyAddressRepository>,
    amenity_repository: Arc<dyn AmenityRepository>,
    property_amenity_repository: Arc<dyn PropertyAmenityRepository>,
    property_photo_repository: Arc<dyn PropertyPhotoRepository>,
    house_rule_repository: Arc<dyn HouseRuleRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        Self {
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            auth_repository: Arc::new(AuthRepositoryImpl::new(&app_config.auth)),
            user_repository: Arc::new(UserRepositoryImpl::new(pool.clone())),
            user_address_repository: Arc::new(UserAddressRepositoryImpl::new(pool.clone())),
            category_repository: Arc::new(CategoryRepositoryImpl::new(pool.clone())),
            property_repository: Arc::new(PropertyRepositoryImpl::new(pool.clone())),
            property_address_repository: Arc::new(PropertyAddressRepositoryImpl::new(
                pool.clone(),
            )),
            amenity_repository: Arc::new(AmenityRepositoryImpl::new(pool.clone())),
            property_amenity_repository: Arc::new(PropertyAmenityRepositoryImpl::new(
                pool.clone(),
            )),
            property_photo_repository: Arc::new(PropertyPhotoRepositoryImpl::new(pool.clone())),
            house_rule_repository: Arc::new(HouseRuleRepositoryImpl::new(pool.clone())),
            booking_repository: Arc::new(BookingRepositoryImpl::new(pool)),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn user_address_repository(&self) -> Arc<dyn UserAddressRepository> {
        self.user_address_repository.clone()
    }

    pub fn category_repository(&self) -> Arc<dyn CategoryRepository> {
        self.category_repository.clone()
    }

    pub fn property_repository(&self) -> Arc<dyn PropertyRepository> {
        self.property_repository.clone()
    }

    pub fn property_address_repository(&self) -> Arc<dyn PropertyAddressRepository> {
        self.property_address_repository.clone()
    }

    pub fn amenity_repository(&self) -> Arc<dyn AmenityRepository> {
        self.amenity_repository.clone()
    }

    pub fn property_amenity_repository(&self) -> Arc<dyn PropertyAmenityRepository> {
        self.property_amenity_repository.clone()
    }

    pub fn property_photo_repository(&self) -> Arc<dyn PropertyPhotoRepository> {
        self.property_photo_repository.clone()
    }

    pub fn house_rule_repository(&self) -> Arc<dyn HouseRuleRepository> {
        self.house_rule_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }
}
