use axum::Router;
use registry::AppRegistry;

pub mod amenity;
pub mod booking;
pub mod category;
pub mod health;
pub mod house_rule;
pub mod photo;
pub mod property;
pub mod property_address;
pub mod property_amenity;
pub mod user;
pub mod user_address;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(user::build_user_routers())
        .merge(user_address::build_user_address_routers())
        .merge(category::build_category_routers())
        .merge(property::build_property_routers())
        .merge(property_address::build_property_address_routers())
        .merge(amenity::build_amenity_routers())
        .merge(property_amenity::build_property_amenity_routers())
        .merge(photo::build_photo_routers())
        .merge(house_rule::build_house_rule_routers())
        .merge(booking::build_booking_routers())
}
