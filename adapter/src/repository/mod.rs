pub mod amenity;
pub mod auth;
pub mod booking;
pub mod category;
pub mod check;
pub mod health;
pub mod house_rule;
pub mod photo;
pub mod property;
pub mod property_address;
pub mod property_amenity;
pub mod user;
pub mod user_address;
