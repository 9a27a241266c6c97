use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::property_amenity::{
    attach_amenity, detach_amenity, replace_amenity, show_property_amenities,
};

pub fn build_property_amenity_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(attach_amenity))
        .route("/", put(replace_amenity))
        .route("/", delete(detach_amenity))
        .route("/property/:property_id", get(show_property_amenities));

    Router::new().nest("/property_amenities", routers)
}
