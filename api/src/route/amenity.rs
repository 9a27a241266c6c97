use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::amenity::{
    delete_amenity, register_amenity, show_amenity, show_amenity_list, update_amenity,
};

pub fn build_amenity_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_amenity))
        .route("/", get(show_amenity_list))
        .route("/:amenity_id", get(show_amenity))
        .route("/:amenity_id", put(update_amenity))
        .route("/:amenity_id", delete(delete_amenity));

    Router::new().nest("/amenities", routers)
}
