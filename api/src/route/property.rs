use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::property::{
    delete_property, register_property, show_property, show_property_list, update_property,
};

pub fn build_property_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_property))
        .route("/", get(show_property_list))
        .route("/:property_id", get(show_property))
        .route("/:property_id", put(update_property))
        .route("/:property_id", delete(delete_property));

    Router::new().nest("/property", routers)
}
