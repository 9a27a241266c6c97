use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::property_address::{
    delete_property_address, register_property_address, show_property_address,
    show_property_address_list, update_property_address,
};

pub fn build_property_address_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_property_address))
        .route("/", get(show_property_address_list))
        .route("/:address_id", get(show_property_address))
        .route("/:address_id", put(update_property_address))
        .route("/:address_id", delete(delete_property_address));

    Router::new().nest("/property_addreses", routers)
}
