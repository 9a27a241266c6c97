use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user_address::{
    delete_user_address, register_user_address, show_user_address, show_user_address_list,
    update_user_address,
};

pub fn build_user_address_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_user_address))
        .route("/", get(show_user_address_list))
        .route("/:address_id", get(show_user_address))
        .route("/:address_id", put(update_user_address))
        .route("/:address_id", delete(delete_user_address));

    Router::new().nest("/user_addresses", routers)
}
