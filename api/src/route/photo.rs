use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::photo::{
    delete_property_photo, register_property_photo, show_property_photo, show_property_photo_list,
    update_property_photo,
};

pub fn build_photo_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_property_photo))
        .route("/", get(show_property_photo_list))
        .route("/:photo_id", get(show_property_photo))
        .route("/:photo_id", put(update_property_photo))
        .route("/:photo_id", delete(delete_property_photo));

    Router::new().nest("/property_photos", routers)
}
