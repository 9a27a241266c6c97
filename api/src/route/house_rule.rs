use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::house_rule::{
    delete_house_rule, register_house_rule, show_house_rule, show_house_rule_list,
    update_house_rule,
};

pub fn build_house_rule_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_house_rule))
        .route("/", get(show_house_rule_list))
        .route("/:rule_id", get(show_house_rule))
        .route("/:rule_id", put(update_house_rule))
        .route("/:rule_id", delete(delete_house_rule));

    Router::new().nest("/house_rules", routers)
}
