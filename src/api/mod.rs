mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Store;

pub fn create_router(store: Store) -> Router {
    let api = Router::new()
        // Target profile
        .route("/target", get(handlers::get_target))
        .route("/target", put(handlers::put_target))
        // Roster
        .route("/roster", get(handlers::list_roster))
        .route("/roster", post(handlers::add_candidate))
        .route("/roster/reorder", post(handlers::reorder_roster))
        .route("/roster/{index}", put(handlers::update_candidate))
        .route("/roster/{index}", delete(handlers::delete_candidate))
        .route("/coverage", get(handlers::get_coverage))
        // Reference data
        .route("/sizes", get(handlers::list_sizes))
        .route("/colors", get(handlers::list_colors))
        .route("/combinations", get(handlers::list_combinations))
        .route("/combinations", put(handlers::put_combination))
        .route("/ancestry/{color}", get(handlers::get_ancestry))
        // Trait recognition
        .route("/recognize", post(handlers::recognize))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
