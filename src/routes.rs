// Route path constants - single source of truth for all site paths

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const HEALTH: &str = "/health";
pub const ADMIN_MENU: &str = "/admin/menu";
pub const ADMIN_MENU_ADD: &str = "/admin/menu/add";
pub const ADMIN_MENU_ADD_SUBMIT: &str = "/admin/menu/add/submit";
pub const ADMIN_MENU_DELETE: &str = "/admin/menu/delete";

/// Build the full site router
pub fn router(state: AppState) -> Router {
    // Anything no route claims is looked up in the public directory, so
    // `public/css/styles.css` is served at `/css/styles.css`
    let public_dir = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route(HOME, get(handlers::home_handler))
        .route(ABOUT, get(handlers::about_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(ADMIN_MENU, get(handlers::menu_list_handler))
        .route(ADMIN_MENU_ADD, get(handlers::menu_add_handler))
        .route(ADMIN_MENU_ADD_SUBMIT, post(handlers::menu_add_submit_handler))
        .route(ADMIN_MENU_DELETE, get(handlers::menu_delete_handler))
        .fallback_service(public_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
