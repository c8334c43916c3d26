use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{render, AboutPage, HomePage};
use axum::{extract::State, response::Html};

/// GET / handler - Home page
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let menu = state.menu.list_links().await?;
    render(&HomePage { title: "Home", menu })
}

/// GET /about handler - About page
pub async fn about_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let menu = state.menu.list_links().await?;
    render(&AboutPage { title: "About", menu })
}
