use crate::error::ApiError;
use crate::menu::NewMenuLink;
use crate::models::{DeleteLinkQuery, LinkSubmission};
use crate::routes;
use crate::state::AppState;
use crate::views::{render, MenuAddPage, MenuListPage};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};

/// GET /admin/menu handler - List all menu links with delete actions
pub async fn menu_list_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let menu = state.menu.list_links().await?;
    render(&MenuListPage {
        title: "Administer menu",
        menu,
    })
}

/// GET /admin/menu/add handler - Show the add-link form
pub async fn menu_add_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let menu = state.menu.list_links().await?;
    render(&MenuAddPage {
        title: "Add menu link",
        menu,
    })
}

/// POST /admin/menu/add/submit handler - Store a new link
///
/// Accepts a urlencoded form or a JSON body. The weight must be a whole
/// number; anything else is a 400 and nothing is written.
pub async fn menu_add_submit_handler(
    State(state): State<AppState>,
    LinkSubmission(form): LinkSubmission,
) -> Result<Redirect, ApiError> {
    let link = NewMenuLink::try_from(form)?;

    state.menu.add_link(link).await?;

    Ok(Redirect::to(routes::ADMIN_MENU))
}

/// GET /admin/menu/delete?linkId=<id> handler - Remove a link
///
/// An id that matches nothing, or no id at all, still redirects; a malformed
/// id is a server error.
pub async fn menu_delete_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteLinkQuery>,
) -> Result<Redirect, ApiError> {
    match query.link_id {
        Some(link_id) => {
            state.menu.delete_link(&link_id).await?;
        }
        None => tracing::debug!("Delete requested without linkId, nothing deleted"),
    }

    Ok(Redirect::to(routes::ADMIN_MENU))
}
