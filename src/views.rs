//! Page templates
//!
//! Every page extends `layout.html`, which renders the navigation from
//! `menu`, so each page struct carries the full list of links.

use askama::Template;
use axum::response::Html;

use crate::error::ApiError;
use crate::menu::MenuLink;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
}

#[derive(Template)]
#[template(path = "menu-list.html")]
pub struct MenuListPage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
}

#[derive(Template)]
#[template(path = "menu-add.html")]
pub struct MenuAddPage {
    pub title: &'static str,
    pub menu: Vec<MenuLink>,
}

pub fn render<T: Template>(page: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(page.render()?))
}
