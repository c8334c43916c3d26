pub mod health;
pub mod pages;
pub mod menu_admin;

pub use health::health_handler;
pub use pages::{about_handler, home_handler};
pub use menu_admin::{
    menu_add_handler, menu_add_submit_handler, menu_delete_handler, menu_list_handler,
};
