use crate::config::Config;
use crate::menu::MenuStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<dyn MenuStore>,
    pub config: Arc<Config>,
}
