use std::sync::Arc;

use crate::config::Config;
use crate::sheets::RowStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RowStore>,
    /// Bundled CSS inlined into the form page. Empty when no
    /// `styles.html` was generated.
    pub inline_css: String,
}
