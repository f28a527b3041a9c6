use std::sync::Arc;

use crate::config::Config;
use crate::relay::NotificationSink;
use crate::theme::Theme;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sink: Arc<dyn NotificationSink>,
    pub theme: Theme,
}
