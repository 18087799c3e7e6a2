use std::sync::Arc;

use crate::config::Config;
use crate::store::InquiryStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: InquiryStore,
}
