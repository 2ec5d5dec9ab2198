use std::sync::Arc;

use crate::backend::{BackendApi, BackendConfig};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
    pub config: BackendConfig,
}
