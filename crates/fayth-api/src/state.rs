use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use fayth_core::models::bundle::ReportBundle;

use crate::config::Config;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub bundles: Arc<Mutex<HashMap<Uuid, ReportBundle>>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            bundles: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// Store a new session, first evicting the least recently updated ones
    /// so the store never holds more than `max_sessions`.
    pub async fn insert_bundle(&self, bundle: ReportBundle) {
        let mut bundles = self.bundles.lock().await;
        while bundles.len() >= self.config.max_sessions {
            let Some(oldest) = bundles
                .values()
                .min_by_key(|b| b.updated_at)
                .map(|b| b.session_id)
            else {
                break;
            };
            bundles.remove(&oldest);
            tracing::info!(session_id = %oldest, "session evicted");
        }
        bundles.insert(bundle.session_id, bundle);
    }
}
