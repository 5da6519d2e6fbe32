//! `AppState` builders for tests

use std::sync::Arc;
use std::time::{Duration, Instant};

use cinerate::egui_app::{AppState, AuthGateway, CatalogSource, Config, DiagnosticsLog, MemoryTokenStore};
use cinerate::shared::AppConfig;

use super::fakes::{FixedCatalog, ScriptedGateway};

/// Longest a test waits for a background call
pub const PUMP_TIMEOUT: Duration = Duration::from_secs(5);

/// State wired to the given fakes; the token store is returned for inspection
pub fn app_with(
    app: AppConfig,
    gateway: Arc<dyn AuthGateway>,
    catalog: Arc<dyn CatalogSource>,
) -> (AppState, MemoryTokenStore) {
    let tokens = MemoryTokenStore::new();
    let config = Config::with_store(app, Arc::new(tokens.clone()));
    let state = AppState::with_services(config, gateway, catalog, DiagnosticsLog::new(50));
    (state, tokens)
}

/// Default configuration, offline catalog
pub fn app_with_gateway(gateway: Arc<ScriptedGateway>) -> (AppState, MemoryTokenStore) {
    app_with(AppConfig::default(), gateway, Arc::new(FixedCatalog::offline()))
}

/// Run frame updates until `done` holds; false on timeout
pub fn pump_until(state: &mut AppState, done: impl Fn(&AppState) -> bool) -> bool {
    let started = Instant::now();
    loop {
        state.update();
        if done(state) {
            return true;
        }
        if started.elapsed() > PUMP_TIMEOUT {
            return false;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}
