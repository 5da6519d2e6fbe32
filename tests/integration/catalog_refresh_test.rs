//! Catalog store refreshes through `AppState`

use std::sync::Arc;

use pretty_assertions::assert_eq;

use cinerate::egui_app::CatalogAccess;
use cinerate::shared::{AppConfig, CatalogItem, ClientError};

use crate::common::{app_with, pump_until, FixedCatalog, ScriptedGateway};

fn refreshing_config() -> AppConfig {
    AppConfig {
        refresh_on_start: true,
        ..AppConfig::default()
    }
}

fn gateway() -> Arc<ScriptedGateway> {
    Arc::new(ScriptedGateway::accepting("unused"))
}

#[test]
fn test_starts_from_seed_without_refresh() {
    let (state, _) = app_with(AppConfig::default(), gateway(), Arc::new(FixedCatalog::offline()));
    let titles: Vec<_> = state.catalog().items().iter().map(|i| i.title.clone()).collect();
    assert_eq!(titles, vec!["Silence of the Lambs", "The Shawshank Redemption"]);
    assert_eq!(state.catalog().generation(), 0);
    assert!(!state.is_refreshing_catalog());
}

#[test]
fn test_refresh_on_start_replaces_list() {
    let films = vec![
        CatalogItem::new(10, "Ran"),
        CatalogItem::new(11, "Ikiru"),
        CatalogItem::new(12, "Rashomon"),
    ];
    let (mut state, _) = app_with(refreshing_config(), gateway(), Arc::new(FixedCatalog::films(films)));

    assert!(pump_until(&mut state, |s| s.catalog().generation() == 1));
    assert_eq!(state.catalog().items().len(), 3);
    assert_eq!(state.catalog().find(11).map(|i| i.title), Some("Ikiru".to_string()));
    assert!(!state.is_refreshing_catalog());
}

#[test]
fn test_failed_refresh_keeps_seed() {
    let source = FixedCatalog::failing(ClientError::rejected(503, None));
    let (mut state, _) = app_with(refreshing_config(), gateway(), Arc::new(source));

    assert!(pump_until(&mut state, |s| !s.is_refreshing_catalog()));
    assert_eq!(state.catalog().generation(), 0);
    assert_eq!(state.catalog().items().len(), 2);
}

#[test]
fn test_duplicate_ids_rejected() {
    let films = vec![CatalogItem::new(3, "Ran"), CatalogItem::new(3, "Ran again")];
    let (mut state, _) = app_with(refreshing_config(), gateway(), Arc::new(FixedCatalog::films(films)));

    assert!(pump_until(&mut state, |s| !s.is_refreshing_catalog()));
    assert_eq!(state.catalog().generation(), 0);
    assert_eq!(state.catalog().items()[0].title, "Silence of the Lambs");
}

#[test]
fn test_manual_refresh_through_use_catalog() {
    let films = vec![CatalogItem::new(7, "Heat")];
    let (mut state, _) = app_with(AppConfig::default(), gateway(), Arc::new(FixedCatalog::films(films)));

    let before = state.use_catalog().items();
    state.use_catalog().refresh();
    assert!(pump_until(&mut state, |s| s.catalog().generation() == 1));

    let after = state.use_catalog().items();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after[0].title, "Heat");
}

#[test]
fn test_items_reference_stable_between_refreshes() {
    let (mut state, _) = app_with(AppConfig::default(), gateway(), Arc::new(FixedCatalog::offline()));
    state.update();
    let first = state.use_catalog().items();
    state.update();
    let second = state.use_catalog().items();
    assert!(Arc::ptr_eq(&first, &second));
}
