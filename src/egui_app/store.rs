//! Catalog Store
//!
//! The single source of truth for the film list during a session. The list
//! is only ever replaced wholesale: readers hold an `Arc<[CatalogItem]>`
//! snapshot that never changes under them, and `generation` moves forward
//! each time the list reference is swapped.
//!
//! Refreshing is best effort. A failed fetch is logged and the previous list
//! stays in place.

use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use crate::egui_app::catalog_api::CatalogSource;
use crate::shared::catalog::{find_by_id, seed_items};
use crate::shared::{CatalogItem, ClientError, FilmId};

/// Result of a background catalog fetch
pub type RefreshResult = Result<Vec<CatalogItem>, ClientError>;

/// Read access to the catalog, plus the refresh trigger
///
/// Views depend on this rather than on `CatalogStore` itself.
pub trait CatalogAccess {
    /// Current list, in catalog order
    fn items(&self) -> Arc<[CatalogItem]>;
    /// Bumped every time the list reference changes
    fn generation(&self) -> u64;
    /// Start replacing the list from the remote source
    fn refresh(&mut self);

    /// Linear scan for the item with `id`
    fn find(&self, id: FilmId) -> Option<CatalogItem> {
        find_by_id(&self.items(), id).cloned()
    }
}

pub struct CatalogStore {
    items: Arc<[CatalogItem]>,
    generation: u64,
    source: Arc<dyn CatalogSource>,
    pending_refresh: Option<Receiver<RefreshResult>>,
}

impl CatalogStore {
    /// Start from the fixed seed list
    pub fn seeded(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_items(seed_items(), source)
    }

    pub fn with_items(items: Vec<CatalogItem>, source: Arc<dyn CatalogSource>) -> Self {
        Self {
            items: items.into(),
            generation: 0,
            source,
            pending_refresh: None,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.pending_refresh.is_some()
    }

    /// Apply a finished background refresh, if one is ready
    ///
    /// Returns `true` when the list reference changed.
    pub fn poll(&mut self) -> bool {
        let result = match self.pending_refresh {
            Some(ref rx) => match rx.try_recv() {
                Ok(result) => result,
                Err(std::sync::mpsc::TryRecvError::Empty) => return false,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    Err(ClientError::runtime("catalog refresh worker exited without a result"))
                }
            },
            None => return false,
        };

        self.pending_refresh = None;
        self.apply_refresh(result)
    }

    /// Replace the list with a fetched one, or keep the current list on error
    pub fn apply_refresh(&mut self, result: RefreshResult) -> bool {
        match result {
            Ok(items) => {
                if let Some(id) = first_duplicate_id(&items) {
                    tracing::warn!("Catalog refresh discarded: duplicate film id {}", id);
                    return false;
                }
                tracing::info!("Catalog refreshed: {} films", items.len());
                self.replace(items);
                true
            }
            Err(e) => {
                tracing::warn!("Catalog refresh failed, keeping {} cached films: {}", self.items.len(), e);
                false
            }
        }
    }

    fn replace(&mut self, items: Vec<CatalogItem>) {
        self.items = items.into();
        self.generation += 1;
    }
}

impl CatalogAccess for CatalogStore {
    fn items(&self) -> Arc<[CatalogItem]> {
        Arc::clone(&self.items)
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn refresh(&mut self) {
        if self.pending_refresh.is_some() {
            tracing::debug!("Catalog refresh already in flight, starting another");
        }

        let source = Arc::clone(&self.source);
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(source.fetch());
        });

        self.pending_refresh = Some(rx);
    }
}

fn first_duplicate_id(items: &[CatalogItem]) -> Option<FilmId> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(|item| item.id).find(|id| !seen.insert(*id))
}
