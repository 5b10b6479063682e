use super::id_set::FavoriteIdSet;
use super::store::FavoriteStore;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Outcome of comparing the persisted favorites with the last known set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// No favorites persisted; the camera list should be emptied without a fetch.
    Cleared,
    /// Same identifiers in the same order; nothing to do.
    Unchanged,
    /// The known set was replaced and the cameras must be refetched.
    Changed(FavoriteIdSet),
    /// The screen lost focus before the load finished; the result was dropped.
    Stale,
}

impl Reconciliation {
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Decides on every focus event whether the favorite cameras need refetching.
///
/// Comparison is positional: a reordered but otherwise identical persisted set
/// counts as changed.
pub struct SetReconciler {
    store: Arc<FavoriteStore>,
    known: FavoriteIdSet,
}

impl SetReconciler {
    pub fn new(store: Arc<FavoriteStore>) -> Self {
        Self {
            store,
            known: FavoriteIdSet::new(),
        }
    }

    /// Starts from an already displayed set instead of an empty one.
    pub fn with_known(store: Arc<FavoriteStore>, known: FavoriteIdSet) -> Self {
        Self { store, known }
    }

    pub fn known(&self) -> &FavoriteIdSet {
        &self.known
    }

    pub fn store(&self) -> &Arc<FavoriteStore> {
        &self.store
    }

    /// Forgets the known set so the next reconciliation refetches.
    pub fn forget(&mut self) {
        self.known = FavoriteIdSet::new();
    }

    pub async fn reconcile(&mut self, cancel: &CancellationToken) -> Reconciliation {
        let persisted = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("reconciliation cancelled while loading favorites");
                return Reconciliation::Stale;
            }
            set = self.store.load() => set,
        };

        if cancel.is_cancelled() {
            log::warn!("dropping favorites loaded after focus loss");
            return Reconciliation::Stale;
        }

        if persisted.is_empty() {
            self.known = persisted;
            return Reconciliation::Cleared;
        }

        if persisted == self.known {
            return Reconciliation::Unchanged;
        }

        log::debug!(
            "favorites changed ({} -> {} ids)",
            self.known.len(),
            persisted.len()
        );
        self.known = persisted.clone();
        Reconciliation::Changed(persisted)
    }
}
