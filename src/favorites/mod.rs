pub mod id_set;
pub mod reconciler;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use id_set::FavoriteIdSet;
pub use reconciler::{Reconciliation, SetReconciler};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::FavoriteStore;
