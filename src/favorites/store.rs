use super::id_set::FavoriteIdSet;
use super::storage::KeyValueStore;
use crate::core::constants::FAVORITES_STORAGE_KEY;
use crate::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Persisted favorite-camera set with a write-through session cache.
///
/// The set is read lazily on first access. Every mutation holds the cache lock
/// for the whole read-modify-persist cycle, so concurrent add/remove calls are
/// applied one after another and none is lost. The cache only changes after
/// the backing store confirmed the write.
pub struct FavoriteStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    cache: Mutex<Option<FavoriteIdSet>>,
}

impl FavoriteStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, FAVORITES_STORAGE_KEY)
    }

    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            cache: Mutex::new(None),
        }
    }

    /// Current favorites. Storage failures yield an empty set and are logged.
    pub async fn load(&self) -> FavoriteIdSet {
        let mut cache = self.cache.lock().await;
        if let Some(set) = cache.as_ref() {
            return set.clone();
        }
        self.fill_cache(&mut cache).await
    }

    /// Drops the session cache and reads the backing store again.
    pub async fn reload(&self) -> FavoriteIdSet {
        let mut cache = self.cache.lock().await;
        *cache = None;
        self.fill_cache(&mut cache).await
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.load().await.contains(id)
    }

    /// Puts `id` at the front of the set and persists it. Returns the new set.
    pub async fn add(&self, id: &str) -> Result<FavoriteIdSet> {
        self.mutate(|set| set.insert_front(id)).await
    }

    /// Removes `id` and persists the result. Returns the new set.
    pub async fn remove(&self, id: &str) -> Result<FavoriteIdSet> {
        self.mutate(|set| set.remove(id)).await
    }

    /// Adds `id` when absent, removes it otherwise. Returns whether it is now a favorite.
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let set = self
            .mutate(|set| {
                if set.contains(id) {
                    set.remove(id)
                } else {
                    set.insert_front(id)
                }
            })
            .await?;
        Ok(set.contains(id))
    }

    async fn fill_cache(&self, cache: &mut Option<FavoriteIdSet>) -> FavoriteIdSet {
        match self.read_backend().await {
            Ok(set) => {
                *cache = Some(set.clone());
                set
            }
            Err(e) => {
                // Not cached: the next access retries the read.
                log::error!("failed to read favorites from storage: {}", e);
                FavoriteIdSet::new()
            }
        }
    }

    /// Unparseable data reads as an empty set; I/O failures are returned.
    async fn read_backend(&self) -> Result<FavoriteIdSet> {
        let Some(raw) = self.backend.get(&self.key).await? else {
            return Ok(FavoriteIdSet::new());
        };
        match serde_json::from_str::<FavoriteIdSet>(&raw) {
            Ok(set) => Ok(set),
            Err(e) => {
                log::warn!("discarding unreadable favorites record {:?}: {}", self.key, e);
                Ok(FavoriteIdSet::new())
            }
        }
    }

    async fn mutate<F>(&self, apply: F) -> Result<FavoriteIdSet>
    where
        F: FnOnce(&mut FavoriteIdSet) -> bool,
    {
        let mut cache = self.cache.lock().await;
        let mut next = match cache.as_ref() {
            Some(set) => set.clone(),
            None => self.read_backend().await?,
        };

        if !apply(&mut next) {
            *cache = Some(next.clone());
            return Ok(next);
        }

        let serialized = serde_json::to_string(&next)?;
        if let Err(e) = self.backend.set(&self.key, serialized).await {
            log::error!("failed to persist favorites: {}", e);
            return Err(e);
        }

        log::debug!("persisted {} favorites", next.len());
        *cache = Some(next.clone());
        Ok(next)
    }
}
