use fxhash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};

/// Bookmarked camera identifiers, most recently added first.
///
/// Identifiers are unique. Equality is positional: two sets holding the same
/// identifiers in a different order are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FavoriteIdSet {
    ids: Vec<String>,
}

impl FavoriteIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Puts `id` in front. Returns `false` when it was already present.
    pub fn insert_front(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.insert(0, id);
        true
    }

    /// Returns `false` when `id` was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Ordered groups of at most `cap` identifiers.
    pub fn chunks(&self, cap: usize) -> std::slice::Chunks<'_, String> {
        self.ids.chunks(cap.max(1))
    }
}

impl FromIterator<String> for FavoriteIdSet {
    /// Keeps the first occurrence of each identifier.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = FxHashSet::default();
        let ids = iter
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }
}

impl<'a> FromIterator<&'a str> for FavoriteIdSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl<'de> Deserialize<'de> for FavoriteIdSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Vec::<String>::deserialize(deserializer)?.into_iter().collect())
    }
}
