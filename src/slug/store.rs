//! In-memory slug scope with an insert-if-absent uniqueness guard.

use std::collections::HashSet;
use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::resolve::{Persisted, SlugScope};

/// A thread-safe set of slugs for one scope.
///
/// `insert` plays the role of a persistence-layer uniqueness constraint:
/// it refuses a slug that is already present, so two writers that both
/// resolved the same "free" slug cannot both store it.
#[derive(Debug, Default)]
pub struct MemorySlugStore {
    slugs: Mutex<HashSet<String>>,
}

impl MemorySlugStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing slugs.
    pub fn with_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: Mutex::new(slugs.into_iter().map(Into::into).collect()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.slugs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `slug`, returning false if it was already taken.
    pub fn insert(&self, slug: &str) -> bool {
        self.lock().insert(slug.to_string())
    }

    /// [`insert`](Self::insert) as a persist step for
    /// [`assign_slug`](super::assign_slug).
    pub fn persist(&self, slug: &str) -> Result<Persisted<()>, Infallible> {
        Ok(if self.insert(slug) {
            Persisted::Stored(())
        } else {
            Persisted::Conflict
        })
    }

    /// Release a slug, as when its entry is deleted.
    pub fn remove(&self, slug: &str) -> bool {
        self.lock().remove(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.lock().contains(slug)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All stored slugs, sorted.
    pub fn slugs(&self) -> Vec<String> {
        let mut slugs: Vec<_> = self.lock().iter().cloned().collect();
        slugs.sort();
        slugs
    }
}

impl SlugScope for MemorySlugStore {
    type Error = Infallible;

    fn exists(&self, slug: &str) -> Result<bool, Infallible> {
        Ok(self.contains(slug))
    }
}
