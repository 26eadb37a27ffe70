//! Slug uniqueness resolution against a persisted scope.
//!
//! Resolution is check-then-act: nothing is locked between the lookup that
//! finds a free slug and the write that stores it. The store's uniqueness
//! constraint on (scope, slug) is the real guarantee; [`assign_slug`] turns
//! a constraint violation into a bounded retry.

use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;

use crate::config::SlugConfig;
use crate::error::{Error, Result};

/// The set of existing slugs a new slug must not collide with.
pub trait SlugScope {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether `slug` is already taken in this scope.
    fn exists(&self, slug: &str) -> std::result::Result<bool, Self::Error>;
}

impl SlugScope for HashSet<String> {
    type Error = Infallible;

    fn exists(&self, slug: &str) -> std::result::Result<bool, Infallible> {
        Ok(self.contains(slug))
    }
}

impl SlugScope for BTreeSet<String> {
    type Error = Infallible;

    fn exists(&self, slug: &str) -> std::result::Result<bool, Infallible> {
        Ok(self.contains(slug))
    }
}

impl<S: SlugScope + ?Sized> SlugScope for &S {
    type Error = S::Error;

    fn exists(&self, slug: &str) -> std::result::Result<bool, S::Error> {
        (**self).exists(slug)
    }
}

/// Format the variant of `candidate` for a counter value.
///
/// Counter 0 is the bare candidate; `n` gives `"{candidate}-{n}"`.
pub fn slug_variant(candidate: &str, counter: u32) -> String {
    if counter == 0 {
        candidate.to_string()
    } else {
        format!("{candidate}-{counter}")
    }
}

/// Find a variant of `candidate` not present in `scope`.
///
/// Probes `candidate`, then `candidate-1`, `candidate-2`, ... and returns
/// the first free one.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use blockdoc::resolve_unique_slug;
///
/// let scope: HashSet<String> = ["post", "post-1", "post-2"].map(String::from).into();
/// assert_eq!(resolve_unique_slug("post", &scope).unwrap(), "post-3");
/// assert_eq!(resolve_unique_slug("news", &scope).unwrap(), "news");
/// ```
pub fn resolve_unique_slug<S: SlugScope + ?Sized>(candidate: &str, scope: &S) -> Result<String> {
    resolve_from_seed(candidate, scope, 0, &SlugConfig::default()).map(|(slug, _)| slug)
}

/// Resolve starting at counter `seed`, returning the slug and its counter.
///
/// Gives up with [`Error::SlugExhausted`] after `config.max_probes` lookups.
pub fn resolve_from_seed<S: SlugScope + ?Sized>(
    candidate: &str,
    scope: &S,
    seed: u32,
    config: &SlugConfig,
) -> Result<(String, u32)> {
    let mut counter = seed;
    for _ in 0..config.max_probes {
        let slug = slug_variant(candidate, counter);
        if !scope.exists(&slug).map_err(Error::store)? {
            return Ok((slug, counter));
        }
        log::debug!("slug '{slug}' taken, probing next variant");
        counter = counter.checked_add(1).ok_or_else(|| Error::SlugExhausted {
            candidate: candidate.to_string(),
            probes: config.max_probes,
        })?;
    }

    Err(Error::SlugExhausted {
        candidate: candidate.to_string(),
        probes: config.max_probes,
    })
}

/// Outcome of trying to persist a chosen slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted<T> {
    /// The write succeeded.
    Stored(T),
    /// The store's uniqueness constraint rejected the slug.
    Conflict,
}

/// A slug that was resolved and successfully persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assigned<T> {
    pub slug: String,
    /// Whatever the persist step returned (e.g. the stored row).
    pub value: T,
    /// Persist attempts made, 1 when the first choice stuck.
    pub attempts: u32,
}

/// Resolve a unique slug and persist it, retrying on conflicts.
///
/// After a conflict the resolver re-runs from the rejected counter plus one.
/// At most `config.max_retries` retries follow the first attempt; after
/// that the call fails with [`Error::SlugConflict`].
pub fn assign_slug<S, T, E, F>(
    candidate: &str,
    scope: &S,
    config: &SlugConfig,
    mut persist: F,
) -> Result<Assigned<T>>
where
    S: SlugScope + ?Sized,
    E: std::error::Error + Send + Sync + 'static,
    F: FnMut(&str) -> std::result::Result<Persisted<T>, E>,
{
    if candidate.is_empty() {
        return Err(Error::EmptySlug);
    }

    let mut seed = 0;
    let mut last = candidate.to_string();
    for attempt in 1..=config.max_retries.saturating_add(1) {
        let (slug, counter) = resolve_from_seed(candidate, scope, seed, config)?;
        match persist(&slug).map_err(Error::store)? {
            Persisted::Stored(value) => {
                return Ok(Assigned {
                    slug,
                    value,
                    attempts: attempt,
                });
            }
            Persisted::Conflict => {
                log::warn!("slug '{slug}' rejected by store on attempt {attempt}, retrying");
                seed = counter.saturating_add(1);
                last = slug;
            }
        }
    }

    Err(Error::SlugConflict {
        slug: last,
        attempts: config.max_retries.saturating_add(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn scope(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_free_candidate_returned_as_is() {
        assert_eq!(resolve_unique_slug("post", &scope(&[])).unwrap(), "post");
    }

    #[test]
    fn test_probes_past_taken_variants() {
        let taken = scope(&["post", "post-1", "post-2"]);
        assert_eq!(resolve_unique_slug("post", &taken).unwrap(), "post-3");
    }

    #[test]
    fn test_gap_is_reused() {
        let taken = scope(&["post", "post-2"]);
        assert_eq!(resolve_unique_slug("post", &taken).unwrap(), "post-1");
    }

    #[test]
    fn test_btree_scope() {
        let taken: BTreeSet<String> = ["a".to_string()].into();
        assert_eq!(resolve_unique_slug("a", &taken).unwrap(), "a-1");
    }

    #[test]
    fn test_resolve_from_seed_skips_lower_counters() {
        let taken = scope(&["post-1"]);
        let (slug, counter) = resolve_from_seed("post", &taken, 1, &SlugConfig::default()).unwrap();
        assert_eq!((slug.as_str(), counter), ("post-2", 2));
    }

    struct Everything;

    impl SlugScope for Everything {
        type Error = Infallible;

        fn exists(&self, _slug: &str) -> std::result::Result<bool, Infallible> {
            Ok(true)
        }
    }

    #[test]
    fn test_probe_cap() {
        let config = SlugConfig::default().with_max_probes(5);
        let err = resolve_from_seed("x", &Everything, 0, &config).unwrap_err();
        assert!(matches!(err, Error::SlugExhausted { probes: 5, .. }));
    }

    #[derive(Debug, thiserror::Error)]
    #[error("database unavailable")]
    struct Down;

    struct Broken;

    impl SlugScope for Broken {
        type Error = Down;

        fn exists(&self, _slug: &str) -> std::result::Result<bool, Down> {
            Err(Down)
        }
    }

    #[test]
    fn test_scope_error_propagates() {
        let err = resolve_unique_slug("x", &Broken).unwrap_err();
        assert!(matches!(err, Error::Store(_)));
        assert_eq!(err.to_string(), "Slug store error: database unavailable");
    }

    #[test]
    fn test_assign_first_try() {
        let assigned = assign_slug("post", &scope(&["post"]), &SlugConfig::default(), |slug| {
            Ok::<_, Infallible>(Persisted::Stored(slug.len()))
        })
        .unwrap();
        assert_eq!(assigned.slug, "post-1");
        assert_eq!(assigned.value, 6);
        assert_eq!(assigned.attempts, 1);
    }

    #[test]
    fn test_assign_retries_after_conflict() {
        // The scope read is stale: "post" and "post-1" were taken concurrently.
        let stale = scope(&[]);
        let raced = scope(&["post", "post-1"]);
        let tried = std::cell::RefCell::new(Vec::new());

        let assigned = assign_slug("post", &stale, &SlugConfig::default(), |slug| {
            tried.borrow_mut().push(slug.to_string());
            Ok::<_, Infallible>(if raced.contains(slug) {
                Persisted::Conflict
            } else {
                Persisted::Stored(())
            })
        })
        .unwrap();

        assert_eq!(assigned.slug, "post-2");
        assert_eq!(assigned.attempts, 3);
        assert_eq!(*tried.borrow(), ["post", "post-1", "post-2"]);
    }

    #[test]
    fn test_assign_gives_up() {
        let calls = Cell::new(0);
        let config = SlugConfig::default().with_max_retries(2);
        let err = assign_slug("post", &scope(&[]), &config, |_| {
            calls.set(calls.get() + 1);
            Ok::<Persisted<()>, Infallible>(Persisted::Conflict)
        })
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        match err {
            Error::SlugConflict { slug, attempts } => {
                assert_eq!(slug, "post-2");
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_assign_rejects_empty_candidate() {
        let err = assign_slug("", &scope(&[]), &SlugConfig::default(), |_| {
            Ok::<_, Infallible>(Persisted::Stored(()))
        })
        .unwrap_err();
        assert!(matches!(err, Error::EmptySlug));
    }

    #[test]
    fn test_assign_persist_error() {
        let err = assign_slug("post", &scope(&[]), &SlugConfig::default(), |_| {
            Err::<Persisted<()>, _>(Down)
        })
        .unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }
}
