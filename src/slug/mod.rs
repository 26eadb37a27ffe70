//! Slug derivation and uniqueness.
//!
//! - [`derive_slug`]: pure title normalization to `[a-z0-9-]`
//! - [`resolve_unique_slug`]: advisory collision probing against a [`SlugScope`]
//! - [`assign_slug`]: resolve + persist with bounded retry on constraint
//!   violations
//! - [`MemorySlugStore`]: in-memory scope for tests and embedded use

mod resolve;
mod slugify;
mod store;

pub use resolve::{
    Assigned, Persisted, SlugScope, assign_slug, resolve_from_seed, resolve_unique_slug,
    slug_variant,
};
pub use slugify::{derive_slug, is_valid_slug};
pub use store::MemorySlugStore;
