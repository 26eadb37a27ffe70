//! Error types for blockdoc operations.

use thiserror::Error;

/// Errors that can occur while validating, rendering or assigning slugs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The candidate document failed structural validation.
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// The renderer was handed something that is not a block sequence.
    #[error("Rendering fault: {0}")]
    Rendering(String),

    /// The title normalized to an empty slug.
    #[error("Title does not produce a usable slug")]
    EmptySlug,

    /// Persistence kept rejecting the chosen slug.
    #[error("Slug conflict for '{slug}' after {attempts} attempts")]
    SlugConflict { slug: String, attempts: u32 },

    /// The resolver hit its probe cap without finding a free slug.
    #[error("No free slug for '{candidate}' within {probes} probes")]
    SlugExhausted { candidate: String, probes: u32 },

    /// The slug scope lookup or insert failed.
    #[error("Slug store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a persistence-layer error.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Store(Box::new(err))
    }

    /// Whether the caller should report this as a client-side content error.
    pub fn is_invalid_content(&self) -> bool {
        matches!(self, Error::InvalidContent(_) | Error::EmptySlug)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
