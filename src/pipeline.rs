//! Create/update content pipeline.
//!
//! Raw editor JSON goes through the structural validator; an accepted
//! document is rendered to HTML, summarized into an excerpt (unless the
//! caller supplied one) and given a slug derived from its title. The first
//! three steps are pure. Slug uniqueness consults the caller's
//! [`SlugScope`].

use serde::Serialize;
use serde_json::Value;

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::render_with;
use crate::slug::{Assigned, Persisted, SlugScope, assign_slug, derive_slug, resolve_from_seed};
use crate::text::excerpt;
use crate::validate::parse_document;

/// Derived artifacts persisted alongside the raw document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub html_content: String,
    pub excerpt: String,
    pub slug: String,
}

/// A validated document with its pure derivations, before slug resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub document: Document,
    pub html_content: String,
    pub excerpt: String,
    /// Title-derived slug, not yet checked against any scope.
    pub candidate_slug: String,
}

impl Prepared {
    /// Finish with a resolved slug.
    pub fn into_projection(self, slug: String) -> Projection {
        Projection {
            html_content: self.html_content,
            excerpt: self.excerpt,
            slug,
        }
    }
}

/// Runs the derivation steps with one configuration.
#[derive(Debug, Clone, Default)]
pub struct ContentPipeline {
    config: PipelineConfig,
}

impl ContentPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with the specified configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Validate `content` and compute HTML, excerpt and candidate slug.
    ///
    /// Fails with [`Error::InvalidContent`] on a rejected document and
    /// [`Error::EmptySlug`] when the title has no usable characters.
    pub fn prepare(
        &self,
        content: &Value,
        title: &str,
        excerpt_override: Option<&str>,
    ) -> Result<Prepared> {
        let document = parse_document(content)?;

        let candidate_slug = derive_slug(title);
        if candidate_slug.is_empty() {
            return Err(Error::EmptySlug);
        }

        let html_content = render_with(&document, &self.config.render);
        let excerpt = match excerpt_override {
            Some(supplied) => supplied.to_string(),
            None => excerpt(&document, self.config.excerpt_length),
        };

        log::debug!(
            "prepared {} blocks: {} bytes html, slug candidate '{candidate_slug}'",
            document.len(),
            html_content.len()
        );

        Ok(Prepared {
            document,
            html_content,
            excerpt,
            candidate_slug,
        })
    }

    /// Full projection with an advisory uniqueness check against `scope`.
    ///
    /// The returned slug was free when looked up; the caller's write may
    /// still collide. Use [`create`](Self::create) to retry on collision.
    pub fn derive<S: SlugScope + ?Sized>(
        &self,
        content: &Value,
        title: &str,
        excerpt_override: Option<&str>,
        scope: &S,
    ) -> Result<Projection> {
        let prepared = self.prepare(content, title, excerpt_override)?;
        let (slug, _) = resolve_from_seed(&prepared.candidate_slug, scope, 0, &self.config.slug)?;
        Ok(prepared.into_projection(slug))
    }

    /// Derive the projection and persist it, retrying slug conflicts.
    ///
    /// `persist` receives the full projection and reports whether the
    /// store accepted its slug.
    pub fn create<S, T, E, F>(
        &self,
        content: &Value,
        title: &str,
        excerpt_override: Option<&str>,
        scope: &S,
        mut persist: F,
    ) -> Result<(Projection, T)>
    where
        S: SlugScope + ?Sized,
        E: std::error::Error + Send + Sync + 'static,
        F: FnMut(&Projection) -> std::result::Result<Persisted<T>, E>,
    {
        let Prepared {
            html_content,
            excerpt,
            candidate_slug,
            ..
        } = self.prepare(content, title, excerpt_override)?;

        let mut projection = Projection {
            html_content,
            excerpt,
            slug: String::new(),
        };

        let Assigned { slug, value, attempts } =
            assign_slug(&candidate_slug, scope, &self.config.slug, |slug| {
                projection.slug = slug.to_string();
                persist(&projection)
            })?;

        if attempts > 1 {
            log::debug!("slug '{slug}' stored after {attempts} attempts");
        }
        projection.slug = slug;
        Ok((projection, value))
    }
}
