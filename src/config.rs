//! Pipeline configuration.
//!
//! All configs deserialize from JSON with every key optional, so a config
//! file only needs to name what it overrides.

use serde::{Deserialize, Serialize};

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// Configuration for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Deepest nesting level rendered. Top-level blocks are depth 0;
    /// children past this depth are dropped.
    pub max_depth: usize,
    /// Wrap runs of consecutive top-level list items in `<ul>`/`<ol>`.
    pub group_lists: bool,
    /// Separator between rendered top-level blocks.
    pub block_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            group_lists: false,
            block_separator: "\n".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_group_lists(mut self, group_lists: bool) -> Self {
        self.group_lists = group_lists;
        self
    }

    pub fn with_block_separator(mut self, separator: impl Into<String>) -> Self {
        self.block_separator = separator.into();
        self
    }
}

/// Configuration for slug assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlugConfig {
    /// Re-resolutions allowed after the store rejects a slug.
    pub max_retries: u32,
    /// Scope lookups allowed per resolution.
    pub max_probes: u32,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            max_probes: 10_000,
        }
    }
}

impl SlugConfig {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_max_probes(mut self, max_probes: u32) -> Self {
        self.max_probes = max_probes;
        self
    }
}

/// Configuration for the full content pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    pub render: RenderConfig,
    pub excerpt_length: usize,
    pub slug: SlugConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            slug: SlugConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }

    pub fn with_slug(mut self, slug: SlugConfig) -> Self {
        self.slug = slug;
        self
    }

    /// Parse a JSON config, filling unspecified keys with defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.excerpt_length, 200);
        assert_eq!(config.render.max_depth, 32);
        assert!(!config.render.group_lists);
        assert_eq!(config.render.block_separator, "\n");
        assert_eq!(config.slug.max_retries, 3);
    }

    #[test]
    fn test_partial_json() {
        let config =
            PipelineConfig::from_json(r#"{"excerptLength": 80, "render": {"groupLists": true}}"#)
                .unwrap();
        assert_eq!(config.excerpt_length, 80);
        assert!(config.render.group_lists);
        assert_eq!(config.render.max_depth, 32);
        assert_eq!(config.slug, SlugConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::new()
            .with_excerpt_length(50)
            .with_render(RenderConfig::new().with_max_depth(4).with_block_separator(""))
            .with_slug(SlugConfig::default().with_max_retries(1).with_max_probes(9));
        assert_eq!(config.excerpt_length, 50);
        assert_eq!(config.render.max_depth, 4);
        assert_eq!(config.render.block_separator, "");
        assert_eq!(config.slug.max_retries, 1);
        assert_eq!(config.slug.max_probes, 9);
    }
}
