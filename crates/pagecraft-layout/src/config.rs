// File: src/config.rs
// Purpose: Layout configuration types and JSON ingestion

use anyhow::{Context, Result};
use indexmap::IndexMap;
use pagecraft_dom::Node;
use serde::{Deserialize, Serialize};

/// Configuration for one layout render
///
/// Every field is optional; an absent field emits nothing. Sequence-typed
/// fields keep their input order in the output. The configuration is
/// consumed once per render and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Page title
    pub title: Option<String>,

    /// Meta description
    pub description: Option<String>,

    /// Robots directive, e.g. "index, follow"
    pub robots: Option<String>,

    /// Author meta tag
    pub author: Option<String>,

    /// Medium meta tag
    pub medium: Option<String>,

    /// Canonical link URL
    pub canonical_url: Option<String>,

    /// Alternate link URL
    pub alternate_url: Option<String>,

    /// AMP variant link URL
    pub amp_url: Option<String>,

    /// Stylesheet URLs, one link element per entry
    pub css: Vec<String>,

    /// Script entries, one script element per entry
    pub scripts: Vec<ScriptSpec>,

    /// Open Graph metadata
    pub open_graph: Option<OpenGraph>,

    /// Twitter card metadata
    pub twitter_card: Option<TwitterCard>,

    /// Apple touch icons keyed by size label ("default" or "WxH"),
    /// insertion order preserved
    pub apple_touch_icon: Option<IndexMap<String, String>>,

    /// Nodes wrapped in a single noscript container. Built
    /// programmatically; not part of the JSON configuration surface.
    #[serde(skip)]
    pub noscript: Vec<Node>,

    /// Trusted markup injected verbatim into the body container
    pub content: Option<String>,
}

impl LayoutConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse layout configuration")
    }

    /// Builder method to set the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method to set the meta description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the robots directive
    pub fn robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = Some(robots.into());
        self
    }

    /// Builder method to set the author
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Builder method to set the medium
    pub fn medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    /// Builder method to set the canonical URL
    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Builder method to set the alternate URL
    pub fn alternate_url(mut self, url: impl Into<String>) -> Self {
        self.alternate_url = Some(url.into());
        self
    }

    /// Builder method to set the AMP URL
    pub fn amp_url(mut self, url: impl Into<String>) -> Self {
        self.amp_url = Some(url.into());
        self
    }

    /// Builder method to set the stylesheet list
    pub fn css(mut self, css: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.css = css.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the script list
    pub fn scripts(mut self, scripts: impl IntoIterator<Item = ScriptSpec>) -> Self {
        self.scripts = scripts.into_iter().collect();
        self
    }

    /// Builder method to set Open Graph metadata
    pub fn open_graph(mut self, og: OpenGraph) -> Self {
        self.open_graph = Some(og);
        self
    }

    /// Builder method to set Twitter card metadata
    pub fn twitter_card(mut self, card: TwitterCard) -> Self {
        self.twitter_card = Some(card);
        self
    }

    /// Builder method to set the apple touch icon map
    pub fn apple_touch_icon(mut self, icons: IndexMap<String, String>) -> Self {
        self.apple_touch_icon = Some(icons);
        self
    }

    /// Builder method to set the noscript nodes
    pub fn noscript(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.noscript = nodes.into_iter().collect();
        self
    }

    /// Builder method to set the body content (trusted markup)
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Open Graph metadata; one meta element per present field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub site_name: Option<String>,
}

/// Twitter card metadata; one meta element per present field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterCard {
    pub site: Option<String>,
    pub creator: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// One script entry, discriminated by which field is present
///
/// The untagged representation makes JSON configs classify the same way
/// the builder API does: `{"src": ...}` is an external reference,
/// `{"content": ...}` an inline body, `{"json": ...}` a data island and
/// `{"schema": ...}` a JSON-LD payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptSpec {
    /// External script reference; `defer` emits the literal attribute
    /// `defer="true"` before `src`
    External {
        src: String,
        #[serde(default)]
        defer: bool,
    },

    /// Inline script body, emitted unescaped
    Inline { content: String },

    /// Inline JSON data island, compact-serialized with
    /// `type="application/json"`
    Json {
        json: serde_json::Value,
        #[serde(default)]
        id: Option<String>,
    },

    /// Inline JSON-LD payload with `type="application/ld+json"`
    Schema { schema: serde_json::Value },
}

impl ScriptSpec {
    /// External script without defer
    pub fn external(src: impl Into<String>) -> Self {
        ScriptSpec::External {
            src: src.into(),
            defer: false,
        }
    }

    /// External script with the defer attribute
    pub fn deferred(src: impl Into<String>) -> Self {
        ScriptSpec::External {
            src: src.into(),
            defer: true,
        }
    }

    /// Inline script body
    pub fn inline(content: impl Into<String>) -> Self {
        ScriptSpec::Inline {
            content: content.into(),
        }
    }

    /// JSON data island without an id
    pub fn json(json: serde_json::Value) -> Self {
        ScriptSpec::Json { json, id: None }
    }

    /// JSON data island with an element id
    pub fn json_with_id(json: serde_json::Value, id: impl Into<String>) -> Self {
        ScriptSpec::Json {
            json,
            id: Some(id.into()),
        }
    }

    /// JSON-LD schema payload
    pub fn schema(schema: serde_json::Value) -> Self {
        ScriptSpec::Schema { schema }
    }
}
