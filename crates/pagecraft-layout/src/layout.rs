// File: src/layout.rs
// Purpose: Ordered assembly of the document shell from a LayoutConfig

use pagecraft_dom::{Element, Node};

use crate::config::{LayoutConfig, OpenGraph, ScriptSpec, TwitterCard};

/// Render a configuration to the full `<html>` document tree.
///
/// Head elements are assembled in a fixed order, each step gated on the
/// presence of its field: fixed metas, title, description, robots, author,
/// medium, Open Graph, Twitter card, canonical/alternate/amphtml links,
/// apple touch icons, stylesheets, scripts, noscript. The body holds a
/// single `<div id="body">` whose only possible child is the trusted
/// `content` markup.
///
/// Rendering is pure: the same configuration always produces the same
/// tree, and the tree serializes to byte-identical output.
pub fn render(config: &LayoutConfig) -> Node {
    tracing::trace!(title = config.title.as_deref(), "assembling layout");

    let mut head = Element::new("head")
        .child(
            Element::new("meta")
                .attr("content", "en")
                .attr("name", "language"),
        )
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            // The scale constraints live as standalone attributes rather
            // than inside content; the reference output is shaped this way.
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width")
                .attr("initial-scale", "1.0")
                .attr("maximum-scale", "1.0")
                .attr("user-scalable", "no"),
        );

    if let Some(title) = &config.title {
        head = head.child(Element::new("title").text(title));
    }

    if let Some(description) = &config.description {
        head = head.child(
            Element::new("meta")
                .attr("content", description)
                .attr("name", "description"),
        );
    }

    if let Some(robots) = &config.robots {
        head = head.child(named_meta("robots", robots));
    }

    if let Some(author) = &config.author {
        head = head.child(named_meta("author", author));
    }

    if let Some(medium) = &config.medium {
        head = head.child(named_meta("medium", medium));
    }

    if let Some(og) = &config.open_graph {
        head = head.children(open_graph_metas(og));
    }

    if let Some(card) = &config.twitter_card {
        head = head.children(twitter_card_metas(card));
    }

    if let Some(url) = &config.canonical_url {
        head = head.child(link("canonical", url));
    }

    if let Some(url) = &config.alternate_url {
        head = head.child(link("alternate", url));
    }

    if let Some(url) = &config.amp_url {
        head = head.child(link("amphtml", url));
    }

    if let Some(icons) = &config.apple_touch_icon {
        // The default icon comes first and carries no sizes attribute;
        // the rest follow in the map's insertion order.
        if let Some(href) = icons.get("default") {
            head = head.child(
                Element::new("link")
                    .attr("rel", "apple-touch-icon")
                    .attr("href", href),
            );
        }
        for (sizes, href) in icons {
            if sizes == "default" {
                continue;
            }
            head = head.child(
                Element::new("link")
                    .attr("rel", "apple-touch-icon")
                    .attr("sizes", sizes)
                    .attr("href", href),
            );
        }
    }

    for href in &config.css {
        head = head.child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("type", "text/css")
                .attr("href", href),
        );
    }

    for spec in &config.scripts {
        head = head.child(script_element(spec));
    }

    if !config.noscript.is_empty() {
        head = head.child(Element::new("noscript").children(config.noscript.iter().cloned()));
    }

    let mut container = Element::new("div").attr("id", "body");
    if let Some(content) = &config.content {
        container = container.raw(content);
    }

    Node::from(
        Element::new("html")
            .child(head)
            .child(Element::new("body").child(container)),
    )
}

/// Render a configuration straight to an HTML string
pub fn render_string(config: &LayoutConfig) -> String {
    pagecraft_dom::render_string(&render(config))
}

fn named_meta(name: &str, content: &str) -> Element {
    Element::new("meta")
        .attr("name", name)
        .attr("content", content)
}

fn property_meta(content: &str, property: &str) -> Element {
    Element::new("meta")
        .attr("content", content)
        .attr("property", property)
}

fn link(rel: &str, href: &str) -> Element {
    Element::new("link").attr("rel", rel).attr("href", href)
}

fn open_graph_metas(og: &OpenGraph) -> Vec<Node> {
    let mut metas = vec![Node::from(property_meta("website", "og:type"))];

    let fields = [
        (&og.title, "og:title"),
        (&og.description, "og:description"),
        (&og.url, "og:url"),
        (&og.image, "og:image"),
        (&og.site_name, "og:site_name"),
    ];
    for (value, property) in fields {
        if let Some(content) = value {
            metas.push(Node::from(property_meta(content, property)));
        }
    }
    metas
}

fn twitter_card_metas(card: &TwitterCard) -> Vec<Node> {
    let mut metas = vec![Node::from(named_meta("twitter:card", "summary_large_image"))];

    let fields = [
        (&card.site, "twitter:site"),
        (&card.creator, "twitter:creator"),
        (&card.url, "twitter:url"),
        (&card.title, "twitter:title"),
        (&card.description, "twitter:description"),
        (&card.image, "twitter:image"),
    ];
    for (value, name) in fields {
        if let Some(content) = value {
            metas.push(Node::from(named_meta(name, content)));
        }
    }
    metas
}

fn script_element(spec: &ScriptSpec) -> Element {
    match spec {
        ScriptSpec::External { src, defer } => {
            let mut el = Element::new("script");
            if *defer {
                el = el.attr("defer", "true");
            }
            el.attr("src", src)
        }
        // Script bodies are CDATA-like: escaping would corrupt them
        ScriptSpec::Inline { content } => Element::new("script").raw(content),
        ScriptSpec::Json { json, id } => {
            let mut el = Element::new("script");
            if let Some(id) = id {
                el = el.attr("id", id);
            }
            el.attr("type", "application/json").raw(json.to_string())
        }
        ScriptSpec::Schema { schema } => Element::new("script")
            .attr("type", "application/ld+json")
            .raw(schema.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ScriptSpec::external("/index.js"), r#"<script src="/index.js"></script>"#)]
    #[case(
        ScriptSpec::deferred("/common.js"),
        r#"<script defer="true" src="/common.js"></script>"#
    )]
    #[case(
        ScriptSpec::inline("window.VALUE = 10;"),
        "<script>window.VALUE = 10;</script>"
    )]
    #[case(
        ScriptSpec::json(json!({"a": 1})),
        r#"<script type="application/json">{"a":1}</script>"#
    )]
    #[case(
        ScriptSpec::json_with_id(json!({"a": 1}), "data"),
        r#"<script id="data" type="application/json">{"a":1}</script>"#
    )]
    #[case(
        ScriptSpec::schema(json!({"value": "key"})),
        r#"<script type="application/ld+json">{"value":"key"}</script>"#
    )]
    fn test_script_variants(#[case] spec: ScriptSpec, #[case] expected: &str) {
        let html = pagecraft_dom::render_string(&Node::from(script_element(&spec)));
        assert_eq!(html, expected);
    }

    #[test]
    fn test_open_graph_partial_fields_keep_order() {
        let og = OpenGraph {
            url: Some("https://example.com".into()),
            title: Some("t".into()),
            ..OpenGraph::default()
        };
        let html: String = open_graph_metas(&og)
            .iter()
            .map(pagecraft_dom::render_string)
            .collect();
        assert_eq!(
            html,
            concat!(
                r#"<meta content="website" property="og:type"></meta>"#,
                r#"<meta content="t" property="og:title"></meta>"#,
                r#"<meta content="https://example.com" property="og:url"></meta>"#,
            )
        );
    }

    #[test]
    fn test_twitter_card_always_emits_card_type_first() {
        let card = TwitterCard {
            site: Some("@site".into()),
            ..TwitterCard::default()
        };
        let html: String = twitter_card_metas(&card)
            .iter()
            .map(pagecraft_dom::render_string)
            .collect();
        assert_eq!(
            html,
            concat!(
                r#"<meta name="twitter:card" content="summary_large_image"></meta>"#,
                r#"<meta name="twitter:site" content="@site"></meta>"#,
            )
        );
    }
}
