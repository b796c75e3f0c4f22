//! Minimal document-query capability over parsed HTML.
//!
//! Extractors only see [`Document`] and [`DocumentNode`]: tag/attribute
//! selection, nearest ancestor, nearest preceding element, and text. The
//! `scraper` backend lives entirely in [`HtmlDocument`] and [`HtmlNode`].

use scraper::{ElementRef, Html, Selector};

/// Attribute constraint of an [`ElementQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrFilter {
    /// Attribute `name` equals `value` exactly.
    Equals(&'static str, &'static str),
    /// Class list contains the class.
    Class(&'static str),
}

/// Element predicate: one of a set of tag names plus an optional attribute filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementQuery {
    tags: &'static [&'static str],
    attr: Option<AttrFilter>,
}

impl ElementQuery {
    pub const fn tag(tag: &'static &'static str) -> Self {
        Self {
            tags: std::slice::from_ref(tag),
            attr: None,
        }
    }

    pub const fn tags(tags: &'static [&'static str]) -> Self {
        Self { tags, attr: None }
    }

    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.attr = Some(AttrFilter::Class(class));
        self
    }

    pub const fn with_attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attr = Some(AttrFilter::Equals(name, value));
        self
    }

    /// The equivalent CSS selector, e.g. `span[class~="IPA"]`.
    pub fn css(&self) -> String {
        let attr = match self.attr {
            None => String::new(),
            Some(AttrFilter::Equals(name, value)) => format!("[{name}=\"{}\"]", css_string(value)),
            Some(AttrFilter::Class(class)) => format!("[class~=\"{}\"]", css_string(class)),
        };
        self.tags
            .iter()
            .map(|tag| format!("{tag}{attr}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn selector(&self) -> Option<Selector> {
        let css = self.css();
        let selector = match Selector::parse(&css) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::debug!("cannot parse selector {css:?}: {e}");
                None
            }
        };
        selector
    }

    pub fn matches<N: DocumentNode>(&self, node: &N) -> bool {
        if !self.tags.iter().any(|t| node.tag().eq_ignore_ascii_case(t)) {
            return false;
        }
        match self.attr {
            None => true,
            Some(AttrFilter::Equals(name, value)) => node.attr(name) == Some(value),
            Some(AttrFilter::Class(class)) => node.has_class(class),
        }
    }
}

/// Body of a quoted CSS string.
fn css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// An element of a queried document.
pub trait DocumentNode: Sized + Copy {
    fn tag(&self) -> &str;
    fn attr(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
    /// Concatenated text of the element and its descendants.
    fn text(&self) -> String;
    /// Nearest ancestor matching `query`, excluding the node itself.
    fn closest(&self, query: &ElementQuery) -> Option<Self>;
    /// Nearest element before this one in document order matching `query`.
    /// Ancestors count, since their start tags precede the node.
    fn find_previous(&self, query: &ElementQuery) -> Option<Self>;
    /// Matching descendants in document order.
    fn find_all(&self, query: &ElementQuery) -> Vec<Self>;
    /// Direct element children.
    fn children(&self) -> Vec<Self>;
}

/// A parsed document that can be queried for elements.
pub trait Document<'a> {
    type Node: DocumentNode + 'a;

    /// Every matching element in document order.
    fn select(&'a self, query: &ElementQuery) -> Vec<Self::Node>;
}

// ── scraper backend ─────────────────────────────────────────────────────────

/// HTML document parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl<'a> Document<'a> for HtmlDocument {
    type Node = HtmlNode<'a>;

    fn select(&'a self, query: &ElementQuery) -> Vec<HtmlNode<'a>> {
        match query.selector() {
            Some(selector) => self.html.select(&selector).map(HtmlNode).collect(),
            None => HtmlNode(self.html.root_element()).walk_matching(query, 0),
        }
    }
}

/// Element of an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> HtmlNode<'a> {
    /// Matching elements of the subtree in document order, after skipping
    /// the first `skip` nodes.
    fn walk_matching(&self, query: &ElementQuery, skip: usize) -> Vec<Self> {
        self.0
            .descendants()
            .skip(skip)
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .filter(|node| query.matches(node))
            .collect()
    }
}

impl<'a> DocumentNode for HtmlNode<'a> {
    fn tag(&self) -> &str {
        self.0.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn closest(&self, query: &ElementQuery) -> Option<Self> {
        self.0
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .find(|node| query.matches(node))
    }

    fn find_previous(&self, query: &ElementQuery) -> Option<Self> {
        let mut current = *self.0;
        loop {
            while let Some(sibling) = current.prev_sibling() {
                // Reversed pre-order of the sibling subtree is reverse document order.
                let subtree: Vec<_> = sibling.descendants().collect();
                let hit = subtree
                    .into_iter()
                    .rev()
                    .filter_map(ElementRef::wrap)
                    .map(HtmlNode)
                    .find(|node| query.matches(node));
                if hit.is_some() {
                    return hit;
                }
                current = sibling;
            }
            let parent = current.parent()?;
            if let Some(node) = ElementRef::wrap(parent).map(HtmlNode) {
                if query.matches(&node) {
                    return Some(node);
                }
            }
            current = parent;
        }
    }

    fn find_all(&self, query: &ElementQuery) -> Vec<Self> {
        match query.selector() {
            Some(selector) => self
                .0
                .select(&selector)
                .filter(|element| element.id() != self.0.id())
                .map(HtmlNode)
                .collect(),
            None => self.walk_matching(query, 1),
        }
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN: ElementQuery = ElementQuery::tag(&"span");
    const HEADING: ElementQuery = ElementQuery::tags(&["h2", "h3"]);

    const PAGE: &str = r#"
    <html><body>
      <h2><span class="lang" id="fr">Français</span></h2>
      <p>one <span class="ipa x" title="t">\a\</span></p>
      <h3>Nom</h3>
      <table class="flex"><tr><td><span class="ipa">\b\</span></td></tr></table>
    </body></html>
    "#;

    #[test]
    fn test_select_by_class_and_attr() {
        let doc = HtmlDocument::parse(PAGE);
        let by_class = doc.select(&SPAN.with_class("ipa"));
        assert_eq!(by_class.len(), 2);
        assert_eq!(by_class[0].text(), "\\a\\");
        let by_title = doc.select(&SPAN.with_attr("title", "t"));
        assert_eq!(by_title.len(), 1);
        assert!(doc.select(&SPAN.with_attr("title", "T")).is_empty());
    }

    #[test]
    fn test_closest_finds_enclosing_table() {
        let doc = HtmlDocument::parse(PAGE);
        let spans = doc.select(&SPAN.with_class("ipa"));
        let table = ElementQuery::tag(&"table").with_class("flex");
        assert!(spans[0].closest(&table).is_none());
        assert!(spans[1].closest(&table).is_some());
    }

    #[test]
    fn test_find_previous_walks_reverse_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let spans = doc.select(&SPAN.with_class("ipa"));

        let heading = spans[0].find_previous(&HEADING).unwrap();
        assert_eq!(heading.tag(), "h2");
        let heading = spans[1].find_previous(&HEADING).unwrap();
        assert_eq!(heading.text(), "Nom");

        let lang = spans[1].find_previous(&SPAN.with_class("lang")).unwrap();
        assert_eq!(lang.attr("id"), Some("fr"));

        let first = doc.select(&ElementQuery::tag(&"h2"))[0];
        assert!(first.find_previous(&HEADING).is_none());
    }

    #[test]
    fn test_css_form_of_queries() {
        assert_eq!(SPAN.with_class("IPA").css(), r#"span[class~="IPA"]"#);
        assert_eq!(HEADING.css(), "h2, h3");
        assert_eq!(
            SPAN.with_attr("title", r#"say "a\b""#).css(),
            r#"span[title="say \"a\\b\""]"#
        );
        let doc = HtmlDocument::parse(r#"<span title='say "a\b"'>x</span>"#);
        assert_eq!(doc.select(&SPAN.with_attr("title", r#"say "a\b""#)).len(), 1);
    }

    #[test]
    fn test_selection_agrees_with_matcher() {
        let doc = HtmlDocument::parse(PAGE);
        let root = HtmlNode(doc.html.root_element());
        for query in [
            SPAN,
            SPAN.with_class("ipa"),
            SPAN.with_attr("title", "t"),
            HEADING,
            ElementQuery::tag(&"table").with_class("flex"),
        ] {
            let selected: Vec<_> = doc.select(&query).iter().map(|n| n.text()).collect();
            let walked: Vec<_> = root.walk_matching(&query, 0).iter().map(|n| n.text()).collect();
            assert_eq!(selected, walked, "{}", query.css());
        }
    }

    #[test]
    fn test_find_all_excludes_the_node_itself() {
        let doc = HtmlDocument::parse("<div><div><div>x</div></div></div>");
        let outer = doc.select(&ElementQuery::tag(&"div"))[0];
        assert_eq!(outer.find_all(&ElementQuery::tag(&"div")).len(), 2);
    }

    #[test]
    fn test_find_all_and_children() {
        let doc = HtmlDocument::parse(PAGE);
        let table = doc.select(&ElementQuery::tag(&"table"))[0];
        let rows = table.find_all(&ElementQuery::tag(&"tr"));
        assert_eq!(rows.len(), 1);
        let cells = rows[0].children();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].tag(), "td");
    }
}
