//! Parsed QRDA document context
//!
//! Wraps a `roxmltree` document together with the namespace bindings needed to
//! address CDA elements. Node locations are written as slash-separated paths:
//!
//! - `//patientRole/id` - first `patientRole` at any depth, then its `id` child
//! - `effectiveTime/low` - child steps relative to a [`Scope`]
//! - `sdtc:dischargeDispositionCode` - prefixed step; unprefixed steps are `hl7`
//!
//! Every lookup is read-only, and every absence (missing node, missing
//! attribute, blank value) resolves to `None` in one place: [`Scope::attr`]
//! and [`Scope::text`].

use crate::domain::{QrdaError, Result};
use roxmltree::{Document, Node, ParsingOptions};

/// CDA namespace
pub const HL7_NAMESPACE: &str = "urn:hl7-org:v3";

/// HL7 SDTC extension namespace
pub const SDTC_NAMESPACE: &str = "urn:hl7-org:sdtc";

/// Prefix bindings used in paths
const NAMESPACE_BINDINGS: &[(&str, &str)] = &[("hl7", HL7_NAMESPACE), ("sdtc", SDTC_NAMESPACE)];

/// A parsed document plus its namespace bindings
pub struct DocumentContext<'input> {
    doc: Document<'input>,
}

impl<'input> DocumentContext<'input> {
    /// Parse raw document bytes
    ///
    /// # Errors
    ///
    /// Returns [`QrdaError::MalformedDocument`] if the bytes are not UTF-8 or
    /// not well-formed XML.
    pub fn parse(bytes: &'input [u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            QrdaError::MalformedDocument(format!("document is not valid UTF-8: {e}"))
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)?;

        tracing::trace!(
            root = doc.root_element().tag_name().name(),
            "Parsed document"
        );

        Ok(Self { doc })
    }

    /// Scope positioned at the document root
    pub fn root(&self) -> Scope<'_, 'input> {
        Scope {
            node: self.doc.root(),
        }
    }

    /// First element matching `path`, searched from the document root
    pub fn at(&self, path: &str) -> Option<Scope<'_, 'input>> {
        self.root().at(path)
    }

    /// Attribute `name` of the first element matching `path`
    pub fn attr(&self, path: &str, name: &str) -> Option<String> {
        self.root().attr(path, name)
    }

    /// Text content of the first element matching `path`
    pub fn text(&self, path: &str) -> Option<String> {
        self.root().text(path)
    }
}

/// A position in the document that relative lookups start from
#[derive(Clone, Copy)]
pub struct Scope<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Scope<'a, 'input> {
    /// First element matching `path` below this scope
    pub fn at(&self, path: &str) -> Option<Scope<'a, 'input>> {
        let query = Query::parse(path)?;
        let (first, rest) = query.steps.split_first()?;

        let found = if query.anywhere {
            self.node
                .descendants()
                .filter(|n| first.matches(n))
                .find_map(|n| descend(n, rest))
        } else {
            self.node
                .children()
                .filter(|n| first.matches(n))
                .find_map(|n| descend(n, rest))
        };

        found.map(|node| Scope { node })
    }

    /// Whether an element matches `path`
    pub fn exists(&self, path: &str) -> bool {
        self.at(path).is_some()
    }

    /// Attribute `name` of the first element matching `path`
    pub fn attr(&self, path: &str, name: &str) -> Option<String> {
        self.at(path)?.own_attr(name)
    }

    /// Attribute `name` of this scope's own element
    pub fn own_attr(&self, name: &str) -> Option<String> {
        non_blank(self.node.attribute(name))
    }

    /// Concatenated text content of the first element matching `path`
    pub fn text(&self, path: &str) -> Option<String> {
        let scope = self.at(path)?;
        let text: String = scope
            .node
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect();
        non_blank(Some(text.as_str()))
    }

    /// Local name of this scope's element (empty at the document root)
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }
}

fn descend<'a, 'input>(node: Node<'a, 'input>, steps: &[Step<'_>]) -> Option<Node<'a, 'input>> {
    match steps.split_first() {
        None => Some(node),
        Some((step, rest)) => node
            .children()
            .filter(|c| step.matches(c))
            .find_map(|c| descend(c, rest)),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

struct Query<'p> {
    anywhere: bool,
    steps: Vec<Step<'p>>,
}

impl<'p> Query<'p> {
    /// Parses a path; `None` for an empty path or an unbound prefix
    fn parse(path: &'p str) -> Option<Self> {
        let (anywhere, rest) = match path.strip_prefix("//") {
            Some(rest) => (true, rest),
            None => (false, path.trim_start_matches('/')),
        };

        let steps = rest
            .split('/')
            .map(Step::parse)
            .collect::<Option<Vec<_>>>()?;

        if steps.is_empty() {
            return None;
        }

        Some(Self { anywhere, steps })
    }
}

struct Step<'p> {
    namespace: &'static str,
    name: &'p str,
}

impl<'p> Step<'p> {
    fn parse(raw: &'p str) -> Option<Self> {
        let (prefix, name) = match raw.split_once(':') {
            Some((prefix, name)) => (prefix, name),
            None => ("hl7", raw),
        };
        if name.is_empty() {
            return None;
        }

        let namespace = NAMESPACE_BINDINGS
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, uri)| *uri);

        if namespace.is_none() {
            tracing::warn!(prefix = prefix, "Unbound namespace prefix in document path");
        }

        Some(Self {
            namespace: namespace?,
            name,
        })
    }

    fn matches(&self, node: &Node<'_, '_>) -> bool {
        node.is_element()
            && node.tag_name().name() == self.name
            && node.tag_name().namespace() == Some(self.namespace)
    }
}
