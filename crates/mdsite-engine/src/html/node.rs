use std::fmt;

/// Insertion-ordered `(name, value)` attribute pairs.
pub type Attributes = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("{0} node requires a non-empty tag")]
    MissingTag(&'static str),
}

/// What a node holds: direct text or child nodes, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    Value(String),
    Children(Vec<HtmlNode>),
}

/// An HTML element or raw text run.
///
/// Fields are private: nodes are built through the checked constructors and
/// are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    tag: Option<String>,
    attributes: Attributes,
    body: NodeBody,
}

impl HtmlNode {
    /// A tagless leaf; serializes to `value` verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            attributes: Attributes::new(),
            body: NodeBody::Value(value.into()),
        }
    }

    /// A leaf element such as `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Result<Self, HtmlError> {
        Ok(Self {
            tag: Some(checked_tag(tag.into(), "leaf")?),
            attributes: Attributes::new(),
            body: NodeBody::Value(value.into()),
        })
    }

    /// A container element wrapping `children`. An empty child list is allowed.
    pub fn container(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, HtmlError> {
        Ok(Self {
            tag: Some(checked_tag(tag.into(), "container")?),
            attributes: Attributes::new(),
            body: NodeBody::Children(children),
        })
    }

    /// Appends an attribute; part of construction, not a later mutation.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.body, NodeBody::Value(_))
    }

    /// The text of a leaf node, `None` for containers.
    pub fn value(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Value(v) => Some(v),
            NodeBody::Children(_) => None,
        }
    }

    /// The children of a container node, `None` for leaves.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match &self.body {
            NodeBody::Value(_) => None,
            NodeBody::Children(c) => Some(c),
        }
    }

    /// Renders the node and its subtree to markup.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        let Some(tag) = &self.tag else {
            // Constructors only produce tagless nodes as leaves.
            if let NodeBody::Value(v) = &self.body {
                out.push_str(v);
            }
            return;
        };

        out.push('<');
        out.push_str(tag);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
        out.push('>');
        match &self.body {
            NodeBody::Value(v) => out.push_str(v),
            NodeBody::Children(children) => {
                for child in children {
                    child.write_to(out);
                }
            }
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn checked_tag(tag: String, kind: &'static str) -> Result<String, HtmlError> {
    if tag.is_empty() {
        return Err(HtmlError::MissingTag(kind));
    }
    Ok(tag)
}
