//! Content tree stored as page content, and the conversion of rendered
//! rich-text markup into it.
//!
//! The conversion works on anything implementing [`DomLike`], so the same
//! code runs over live `web_sys` nodes in the browser and over in-memory trees
//! in tests.

use serde::{Deserialize, Serialize};

const TAG_SPAN: &str = "span";
const ATTR_HREF: &str = "href";
const ATTR_SRC: &str = "src";

/// A text run or an element. Serialized untagged: a JSON string or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text(String),
    Element(NodeElement),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeElement {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NodeAttrs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ContentNode>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl NodeAttrs {
    pub fn is_empty(&self) -> bool {
        self.href.is_none() && self.src.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Element,
    Fragment,
    Other,
}

/// Minimal read-only view of a DOM node.
pub trait DomLike: Sized {
    fn kind(&self) -> NodeKind;
    /// Tag name as reported by the node, any case. Only called on elements.
    fn tag_name(&self) -> String;
    /// Character data for text nodes, full text content for elements.
    fn text(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn children(&self) -> Vec<Self>;
}

/// Result of converting one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    Text(String),
    Element(NodeElement),
    /// Fragments expand into their children, flattened into the parent.
    List(Vec<ContentNode>),
    /// Comments, processing instructions and the like.
    Skip,
}

impl Converted {
    #[cfg(test)]
    fn into_node(self) -> Option<ContentNode> {
        match self {
            Converted::Text(text) => Some(ContentNode::Text(text)),
            Converted::Element(element) => Some(ContentNode::Element(element)),
            Converted::List(_) | Converted::Skip => None,
        }
    }
}

pub fn dom_to_node<N: DomLike>(node: &N) -> Converted {
    match node.kind() {
        NodeKind::Text => Converted::Text(js_trim(&node.text()).to_string()),
        NodeKind::Element => element_to_node(node),
        NodeKind::Fragment => Converted::List(convert_children(node)),
        NodeKind::Other => Converted::Skip,
    }
}

/// Node list stored for an editor root: the converted children of the root.
pub fn editor_content<N: DomLike>(root: &N) -> Vec<ContentNode> {
    match dom_to_node(root) {
        Converted::Element(element) => element.children.unwrap_or_default(),
        Converted::List(list) => list,
        Converted::Text(text) if !text.is_empty() => vec![ContentNode::Text(text)],
        _ => vec![],
    }
}

fn element_to_node<N: DomLike>(node: &N) -> Converted {
    let tag = node.tag_name().to_lowercase();
    if tag == TAG_SPAN {
        return Converted::Text(node.text());
    }
    let attrs = NodeAttrs {
        href: node.attribute(ATTR_HREF),
        src: node.attribute(ATTR_SRC),
    };
    let children = convert_children(node);
    Converted::Element(NodeElement {
        tag,
        attrs: if attrs.is_empty() { None } else { Some(attrs) },
        children: if children.is_empty() { None } else { Some(children) },
    })
}

fn convert_children<N: DomLike>(node: &N) -> Vec<ContentNode> {
    let mut children = vec![];
    for child in node.children() {
        match dom_to_node(&child) {
            Converted::Text(text) if text.is_empty() => {}
            Converted::Text(text) => children.push(ContentNode::Text(text)),
            Converted::Element(element) => children.push(ContentNode::Element(element)),
            Converted::List(list) => children.extend(list),
            Converted::Skip => {}
        }
    }
    children
}

// browsers also strip the byte order mark, but keep NEL
fn js_trim(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
