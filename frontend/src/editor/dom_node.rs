use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use shared::node::{DomLike, NodeKind};

/// Live DOM node seen through [`DomLike`].
pub struct WebNode(pub Node);

impl DomLike for WebNode {
    fn kind(&self) -> NodeKind {
        match self.0.node_type() {
            Node::TEXT_NODE => NodeKind::Text,
            Node::ELEMENT_NODE => NodeKind::Element,
            Node::DOCUMENT_FRAGMENT_NODE => NodeKind::Fragment,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> String {
        self.0.dyn_ref::<Element>().map(|element| element.tag_name()).unwrap_or_default()
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.dyn_ref::<Element>().and_then(|element| element.get_attribute(name))
    }

    fn children(&self) -> Vec<Self> {
        let nodes = self.0.child_nodes();
        (0..nodes.length()).filter_map(|ind| nodes.get(ind)).map(WebNode).collect()
    }
}
