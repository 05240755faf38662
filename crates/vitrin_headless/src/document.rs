//! In-memory document tree
//!
//! A minimal element tree for driving the page behaviors without a host:
//! tag/id/class/attribute data, optional vertical layout offsets, and form
//! fields with default values. Nodes live in a slotmap arena; traversal
//! yields document order (pre-order, depth first).

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use vitrin_core::selector::{Selector, SelectorPart};

new_key_type! {
    /// Key of a node in the document arena
    pub struct NodeKey;
}

/// A form field with its current and default value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    /// Value restored by a form reset
    pub default: String,
}

/// One element node
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: FxHashMap<String, String>,
    /// Vertical position of the element's top edge, when laid out
    pub top: Option<f32>,
    /// Form fields, for form elements
    pub fields: Vec<FormField>,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

/// Element tree with stable keys and document-order traversal
#[derive(Default)]
pub struct Document {
    nodes: SlotMap<NodeKey, Node>,
    roots: Vec<NodeKey>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `spec` (and its subtree) under `parent`, or as a root
    pub fn append(&mut self, parent: Option<NodeKey>, spec: ElementSpec) -> NodeKey {
        let ElementSpec { mut node, children } = spec;
        node.parent = parent;
        let key = self.nodes.insert(node);
        match parent {
            Some(parent) => self.nodes[parent].children.push(key),
            None => self.roots.push(key),
        }
        for child in children {
            self.append(Some(key), child);
        }
        key
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// All node keys in document order
    pub fn keys(&self) -> Vec<NodeKey> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeKey> = self.roots.iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            out.push(key);
            if let Some(node) = self.nodes.get(key) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Whether the node at `key` is the subject of `selector`
    pub fn matches(&self, key: NodeKey, selector: &Selector) -> bool {
        let (last, ancestors) = match selector.parts.split_last() {
            Some(split) => split,
            None => return false,
        };
        let node = match self.nodes.get(key) {
            Some(node) => node,
            None => return false,
        };
        if !matches_part(node, last) {
            return false;
        }

        // Remaining parts must match successively higher ancestors,
        // nearest part first.
        let mut remaining = ancestors;
        let mut current = node.parent;
        while let Some(part) = remaining.last() {
            let mut found = false;
            while let Some(key) = current {
                let ancestor = &self.nodes[key];
                current = ancestor.parent;
                if matches_part(ancestor, part) {
                    found = true;
                    break;
                }
            }
            if !found {
                return false;
            }
            remaining = &remaining[..remaining.len() - 1];
        }
        true
    }

    /// First match in document order
    pub fn select_first(&self, selector: &Selector) -> Option<NodeKey> {
        self.keys()
            .into_iter()
            .find(|&key| self.matches(key, selector))
    }

    /// All matches in document order
    pub fn select_all(&self, selector: &Selector) -> Vec<NodeKey> {
        self.keys()
            .into_iter()
            .filter(|&key| self.matches(key, selector))
            .collect()
    }
}

fn matches_part(node: &Node, part: &SelectorPart) -> bool {
    match part {
        SelectorPart::Id(id) => node.id.as_deref() == Some(id.as_str()),
        SelectorPart::Class(class) => node.classes.iter().any(|c| c == class),
        SelectorPart::Tag(tag) => node.tag == *tag,
        SelectorPart::AttrPrefix { tag, attr, prefix } => {
            node.tag == *tag
                && node
                    .attributes
                    .get(attr)
                    .map_or(false, |value| value.starts_with(prefix))
        }
    }
}

/// Builder for one element and its subtree
pub struct ElementSpec {
    node: Node,
    children: Vec<ElementSpec>,
}

/// Start building an element with the given tag
pub fn el(tag: &str) -> ElementSpec {
    ElementSpec {
        node: Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        },
        children: Vec::new(),
    }
}

impl ElementSpec {
    pub fn id(mut self, id: &str) -> Self {
        self.node.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.node.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.node.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Vertical position of the element's top edge
    pub fn top(mut self, top: f32) -> Self {
        self.node.top = Some(top);
        self
    }

    /// Add a form field whose default (reset) value is empty
    pub fn field(self, name: &str, value: &str) -> Self {
        self.field_with_default(name, value, "")
    }

    /// Add a form field with an explicit default restored on reset
    pub fn field_with_default(mut self, name: &str, value: &str, default: &str) -> Self {
        self.node.fields.push(FormField {
            name: name.to_string(),
            value: value.to_string(),
            default: default.to_string(),
        });
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}
