//! Retained scene graph
//!
//! A minimal document tree the renderers draw into: elements carry a tag,
//! ordered attributes and inline styles; text lives in text nodes. Nodes are
//! stored in an arena and addressed by `NodeId`. Removing a node detaches its
//! subtree and frees its slots for later appends; an id whose slot was freed
//! no longer resolves, so stale handles read as absent.
//!
//! `ElementMut` offers d3-style chaining:
//!
//! ```
//! use ccf_grid::scene::Scene;
//!
//! let mut scene = Scene::new("svg");
//! let root = scene.root();
//! let rect = scene
//!     .append(root, "rect")
//!     .attr("width", 18.0)
//!     .style("fill", "#4CAF50")
//!     .node();
//! assert_eq!(scene.attr(rect, "width"), Some("18"));
//! ```

mod markup;

pub use markup::{escape_attr, escape_text};

/// Element id of the designated mount point in a fresh document
pub const MOUNT_ID: &str = "grid-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        styles: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Bumped each time the slot is freed
    generation: u32,
}

#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    free: Vec<usize>,
    root: NodeId,
}

/// Values that can be written as attribute or style values
pub trait ToAttr {
    fn to_attr(self) -> String;
}

impl ToAttr for &str {
    fn to_attr(self) -> String {
        self.to_string()
    }
}

impl ToAttr for String {
    fn to_attr(self) -> String {
        self
    }
}

impl ToAttr for &String {
    fn to_attr(self) -> String {
        self.clone()
    }
}

impl ToAttr for f64 {
    fn to_attr(self) -> String {
        format_number(self)
    }
}

impl ToAttr for usize {
    fn to_attr(self) -> String {
        self.to_string()
    }
}

/// Whole numbers without a fractional part, everything else shortest round-trip
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl Scene {
    /// A scene with a single root element
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Element {
                    tag: root_tag.to_string(),
                    attrs: Vec::new(),
                    styles: Vec::new(),
                },
                parent: None,
                children: Vec::new(),
                generation: 0,
            }],
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        }
    }

    /// A `body` root holding the empty mount point `div#grid-container`
    pub fn document() -> Self {
        let mut scene = Self::new("body");
        let root = scene.root();
        scene.append(root, "div").attr("id", MOUNT_ID);
        scene
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new element as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, tag: &str) -> ElementMut<'_> {
        let id = self.push(
            parent,
            NodeKind::Element {
                tag: tag.to_string(),
                attrs: Vec::new(),
                styles: Vec::new(),
            },
        );
        ElementMut { scene: self, id }
    }

    /// Append a text node as the last child of `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.nodes[index];
                slot.kind = kind;
                slot.parent = Some(parent);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.nodes.push(Node {
                    kind,
                    parent: Some(parent),
                    children: Vec::new(),
                    generation: 0,
                });
                NodeId {
                    index: self.nodes.len() - 1,
                    generation: 0,
                }
            }
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.index)
            .filter(|node| node.generation == id.generation)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.index)
            .filter(|node| node.generation == id.generation)
    }

    /// Reopen an existing element for chaining
    pub fn select(&mut self, id: NodeId) -> ElementMut<'_> {
        ElementMut { scene: self, id }
    }

    /// Detach `id` and free its subtree. The root stays.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        let Some(parent) = self.node(id).map(|node| node.parent) else {
            return;
        };
        if let Some(parent) = parent {
            if let Some(parent) = self.node_mut(parent) {
                parent.children.retain(|child| *child != id);
            }
        }
        for freed in self.descendants(id) {
            let slot = &mut self.nodes[freed.index];
            slot.kind = NodeKind::Text(String::new());
            slot.parent = None;
            slot.children.clear();
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(freed.index);
        }
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|node| &node.kind)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { attrs, .. } => lookup(attrs, name),
            NodeKind::Text(_) => None,
        }
    }

    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { styles, .. } => lookup(styles, name),
            NodeKind::Text(_) => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Child elements of `id`, text nodes skipped
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.tag(*child).is_some())
            .collect()
    }

    /// First child element with the given tag
    pub fn find_child(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|child| self.tag(*child) == Some(tag))
    }

    /// Concatenated text of `id` and all its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Some(NodeKind::Text(text)) = self.kind(node) {
                out.push_str(text);
            }
        }
        out
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Whether `id` is still reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// `id` and its subtree in document order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Attached elements carrying `class`, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    /// Attached element whose `id` attribute equals `element_id`
    pub fn find_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.attr(*node, "id") == Some(element_id))
    }

    /// Number of attached nodes, text nodes included
    pub fn attached_len(&self) -> usize {
        self.descendants(self.root).len()
    }

    /// Slots held by the arena, free ones included
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter_mut().find(|(key, _)| key == name) {
        Some(pair) => pair.1 = value,
        None => pairs.push((name.to_string(), value)),
    }
}

/// Mutable handle to one element, for chained attribute/style/text setters
#[derive(Debug)]
pub struct ElementMut<'a> {
    scene: &'a mut Scene,
    id: NodeId,
}

impl<'a> ElementMut<'a> {
    pub fn node(&self) -> NodeId {
        self.id
    }

    pub fn attr(self, name: &str, value: impl ToAttr) -> Self {
        if let Some(Node {
            kind: NodeKind::Element { attrs, .. },
            ..
        }) = self.scene.node_mut(self.id)
        {
            upsert(attrs, name, value.to_attr());
        }
        self
    }

    pub fn style(self, name: &str, value: impl ToAttr) -> Self {
        if let Some(Node {
            kind: NodeKind::Element { styles, .. },
            ..
        }) = self.scene.node_mut(self.id)
        {
            upsert(styles, name, value.to_attr());
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Replace all children with a single text node
    pub fn text(self, text: &str) -> Self {
        let children: Vec<NodeId> = self.scene.children(self.id).to_vec();
        for child in children {
            self.scene.remove(child);
        }
        if !text.is_empty() {
            self.scene.append_text(self.id, text);
        }
        self
    }

    /// Append a child element and continue chaining on it
    pub fn append(self, tag: &str) -> ElementMut<'a> {
        let ElementMut { scene, id } = self;
        scene.append(id, tag)
    }
}
