//! Arena-allocated document tree.
//!
//! Nodes are addressed by `NodeId` (an index into the arena). Node 0 is the
//! document root. Children are kept in document order. Nested documents shown
//! by frames live in the same arena: `adopt` moves them in unattached and
//! `set_frame_content` links them to their frame element.

use std::fmt;

use crate::element::Element;
use crate::tag::Tag;

/// Handle to a node in a `Document`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw arena index, for dumps.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node-specific data.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// `<!DOCTYPE name>`.
    Doctype(String),
    Comment(String),
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// A document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only its root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                data: NodeData::Document,
            }],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, attached or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            data,
        });
        id
    }

    /// Create an unattached element.
    pub fn create_element<K, V>(
        &mut self,
        name: &str,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> NodeId
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.push(NodeData::Element(Element::new(name, attributes)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_owned()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_owned()))
    }

    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Doctype(name.to_owned()))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `child` is already attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.nodes[child.index()].parent.is_none(),
            "node {child} is already attached"
        );
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    /// Create an element and append it to `parent`.
    pub fn append_element<K, V>(
        &mut self,
        parent: NodeId,
        name: &str,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> NodeId
    where
        K: Into<String>,
        V: Into<String>,
    {
        let id = self.create_element(name, attributes);
        self.append_child(parent, id);
        id
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.create_text(text);
        self.append_child(parent, id);
        id
    }

    #[inline]
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()].data
    }

    /// Element payload, or `None` for non-element nodes.
    #[inline]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.index()].data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.index()].data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Element kind, or `None` for non-element nodes.
    #[inline]
    pub fn tag(&self, id: NodeId) -> Option<Tag> {
        self.element(id).map(Element::tag)
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&n| self.parent(n))
    }

    /// `id` and all its descendants in pre-order. Frame content is not entered.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev());
        }
        out
    }

    /// Whether `node` is `ancestor` or lies below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Displayed predicate. Only elements can be hidden; other nodes follow
    /// their parent during indexing.
    pub fn is_displayed(&self, id: NodeId) -> bool {
        self.element(id).is_none_or(Element::is_displayed)
    }

    pub fn set_displayed(&mut self, id: NodeId, displayed: bool) {
        if let Some(element) = self.element_mut(id) {
            element.set_displayed(displayed);
        }
    }

    /// The nearest `<form>` ancestor.
    pub fn enclosing_form(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).find(|&a| self.tag(a) == Some(Tag::Form))
    }

    /// The first `<body>` in document order.
    pub fn body(&self) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&n| self.tag(n) == Some(Tag::Body))
    }

    /// The first element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len() as u32)
            .map(NodeId)
            .find(|&n| self.element(n).and_then(|e| e.attr("id")) == Some(id))
    }

    /// Text of all text descendants, concatenated without normalization.
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|n| match self.data(n) {
                NodeData::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Move every node of `other` into this arena, unattached.
    ///
    /// Returns the id the nested document root received here.
    pub fn adopt(&mut self, other: Document) -> NodeId {
        let offset = self.nodes.len() as u32;
        let shift = |n: NodeId| NodeId(n.0 + offset);
        for node in other.nodes {
            let mut data = node.data;
            if let NodeData::Element(e) = &mut data
                && let Some(content) = e.frame_content()
            {
                e.set_frame_content(shift(content));
            }
            self.nodes.push(Node {
                parent: node.parent.map(shift),
                children: node.children.into_iter().map(shift).collect(),
                data,
            });
        }
        NodeId(offset)
    }

    /// Show the document rooted at `content` inside the frame element `frame`.
    pub fn set_frame_content(&mut self, frame: NodeId, content: NodeId) {
        if let Some(element) = self.element_mut(frame) {
            element.set_frame_content(content);
        }
    }

    /// Short human-readable label for dumps: `<input#name>`, `"text"`.
    pub fn describe(&self, id: NodeId) -> String {
        match self.data(id) {
            NodeData::Document => "#document".to_owned(),
            NodeData::Doctype(name) => format!("<!DOCTYPE {name}>"),
            NodeData::Comment(_) => "<!-- -->".to_owned(),
            NodeData::Text(text) => format!("{:?}", truncate(text.trim(), 24)),
            NodeData::Element(e) => match e.attr("id") {
                Some(html_id) => format!("<{}#{}>", e.name(), html_id),
                None => format!("<{}>", e.name()),
            },
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
