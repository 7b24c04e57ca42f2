//! Content tree nodes and path-based addressing.

/// Attribute that marks an anchor as an in-app link.
///
/// Anchors carrying this marker are intercepted by the navigator; anchors
/// without it are left to the host's default behavior.
pub const LINK_MARKER: &str = "data-link";

/// Address of a node inside a document: the chain of child indices leading
/// from the body down to the node. The empty path addresses the body itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The path of the body node.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Extend this path by one child index.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The first `depth` segments of this path. `truncated(0)` is the root.
    pub fn truncated(&self, depth: usize) -> Self {
        Self(self.0[..depth.min(self.0.len())].to_vec())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A node in the content tree: a tag, attributes, optional inline text and
/// child nodes. Nodes are plain values; pages build them with the chained
/// constructors and hand them to the slot they are rendering into.
///
/// # Example
/// ```
/// use rat_trail::document::Node;
///
/// let teaser = Node::new("p")
///     .with_text("Fresh stories from the alley.")
///     .with_child(Node::link("/stories", "Read them"));
/// assert_eq!(teaser.children()[0].attr("href"), Some("/stories"));
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// An anchor carrying the in-app link marker.
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("a")
            .with_attr("href", href)
            .with_attr(LINK_MARKER, "")
            .with_text(label)
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child node. This is the primary way pages populate a slot.
    pub fn append(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Depth-first lookup of a descendant (or self) by `id` attribute.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Resolve a path relative to this node.
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        let mut node = self;
        for &index in path.indices() {
            node = node.children.get(index)?;
        }
        Some(node)
    }
}
