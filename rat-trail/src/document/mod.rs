//! In-memory document: a title plus a tree of content nodes.
//!
//! The document is the mutable surface the navigator renders into and the
//! screen projects from. Nodes are addressed either by `id` attribute or by
//! a [`NodePath`] of child indices rooted at the body.

pub mod node;

pub use node::{Node, NodePath, LINK_MARKER};

/// The document: display title and body tree.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    body: Node,
}

impl Document {
    /// An empty document with a bare body and no title.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: Node::new("body"),
        }
    }

    /// A document whose body holds a single mount element with the given id.
    /// This is the usual starting point for a navigator.
    pub fn with_mount(id: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.body.append(Node::new("div").with_attr("id", id));
        document
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Node {
        &mut self.body
    }

    /// Find an element anywhere in the body by `id` attribute.
    pub fn element(&self, id: &str) -> Option<&Node> {
        self.body.find(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.body.find_mut(id)
    }

    /// The path of the element with the given id, if present.
    pub fn element_path(&self, id: &str) -> Option<NodePath> {
        fn search(node: &Node, id: &str, path: NodePath) -> Option<NodePath> {
            if node.id() == Some(id) {
                return Some(path);
            }
            node.children()
                .iter()
                .enumerate()
                .find_map(|(index, child)| search(child, id, path.child(index)))
        }
        search(&self.body, id, NodePath::root())
    }

    /// Resolve a path from the body root.
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        self.body.node_at(path)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mount_exposes_element() {
        let document = Document::with_mount("app");
        assert!(document.element("app").is_some());
        assert_eq!(document.element_path("app"), Some(NodePath::new(vec![0])));
    }

    #[test]
    fn test_element_path_matches_node_at() {
        let mut document = Document::with_mount("app");
        document
            .element_mut("app")
            .unwrap()
            .append(Node::new("main").with_attr("id", "page-slot"));

        let path = document.element_path("page-slot").unwrap();
        assert_eq!(document.node_at(&path).unwrap().id(), Some("page-slot"));
    }

    #[test]
    fn test_title_starts_empty() {
        let mut document = Document::new();
        assert_eq!(document.title(), "");
        document.set_title("Paw Star | Home");
        assert_eq!(document.title(), "Paw Star | Home");
    }
}
