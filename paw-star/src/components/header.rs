use rat_trail::{Node, ShellRenderer};

/// Site-wide navigation bar, rendered once into the header slot.
pub struct HeaderBar;

impl ShellRenderer for HeaderBar {
    fn render(&self, slot: &mut Node) {
        slot.append(
            Node::new("nav")
                .with_child(Node::new("strong").with_text("Paw Star"))
                .with_child(Node::new("span").with_text("   "))
                .with_child(Node::link("/", "Home"))
                .with_child(Node::new("span").with_text("  "))
                .with_child(Node::link("/stories", "Stories")),
        );
    }
}
