use rat_trail::{Node, ShellRenderer};

/// Static footer, rendered once into the footer slot.
pub struct FooterBar;

impl ShellRenderer for FooterBar {
    fn render(&self, slot: &mut Node) {
        slot.append(
            Node::new("p")
                .with_text("Paw Star, tales from the alley.   ")
                // Plain anchor: follows the host's default behavior, the
                // navigator leaves it alone.
                .with_child(
                    Node::new("a")
                        .with_attr("href", "https://catwelfare.example/adopt")
                        .with_text("Adopt a cat"),
                ),
        );
    }
}
