use rat_trail::{Node, Page};

/// The front page. Also serves as the fallback for unknown paths.
pub struct IndexPage;

impl Page for IndexPage {
    fn title(&self) -> &str {
        "Paw Star | Home"
    }

    fn render(&self, slot: &mut Node) {
        slot.append(Node::new("h1").with_text("Paw Star"));
        slot.append(Node::new("p").with_text(
            "Stories about the cats of our neighborhood, one whisker at a time.",
        ));
        slot.append(
            Node::new("p")
                .with_text("New here? ")
                .with_child(Node::link("/stories", "Read the latest stories")),
        );
    }
}
