use rat_trail::{Node, Page};

/// The story archive.
pub struct StoriesPage;

impl Page for StoriesPage {
    fn title(&self) -> &str {
        "Paw Star | Stories"
    }

    fn render(&self, slot: &mut Node) {
        slot.append(Node::new("h1").with_text("Stories"));
        slot.append(
            Node::new("ul")
                .with_child(story(
                    "Biscuit and the window ledge",
                    "Four floors up, zero regrets.",
                ))
                .with_child(story(
                    "The great sardine standoff",
                    "Two toms and one tin on an otherwise quiet Tuesday.",
                ))
                .with_child(story(
                    "Mittens learns the doorbell",
                    "Our youngest resident discovers visitors come with hands.",
                )),
        );
        slot.append(Node::new("p").with_child(Node::link("/", "Back to the front page")));
    }
}

fn story(title: &str, teaser: &str) -> Node {
    Node::new("li")
        .with_child(Node::new("strong").with_text(title))
        .with_child(Node::new("span").with_text(format!("  {teaser}")))
}
