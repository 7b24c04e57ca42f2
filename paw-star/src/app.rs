//! Site wiring: route table, shell and navigator.

use std::sync::Arc;

use rat_trail::{routes, MemoryHistory, Navigator, Shell};

use crate::components::{FooterBar, HeaderBar};
use crate::pages::{IndexPage, StoriesPage};

/// Id of the root container the shell mounts into.
const APP_MOUNT_ID: &str = "app";

/// Build the Paw Star navigator, starting from the given location path.
pub fn build_navigator(start_path: &str) -> Navigator<MemoryHistory> {
    let table = routes! {
        home: IndexPage,
        "/stories" => StoriesPage,
    };
    let shell = Shell::new(APP_MOUNT_ID, Arc::new(HeaderBar), Arc::new(FooterBar));
    Navigator::new(table, shell, MemoryHistory::starting_at(start_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rat_trail::{Document, EventOutcome, HostEvent, Node, NodePath};

    fn anchor_path(document: &Document, href: &str) -> Option<NodePath> {
        fn walk(node: &Node, path: NodePath, href: &str) -> Option<NodePath> {
            if node.tag() == "a" && node.attr("href") == Some(href) {
                return Some(path);
            }
            node.children()
                .iter()
                .enumerate()
                .find_map(|(index, child)| walk(child, path.child(index), href))
        }
        walk(document.body(), NodePath::root(), href)
    }

    #[test]
    fn test_initial_route_follows_start_path() {
        let mut nav = build_navigator("/stories");
        nav.init();
        assert_eq!(nav.document().title(), "Paw Star | Stories");
    }

    #[test]
    fn test_trailing_separator_start_path_renders_same_page() {
        let mut nav = build_navigator("/stories/");
        nav.init();
        assert_eq!(nav.document().title(), "Paw Star | Stories");
    }

    #[test]
    fn test_unknown_path_renders_home_without_erroring() {
        let mut nav = build_navigator("/no-such-page");
        nav.init();
        assert_eq!(nav.document().title(), "Paw Star | Home");
        assert_eq!(nav.current_path(), "/no-such-page");
    }

    #[test]
    fn test_header_nav_click_switches_page() {
        let mut nav = build_navigator("/");
        nav.init();

        let stories_link = anchor_path(nav.document(), "/stories").unwrap();
        let outcome = nav.handle_event(HostEvent::Click {
            target: stories_link,
        });

        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(nav.document().title(), "Paw Star | Stories");
        assert_eq!(nav.current_path(), "/stories");
    }

    #[test]
    fn test_external_footer_link_is_left_to_the_host() {
        let mut nav = build_navigator("/");
        nav.init();

        let adopt = anchor_path(nav.document(), "https://catwelfare.example/adopt").unwrap();
        let outcome = nav.handle_event(HostEvent::Click { target: adopt });

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(nav.current_path(), "/");
        assert_eq!(nav.document().title(), "Paw Star | Home");
    }

    #[test]
    fn test_back_button_returns_to_previous_page() {
        let mut nav = build_navigator("/");
        nav.init();
        nav.navigate_to("/stories");
        nav.navigate_to("/");

        assert!(nav.back());
        assert_eq!(nav.document().title(), "Paw Star | Stories");
        assert_eq!(nav.current_path(), "/stories");
    }
}
