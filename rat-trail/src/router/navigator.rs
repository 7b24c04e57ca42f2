//! The navigator: owns the document shell and drives all route rendering.

use std::sync::Arc;

use crate::document::{Document, Node, NodePath, LINK_MARKER};
use crate::history::History;
use crate::page::ShellRenderer;
use crate::router::table::{normalize, RouteTable};

/// Id of the shell region populated by the header renderer.
pub const HEADER_SLOT_ID: &str = "header-slot";
/// Id of the single container whose contents are replaced on every route change.
pub const PAGE_SLOT_ID: &str = "page-slot";
/// Id of the shell region populated by the footer renderer.
pub const FOOTER_SLOT_ID: &str = "footer-slot";

/// Events the host delivers to the navigator after `init`.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The host finished a back/forward traversal; the history already
    /// points at the new entry.
    PopState,
    /// A click somewhere in the document, addressed by the deepest node hit.
    Click { target: NodePath },
}

/// Whether the navigator consumed an event or left it to the host's
/// default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

/// Shell configuration: where to mount and who renders the static regions.
pub struct Shell {
    mount: String,
    header: Arc<dyn ShellRenderer>,
    footer: Arc<dyn ShellRenderer>,
}

impl Shell {
    pub fn new(
        mount: impl Into<String>,
        header: Arc<dyn ShellRenderer>,
        footer: Arc<dyn ShellRenderer>,
    ) -> Self {
        Self {
            mount: mount.into(),
            header,
            footer,
        }
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }
}

/// Resolves paths to pages, swaps the page slot in place and keeps the
/// document title and session history in step.
///
/// The navigator never fails: unknown paths render the home page and a
/// missing mount or page slot turns the operation into a no-op. After
/// [`init`](Self::init) the host loop feeds [`HostEvent`]s to
/// [`handle_event`](Self::handle_event); both event sources funnel into the
/// same render-route-for-path operation.
pub struct Navigator<H: History> {
    routes: RouteTable,
    shell: Shell,
    history: H,
    document: Document,
}

impl<H: History> Navigator<H> {
    /// Create a navigator with a fresh document containing the shell's
    /// mount element.
    pub fn new(routes: RouteTable, shell: Shell, history: H) -> Self {
        let document = Document::with_mount(shell.mount.clone());
        Self {
            routes,
            shell,
            history,
            document,
        }
    }

    /// Replace the backing document. Mainly useful for hosts that prepare
    /// their own body tree.
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Path of the current history entry.
    pub fn current_path(&self) -> &str {
        self.history.path()
    }

    /// One-time startup: mount the shell and render the route matching the
    /// current location. The host loop takes over event delivery from here.
    pub fn init(&mut self) {
        self.ensure_shell();
        let path = self.history.path().to_string();
        self.render_route(&path);
    }

    /// Render the page for `path` into the page slot and update the title.
    /// Silently does nothing when the slot cannot be located or created.
    pub fn render_route(&mut self, path: &str) {
        let page = self.routes.resolve(path);
        if !self.ensure_shell() {
            return;
        }
        let Some(slot) = self.document.element_mut(PAGE_SLOT_ID) else {
            return;
        };
        slot.clear_children();
        page.render(slot);
        self.document.set_title(page.title());
    }

    /// Programmatic navigation: push a history entry when the normalized
    /// target differs from the current path, then render it. Repeated calls
    /// with the same path re-render without growing the history.
    pub fn navigate_to(&mut self, path: &str) {
        let target = normalize(path);
        if self.history.path() != target {
            self.history.push(target.clone());
        }
        self.render_route(&target);
    }

    /// Handle an event delivered by the host loop.
    pub fn handle_event(&mut self, event: HostEvent) -> EventOutcome {
        match event {
            HostEvent::PopState => {
                let path = self.history.path().to_string();
                self.render_route(&path);
                EventOutcome::Consumed
            }
            HostEvent::Click { target } => match self.intercept(&target) {
                Some(href) => {
                    self.navigate_to(&href);
                    EventOutcome::Consumed
                }
                None => EventOutcome::Ignored,
            },
        }
    }

    /// Traverse one entry back in the host history and re-render. Returns
    /// false at the start of the history.
    pub fn back(&mut self) -> bool {
        if self.history.back() {
            self.handle_event(HostEvent::PopState);
            true
        } else {
            false
        }
    }

    /// Traverse one entry forward in the host history and re-render.
    pub fn forward(&mut self) -> bool {
        if self.history.forward() {
            self.handle_event(HostEvent::PopState);
            true
        } else {
            false
        }
    }

    /// Walk from the clicked node up to the body looking for the nearest
    /// enclosing anchor carrying the in-app link marker. Returns the target
    /// path when the click should be intercepted.
    fn intercept(&self, target: &NodePath) -> Option<String> {
        for depth in (0..=target.len()).rev() {
            let Some(node) = self.document.node_at(&target.truncated(depth)) else {
                continue;
            };
            if node.tag() == "a" && node.has_attr(LINK_MARKER) {
                let href = node.attr("href").unwrap_or("/");
                return Some(href.to_string());
            }
        }
        None
    }

    /// Mount the shell if it does not exist yet; reuse it if it does.
    /// Header and footer renderers run exactly once, on first construction.
    /// Returns false when the mount element is missing.
    fn ensure_shell(&mut self) -> bool {
        if self.document.element(PAGE_SLOT_ID).is_some() {
            return true;
        }
        let header = Arc::clone(&self.shell.header);
        let footer = Arc::clone(&self.shell.footer);
        let Some(mount) = self.document.element_mut(&self.shell.mount) else {
            return false;
        };
        mount.replace_children(vec![
            Node::new("div").with_attr("id", HEADER_SLOT_ID),
            Node::new("main").with_attr("id", PAGE_SLOT_ID),
            Node::new("div").with_attr("id", FOOTER_SLOT_ID),
        ]);
        if let Some(slot) = self.document.element_mut(HEADER_SLOT_ID) {
            header.render(slot);
        }
        if let Some(slot) = self.document.element_mut(FOOTER_SLOT_ID) {
            footer.render(slot);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::page::Page;
    use crate::routes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPage {
        title: &'static str,
        renders: AtomicUsize,
    }

    impl CountingPage {
        fn new(title: &'static str) -> Self {
            Self {
                title,
                renders: AtomicUsize::new(0),
            }
        }
    }

    impl Page for CountingPage {
        fn title(&self) -> &str {
            self.title
        }

        fn render(&self, slot: &mut Node) {
            self.renders.fetch_add(1, Ordering::SeqCst);
            slot.append(Node::new("h1").with_text(self.title));
            slot.append(Node::link("/stories", "Stories"));
            slot.append(
                Node::new("a")
                    .with_attr("href", "https://example.com")
                    .with_text("Elsewhere"),
            );
        }
    }

    fn shell_with_counters(header_runs: Arc<AtomicUsize>) -> Shell {
        let counted = move |slot: &mut Node| {
            header_runs.fetch_add(1, Ordering::SeqCst);
            slot.append(Node::link("/", "Home"));
        };
        Shell::new("app", Arc::new(counted), Arc::new(|slot: &mut Node| {
            slot.append(Node::new("p").with_text("footer"));
        }))
    }

    fn navigator(start: &str) -> Navigator<MemoryHistory> {
        let table = routes! {
            home: CountingPage::new("Paw Star | Home"),
            "/stories" => CountingPage::new("Paw Star | Stories"),
        };
        let shell = shell_with_counters(Arc::new(AtomicUsize::new(0)));
        Navigator::new(table, shell, MemoryHistory::starting_at(start))
    }

    #[test]
    fn test_init_renders_current_location() {
        let mut nav = navigator("/stories");
        nav.init();
        assert_eq!(nav.document().title(), "Paw Star | Stories");
        assert_eq!(nav.current_path(), "/stories");
    }

    #[test]
    fn test_navigate_to_sets_title_and_path() {
        let mut nav = navigator("/");
        nav.init();
        nav.navigate_to("/stories");
        assert_eq!(nav.document().title(), "Paw Star | Stories");
        assert_eq!(nav.current_path(), "/stories");
    }

    #[test]
    fn test_repeat_navigation_pushes_once_but_renders_twice() {
        let stories = Arc::new(CountingPage::new("Paw Star | Stories"));
        let table = RouteTable::new(Arc::new(CountingPage::new("Paw Star | Home")))
            .with_route("/stories", Arc::clone(&stories) as Arc<dyn Page>);
        let shell = shell_with_counters(Arc::new(AtomicUsize::new(0)));
        let mut nav = Navigator::new(table, shell, MemoryHistory::new());
        nav.init();

        nav.navigate_to("/stories");
        nav.navigate_to("/stories");

        assert_eq!(nav.history().len(), 2);
        assert_eq!(stories.renders.load(Ordering::SeqCst), 2);
        // Slot holds exactly one copy of the page content.
        let slot = nav.document().element(PAGE_SLOT_ID).unwrap();
        assert_eq!(slot.children().len(), 3);
    }

    #[test]
    fn test_shell_renderers_run_exactly_once() {
        let header_runs = Arc::new(AtomicUsize::new(0));
        let table = routes! { home: CountingPage::new("home") };
        let shell = shell_with_counters(Arc::clone(&header_runs));
        let mut nav = Navigator::new(table, shell, MemoryHistory::new());

        nav.init();
        nav.navigate_to("/stories");
        nav.navigate_to("/");

        assert_eq!(header_runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_mount_is_a_silent_noop() {
        let table = routes! { home: CountingPage::new("home") };
        let shell = shell_with_counters(Arc::new(AtomicUsize::new(0)));
        let mut nav =
            Navigator::new(table, shell, MemoryHistory::new()).with_document(Document::new());

        nav.init();
        nav.navigate_to("/stories");

        assert_eq!(nav.document().title(), "");
        assert!(nav.document().element(PAGE_SLOT_ID).is_none());
    }

    #[test]
    fn test_click_on_marked_anchor_is_intercepted() {
        let mut nav = navigator("/");
        nav.init();

        let slot_path = nav.document().element_path(PAGE_SLOT_ID).unwrap();
        let link_path = slot_path.child(1); // the in-app stories link
        let outcome = nav.handle_event(HostEvent::Click { target: link_path });

        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(nav.current_path(), "/stories");
        assert_eq!(nav.document().title(), "Paw Star | Stories");
    }

    #[test]
    fn test_click_on_plain_anchor_is_ignored() {
        let mut nav = navigator("/");
        nav.init();

        let slot_path = nav.document().element_path(PAGE_SLOT_ID).unwrap();
        let external_path = slot_path.child(2); // anchor without the marker
        let outcome = nav.handle_event(HostEvent::Click {
            target: external_path,
        });

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(nav.current_path(), "/");
    }

    #[test]
    fn test_click_inside_marked_anchor_walks_up() {
        let table = routes! {
            home: CountingPage::new("home"),
            "/stories" => CountingPage::new("stories"),
        };
        let header = |slot: &mut Node| {
            slot.append(
                Node::new("a")
                    .with_attr("href", "/stories")
                    .with_attr(LINK_MARKER, "")
                    .with_child(Node::new("span").with_text("Stories")),
            );
        };
        let footer = |_: &mut Node| {};
        let shell = Shell::new("app", Arc::new(header), Arc::new(footer));
        let mut nav = Navigator::new(table, shell, MemoryHistory::new());
        nav.init();

        let header_path = nav.document().element_path(HEADER_SLOT_ID).unwrap();
        let span_path = header_path.child(0).child(0);
        let outcome = nav.handle_event(HostEvent::Click { target: span_path });

        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(nav.current_path(), "/stories");
    }

    #[test]
    fn test_back_returns_to_previous_page_without_pushing() {
        let mut nav = navigator("/");
        nav.init();
        nav.navigate_to("/stories");
        nav.navigate_to("/about"); // soft-404s to home content, still an entry

        let entries = nav.history().len();
        assert!(nav.back());
        assert_eq!(nav.current_path(), "/stories");
        assert_eq!(nav.document().title(), "Paw Star | Stories");
        assert_eq!(nav.history().len(), entries);

        assert!(nav.forward());
        assert_eq!(nav.current_path(), "/about");
    }

    #[test]
    fn test_back_at_history_start_reports_false() {
        let mut nav = navigator("/");
        nav.init();
        assert!(!nav.back());
        assert_eq!(nav.current_path(), "/");
    }
}
