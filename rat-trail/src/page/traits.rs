use crate::document::Node;

/// A routable page: a display title plus a renderer that populates the
/// page slot it is given.
///
/// Pages are registered once at startup and never mutated afterwards; the
/// navigator clears the slot before every call, so `render` always starts
/// from an empty container. The `&mut Node` borrow ends with the call, so
/// a page cannot retain a reference into the document.
pub trait Page: Send + Sync + 'static {
    /// Title shown by the host while this page is current.
    fn title(&self) -> &str;

    /// Fill the (already cleared) page slot with this page's content.
    fn render(&self, slot: &mut Node);
}

/// Renderer for a static shell region (header or footer).
///
/// Called exactly once, when the shell is first constructed; the region is
/// never re-rendered afterwards.
pub trait ShellRenderer: Send + Sync + 'static {
    fn render(&self, slot: &mut Node);
}

/// Plain functions and closures work as shell renderers.
impl<F> ShellRenderer for F
where
    F: Fn(&mut Node) + Send + Sync + 'static,
{
    fn render(&self, slot: &mut Node) {
        self(slot)
    }
}
