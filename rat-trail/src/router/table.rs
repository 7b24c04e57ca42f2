//! Static path → page mapping.

use std::collections::HashMap;
use std::sync::Arc;

use crate::page::Page;

/// Canonicalize a routing path.
///
/// Empty input maps to `/`; trailing separators are stripped from anything
/// other than `/` itself; all other inputs pass through unchanged. Total and
/// idempotent, so every equivalent spelling lands on one table key.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Immutable mapping from normalized path to page.
///
/// Built once at startup. Lookups never fail: unknown paths fall back to the
/// home page rather than surfacing a not-found state.
///
/// # Example
/// ```ignore
/// let table = routes! {
///     home: IndexPage,
///     "/stories" => StoriesPage,
/// };
/// table.resolve("/stories/"); // same page as "/stories"
/// ```
pub struct RouteTable {
    routes: HashMap<String, Arc<dyn Page>>,
    fallback: Arc<dyn Page>,
}

impl RouteTable {
    /// Create a table with `home` registered at `/` and doubling as the
    /// fallback for unknown paths.
    pub fn new(home: Arc<dyn Page>) -> Self {
        let mut routes = HashMap::new();
        routes.insert("/".to_string(), Arc::clone(&home));
        Self {
            routes,
            fallback: home,
        }
    }

    /// Register a page. The path is normalized before insertion.
    pub fn register(&mut self, path: &str, page: Arc<dyn Page>) {
        self.routes.insert(normalize(path), page);
    }

    /// Chained form of [`register`](Self::register).
    pub fn with_route(mut self, path: &str, page: Arc<dyn Page>) -> Self {
        self.register(path, page);
        self
    }

    /// Look up the page for a path, falling back to the home page when no
    /// entry matches.
    pub fn resolve(&self, path: &str) -> Arc<dyn Page> {
        self.routes
            .get(&normalize(path))
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Build a [`RouteTable`] from a home page and a list of path → page entries.
///
/// # Example
/// ```ignore
/// let table = routes! {
///     home: IndexPage,
///     "/stories" => StoriesPage,
///     "/about" => AboutPage,
/// };
/// ```
#[macro_export]
macro_rules! routes {
    ( home: $home:expr $(, $path:literal => $page:expr )* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::RouteTable::new(::std::sync::Arc::new($home));
        $( table.register($path, ::std::sync::Arc::new($page)); )*
        table
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Node;

    struct StubPage(&'static str);

    impl Page for StubPage {
        fn title(&self) -> &str {
            self.0
        }

        fn render(&self, slot: &mut Node) {
            slot.append(Node::new("p").with_text(self.0));
        }
    }

    #[test]
    fn test_normalize_empty_and_root() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(normalize("/stories/"), "/stories");
        assert_eq!(normalize("/stories"), "/stories");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["", "/", "/stories", "/stories/", "/a//", "//", "relative/"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_home() {
        let table = RouteTable::new(Arc::new(StubPage("home")));
        let home = table.resolve("/");
        let unknown = table.resolve("/unknown");
        assert!(Arc::ptr_eq(&home, &unknown));
    }

    #[test]
    fn test_resolve_trailing_separator_equivalence() {
        let table =
            RouteTable::new(Arc::new(StubPage("home"))).with_route("/stories", Arc::new(StubPage("stories")));
        let plain = table.resolve("/stories");
        let trailing = table.resolve("/stories/");
        assert!(Arc::ptr_eq(&plain, &trailing));
        assert_eq!(plain.title(), "stories");
    }

    #[test]
    fn test_routes_macro_registers_entries() {
        let table = routes! {
            home: StubPage("home"),
            "/stories/" => StubPage("stories"),
        };
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("/stories").title(), "stories");
        assert_eq!(table.resolve("/nope").title(), "home");
    }
}
