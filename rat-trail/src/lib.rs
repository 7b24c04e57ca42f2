pub mod application;
pub mod document;
pub mod error;
pub mod history;
pub mod page;
pub mod router;
pub mod screen;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{AppContext, Application};
pub use document::{Document, Node, NodePath, LINK_MARKER};
pub use history::{History, MemoryHistory};
pub use page::{Page, ShellRenderer};
pub use router::{normalize, EventOutcome, HostEvent, Navigator, RouteTable, Shell};
pub use screen::{Link, Screen};
