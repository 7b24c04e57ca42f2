//! Page and shell-renderer contracts.

pub mod traits;

pub use traits::{Page, ShellRenderer};
