pub mod index;
pub mod stories;

pub use index::IndexPage;
pub use stories::StoriesPage;
