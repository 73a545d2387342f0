//! Manuscript Source Adapters

mod file_source;
mod memory_source;

pub use file_source::FileManuscriptSource;
pub use memory_source::InMemoryManuscriptSource;
