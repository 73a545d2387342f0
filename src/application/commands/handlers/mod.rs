//! Command Handlers

mod parse_handlers;

pub use parse_handlers::{ParseManuscriptHandler, ParseManuscriptResponse};
