//! 应用层 - 查询

mod outline;

pub use outline::{build_outline, OutlineSection};
