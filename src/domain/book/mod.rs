//! Book Context - 书籍结构上下文
//!
//! 职责:
//! - 章节/卷实体 (Section)
//! - 根章节列表 (SectionList)
//! - 解析阶段的领域错误

mod entities;
mod errors;

pub use entities::{Section, SectionList};
pub use errors::{BookError, RulesError};
