//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 书稿来源端口
//! - commands: 解析书稿命令及处理器
//! - queries: 章节大纲
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{ParseManuscriptHandler, ParseManuscriptResponse},
    ParseManuscript,
};
pub use error::ApplicationError;
pub use ports::{ManuscriptSourcePort, SourceError};
pub use queries::{build_outline, OutlineSection};
