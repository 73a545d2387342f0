//! Manuscript Source Port - 书稿来源抽象
//!
//! 定义获取书稿字节流的抽象接口，具体实现在 infrastructure/adapters 层

use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// 书稿读取错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Manuscript not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Manuscript Source Port
///
/// 打开一份书稿，返回可读的字节流
pub trait ManuscriptSourcePort: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, SourceError>;
}
