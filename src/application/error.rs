//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::SourceError;
use crate::domain::{BookError, RulesError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 书稿无法打开
    #[error("Source error: {0}")]
    SourceError(#[from] SourceError),

    /// 读取书稿过程中失败
    #[error("Parse error: {0}")]
    ParseError(#[from] BookError),

    /// 分类规则无效
    #[error("Invalid rules: {0}")]
    InvalidRules(#[from] RulesError),
}
