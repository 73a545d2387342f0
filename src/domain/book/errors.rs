//! Book Context - Errors

use thiserror::Error;

/// 解析错误
///
/// 只有读取源文件会失败；分类、清洗、组装都是全函数。
#[derive(Debug, Error)]
pub enum BookError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
}

impl From<std::io::Error> for BookError {
    fn from(err: std::io::Error) -> Self {
        BookError::FileRead(err.to_string())
    }
}

/// 分类规则构建错误
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("无效的正则表达式 `{field}`: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("标题最大字数必须大于 0")]
    InvalidMaxTitleLength,

    #[error("未知章节默认名称不能为空")]
    EmptyFallbackTitle,
}
