//! Parse Commands

use std::path::PathBuf;

/// 解析书稿命令
#[derive(Debug, Clone)]
pub struct ParseManuscript {
    pub path: PathBuf,
}

impl ParseManuscript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
