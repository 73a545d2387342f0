//! File Manuscript Source - 文件系统书稿读取
//!
//! 实现 ManuscriptSourcePort trait

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::application::ports::{ManuscriptSourcePort, SourceError};

/// 从本地文件读取书稿
#[derive(Debug, Default, Clone)]
pub struct FileManuscriptSource;

impl FileManuscriptSource {
    pub fn new() -> Self {
        Self
    }
}

impl ManuscriptSourcePort for FileManuscriptSource {
    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, SourceError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.to_string_lossy().to_string()),
            _ => SourceError::IoError(format!("{}: {}", path.display(), e)),
        })?;

        tracing::debug!(path = %path.display(), "Opened manuscript file");
        Ok(Box::new(file))
    }
}
