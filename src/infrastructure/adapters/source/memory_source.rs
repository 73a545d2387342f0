//! In-Memory Manuscript Source - 内存书稿来源
//!
//! 按路径保存书稿字节，主要用于测试和嵌入调用

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::application::ports::{ManuscriptSourcePort, SourceError};

#[derive(Debug, Default)]
pub struct InMemoryManuscriptSource {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl InMemoryManuscriptSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        files.insert(path.into(), bytes.into());
    }
}

impl ManuscriptSourcePort for InMemoryManuscriptSource {
    fn open(&self, path: &Path) -> Result<Box<dyn Read + Send>, SourceError> {
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        let bytes = files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string_lossy().to_string()))?;
        Ok(Box::new(Cursor::new(bytes)))
    }
}
