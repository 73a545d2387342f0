//! Parse Command Handlers

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::commands::ParseManuscript;
use crate::application::error::ApplicationError;
use crate::application::ports::ManuscriptSourcePort;
use crate::config::ParseConfig;
use crate::domain::{parse, ClassificationRules, LineSanitizer, SectionList};

/// 解析响应
#[derive(Debug, Clone)]
pub struct ParseManuscriptResponse {
    pub path: PathBuf,
    pub sections: SectionList,
    /// 实际使用的编码
    pub encoding: &'static str,
    /// 识别到的标题行数
    pub heading_count: usize,
    /// 章节节点总数（顶层 + 卷内）
    pub section_count: usize,
    pub used_fallback: bool,
    pub malformed: bool,
    pub elapsed: Duration,
}

/// ParseManuscript Handler
///
/// 规则与清洗器只读，同一个 handler 可在多个线程里并发处理不同书稿。
pub struct ParseManuscriptHandler {
    source: Arc<dyn ManuscriptSourcePort>,
    rules: Arc<ClassificationRules>,
    sanitizer: Arc<LineSanitizer>,
}

impl ParseManuscriptHandler {
    pub fn new(source: Arc<dyn ManuscriptSourcePort>, rules: Arc<ClassificationRules>) -> Self {
        Self {
            source,
            rules,
            sanitizer: Arc::new(LineSanitizer::new()),
        }
    }

    /// 从解析配置构建（编译正则）
    pub fn from_config(
        source: Arc<dyn ManuscriptSourcePort>,
        config: &ParseConfig,
    ) -> Result<Self, ApplicationError> {
        let rules = config.to_rules()?;
        Ok(Self::new(source, Arc::new(rules)))
    }

    pub fn handle(&self, command: ParseManuscript) -> Result<ParseManuscriptResponse, ApplicationError> {
        tracing::info!(path = %command.path.display(), "Reading manuscript");
        let start = Instant::now();

        let reader = self.source.open(&command.path)?;
        let book = parse(reader, &self.rules, &self.sanitizer)?;
        let elapsed = start.elapsed();
        let section_count = book.sections.section_count();

        tracing::info!(
            path = %command.path.display(),
            encoding = book.encoding,
            headings = book.heading_count,
            sections = section_count,
            chapters = book.sections.leaf_count(),
            used_fallback = book.used_fallback,
            elapsed_ms = elapsed.as_millis() as u64,
            "Manuscript parsed"
        );
        if book.heading_count == 0 {
            tracing::warn!(
                path = %command.path.display(),
                "No headings recognized, whole text kept under the fallback title"
            );
        }

        Ok(ParseManuscriptResponse {
            path: command.path,
            sections: book.sections,
            encoding: book.encoding,
            heading_count: book.heading_count,
            section_count,
            used_fallback: book.used_fallback,
            malformed: book.malformed,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::InMemoryManuscriptSource;

    fn handler(source: InMemoryManuscriptSource) -> ParseManuscriptHandler {
        let config = ParseConfig {
            tips: false,
            ..ParseConfig::default()
        };
        ParseManuscriptHandler::from_config(Arc::new(source), &config).unwrap()
    }

    #[test]
    fn test_handle_parses_manuscript() {
        let source = InMemoryManuscriptSource::new();
        source.insert("book.txt", "第一卷 起\n第一章 开端\n正文\n第二章 发展\n正文".as_bytes());

        let response = handler(source)
            .handle(ParseManuscript::new("book.txt"))
            .unwrap();

        assert_eq!(response.heading_count, 3);
        assert_eq!(response.section_count, 3);
        assert_eq!(response.sections.len(), 1);
        assert_eq!(response.encoding, "UTF-8");
        assert!(!response.used_fallback);
    }

    #[test]
    fn test_handle_reports_fallback_without_headings() {
        let source = InMemoryManuscriptSource::new();
        source.insert("notes.txt", "只是一些\n没有标题的文字\n".as_bytes());

        let response = handler(source)
            .handle(ParseManuscript::new("notes.txt"))
            .unwrap();

        assert!(response.used_fallback);
        assert_eq!(response.heading_count, 0);
        assert_eq!(response.section_count, 1);
        assert_eq!(response.sections.sections()[0].title(), "章节正文");
    }

    #[test]
    fn test_missing_manuscript() {
        let err = handler(InMemoryManuscriptSource::new())
            .handle(ParseManuscript::new("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::SourceError(_)));
    }

    #[test]
    fn test_invalid_rules() {
        let config = ParseConfig {
            chapter_match: Some("第(".to_string()),
            ..ParseConfig::default()
        };
        let result =
            ParseManuscriptHandler::from_config(Arc::new(InMemoryManuscriptSource::new()), &config);
        assert!(matches!(result, Err(ApplicationError::InvalidRules(_))));
    }
}
