//! Domain Layer - 领域层
//!
//! 纯文本小说的结构恢复，按流水线顺序：
//! - encoding: 编码探测与解码
//! - sanitizer: 行内标签清洗
//! - classifier: 标题分类与分类规则
//! - segmenter: 章节切分状态机
//! - assembler: 卷/章树组装与说明章节
//! - chapter_title: 章节序号拆分（供渲染器使用）
//! - book: 章节实体与领域错误

pub mod assembler;
pub mod book;
pub mod chapter_title;
pub mod classifier;
pub mod encoding;
pub mod parser;
pub mod sanitizer;
pub mod segmenter;

pub use book::{BookError, RulesError, Section, SectionList};
pub use chapter_title::{TitleDecomposer, TitleParts};
pub use classifier::{ClassificationRules, ParagraphStyle, TitleKind, VolumeRule};
pub use parser::{parse, ParsedBook};
pub use sanitizer::LineSanitizer;
