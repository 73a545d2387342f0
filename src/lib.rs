//! txtbook - 纯文本小说章节结构恢复
//!
//! 把编码未知、标记混乱的 txt 小说整理成卷/章树，交给电子书渲染器。
//!
//! 领域层 (domain/):
//! - 编码探测、标签清洗、标题分类、章节切分、卷章组装、序号拆分
//!
//! 应用层 (application/):
//! - Ports: ManuscriptSourcePort
//! - Commands: ParseManuscript
//! - Queries: 章节大纲
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件 / 内存书稿来源

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{parse, ClassificationRules, Section, SectionList};
