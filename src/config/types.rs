//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::classifier::{
    DEFAULT_MAX_TITLE_LEN, DEFAULT_UNKNOWN_TITLE, DEFAULT_VOLUME_MATCH,
};
use crate::domain::{ClassificationRules, ParagraphStyle, RulesError};

/// 默认说明章节标题
pub const DEFAULT_TIPS_TITLE: &str = "制作说明";

/// 默认说明章节内容
pub const DEFAULT_TIPS_CONTENT: &str = "<p class=\"content\">本书由 txtbook 从纯文本自动切分章节生成。</p>\n\
<p class=\"content\">如果章节识别有误，可以通过 chapter_match / volume_match / exclude 调整匹配规则，\
或设置 tips = false 关闭本说明。</p>\n";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 解析配置
    #[serde(default)]
    pub parse: ParseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 段落拼接方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphStyleKind {
    #[default]
    Html,
    Plain,
}

/// 解析配置
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    /// 章节匹配正则，不写时使用内置规则
    #[serde(default)]
    pub chapter_match: Option<String>,

    /// 卷匹配正则，设置为 "false" 禁用卷识别
    #[serde(default = "default_volume_match")]
    pub volume_match: String,

    /// 排除无效章节/卷的正则，空串表示不排除
    #[serde(default)]
    pub exclude: Option<String>,

    /// 标题最大字数
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,

    /// 未知章节默认名称
    #[serde(default = "default_unknown_title")]
    pub unknown_title: String,

    /// 是否在首尾添加说明章节
    #[serde(default = "default_tips")]
    pub tips: bool,

    #[serde(default = "default_tips_title")]
    pub tips_title: String,

    #[serde(default = "default_tips_content")]
    pub tips_content: String,

    /// 段落拼接方式: html, plain
    #[serde(default)]
    pub paragraph_style: ParagraphStyleKind,

    /// plain 模式下的段落缩进字数
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// 是否分离章节序号和标题
    #[serde(default)]
    pub separate_chapter_number: bool,
}

fn default_volume_match() -> String {
    DEFAULT_VOLUME_MATCH.to_string()
}

fn default_max_title_len() -> usize {
    DEFAULT_MAX_TITLE_LEN
}

fn default_unknown_title() -> String {
    DEFAULT_UNKNOWN_TITLE.to_string()
}

fn default_tips() -> bool {
    true
}

fn default_tips_title() -> String {
    DEFAULT_TIPS_TITLE.to_string()
}

fn default_tips_content() -> String {
    DEFAULT_TIPS_CONTENT.to_string()
}

fn default_indent() -> usize {
    2
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            chapter_match: None,
            volume_match: default_volume_match(),
            exclude: None,
            max_title_len: default_max_title_len(),
            unknown_title: default_unknown_title(),
            tips: default_tips(),
            tips_title: default_tips_title(),
            tips_content: default_tips_content(),
            paragraph_style: ParagraphStyleKind::default(),
            indent: default_indent(),
            separate_chapter_number: false,
        }
    }
}

impl ParseConfig {
    /// 段落拼接方式
    pub fn paragraph_style(&self) -> ParagraphStyle {
        match self.paragraph_style {
            ParagraphStyleKind::Html => ParagraphStyle::Html,
            ParagraphStyleKind::Plain => ParagraphStyle::Plain {
                indent: self.indent,
            },
        }
    }

    /// 编译为分类规则
    ///
    /// `exclude` 未设置时沿用内置排除规则；设置为空串时不排除。
    pub fn to_rules(&self) -> Result<ClassificationRules, RulesError> {
        let mut builder = ClassificationRules::builder()
            .chapter_match(self.chapter_match.as_deref().filter(|p| !p.is_empty()))
            .volume_match(self.volume_match.as_str())
            .max_title_len(self.max_title_len)
            .fallback_title(self.unknown_title.as_str())
            .paragraph_style(self.paragraph_style());

        if let Some(exclude) = &self.exclude {
            builder = builder.exclusion(Some(exclude.as_str()));
        }
        if self.tips {
            builder = builder.tutorial(self.tips_title.as_str(), self.tips_content.as_str());
        }

        builder.build()
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TitleKind;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.parse.max_title_len, 35);
        assert_eq!(config.parse.unknown_title, "章节正文");
        assert!(config.parse.tips);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_default_rules_compile() {
        let rules = ParseConfig::default().to_rules().unwrap();
        assert_eq!(rules.classify("第一章 开端"), TitleKind::Chapter);
        assert_eq!(rules.classify("第三章的时候"), TitleKind::Excluded);
        assert_eq!(rules.tutorial().unwrap().title(), "制作说明");
    }

    #[test]
    fn test_empty_exclude_disables_default() {
        let config = ParseConfig {
            exclude: Some(String::new()),
            ..ParseConfig::default()
        };
        let rules = config.to_rules().unwrap();
        assert_eq!(rules.classify("第三章的时候"), TitleKind::Chapter);
    }

    #[test]
    fn test_tips_disabled() {
        let config = ParseConfig {
            tips: false,
            ..ParseConfig::default()
        };
        assert!(config.to_rules().unwrap().tutorial().is_none());
    }

    #[test]
    fn test_plain_paragraph_style() {
        let config = ParseConfig {
            paragraph_style: ParagraphStyleKind::Plain,
            indent: 4,
            ..ParseConfig::default()
        };
        assert_eq!(config.paragraph_style(), ParagraphStyle::Plain { indent: 4 });
    }
}
