//! 标题分类
//!
//! 判断一行文本是卷标题、章标题、被排除的伪标题还是普通正文。

use regex::Regex;

use super::book::{RulesError, Section};

/// 默认章节匹配规则（未显式指定时使用）
pub const DEFAULT_CHAPTER_MATCH: &str = r"^(?:第[0-9０-９一二三四五六七八九十零〇百千两 ]+[章回节集卷部篇]|(?:引子|楔子|序章|序言|最终章|尾声|后记|完本感言|番外))";

/// 默认卷匹配规则
pub const DEFAULT_VOLUME_MATCH: &str = r"^第[0-9０-９一二三四五六七八九十零〇百千两 ]+[卷部]";

/// 默认排除规则：形如“第三章的……”的正文句子
pub const DEFAULT_EXCLUSION: &str =
    r"^第[0-9０-９一二三四五六七八九十零〇百千两]+[章回节集卷部篇](?:的|了|是|都|也|就|和|里|中)";

/// 禁用卷识别的哨兵值
pub const VOLUME_DISABLED: &str = "false";

/// 默认标题最大字数
pub const DEFAULT_MAX_TITLE_LEN: usize = 35;

/// 默认未知章节名称
pub const DEFAULT_UNKNOWN_TITLE: &str = "章节正文";

/// 分类结果
///
/// `Excluded` 优先于 `Volume` / `Chapter`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    Volume,
    Chapter,
    Excluded,
    Content,
}

impl TitleKind {
    /// 是否触发章节切换
    pub fn is_heading(self) -> bool {
        matches!(self, TitleKind::Volume | TitleKind::Chapter)
    }
}

/// 卷识别规则
#[derive(Debug, Clone)]
pub enum VolumeRule {
    Disabled,
    Pattern(Regex),
}

impl VolumeRule {
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            VolumeRule::Disabled => false,
            VolumeRule::Pattern(re) => re.is_match(line),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, VolumeRule::Pattern(_))
    }
}

/// 段落拼接方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// `<p class="content">…</p>`，缩进交给渲染器 CSS
    #[default]
    Html,
    /// 行首加 `indent` 个全角空格
    Plain { indent: usize },
}

impl ParagraphStyle {
    /// 将一行正文追加到缓冲区
    pub fn append(self, buf: &mut String, line: &str) {
        match self {
            ParagraphStyle::Html => {
                buf.push_str(r#"<p class="content">"#);
                buf.push_str(line);
                buf.push_str("</p>\n");
            }
            ParagraphStyle::Plain { indent } => {
                buf.extend(std::iter::repeat('\u{3000}').take(indent));
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }
}

/// 分类规则
///
/// 解析前构建一次，之后只读；可在多个解析实例间共享。
#[derive(Debug, Clone)]
pub struct ClassificationRules {
    chapter: Regex,
    volume: VolumeRule,
    exclusion: Option<Regex>,
    max_title_len: usize,
    fallback_title: String,
    paragraph_style: ParagraphStyle,
    tutorial: Option<Section>,
}

impl ClassificationRules {
    /// 从原始规则字符串构建
    pub fn builder() -> ClassificationRulesBuilder {
        ClassificationRulesBuilder::default()
    }

    pub fn volume(&self) -> &VolumeRule {
        &self.volume
    }

    pub fn max_title_len(&self) -> usize {
        self.max_title_len
    }

    pub fn fallback_title(&self) -> &str {
        &self.fallback_title
    }

    pub fn paragraph_style(&self) -> ParagraphStyle {
        self.paragraph_style
    }

    pub fn tutorial(&self) -> Option<&Section> {
        self.tutorial.as_ref()
    }

    /// 对一行（已清洗、已去首尾空白）分类
    ///
    /// 超过最大字数的行直接视为正文，不做正则匹配。
    pub fn classify(&self, line: &str) -> TitleKind {
        if line.chars().count() > self.max_title_len {
            return TitleKind::Content;
        }

        let excluded = self
            .exclusion
            .as_ref()
            .is_some_and(|re| re.is_match(line));

        match (excluded, self.volume.is_match(line), self.chapter.is_match(line)) {
            (true, _, _) => TitleKind::Excluded,
            (false, true, _) => TitleKind::Volume,
            (false, false, true) => TitleKind::Chapter,
            (false, false, false) => TitleKind::Content,
        }
    }
}

/// `ClassificationRules` 构建器
#[derive(Debug, Clone)]
pub struct ClassificationRulesBuilder {
    chapter: Option<String>,
    volume: String,
    exclusion: Option<String>,
    max_title_len: usize,
    fallback_title: String,
    paragraph_style: ParagraphStyle,
    tutorial: Option<(String, String)>,
}

impl Default for ClassificationRulesBuilder {
    fn default() -> Self {
        Self {
            chapter: None,
            volume: DEFAULT_VOLUME_MATCH.to_string(),
            exclusion: Some(DEFAULT_EXCLUSION.to_string()),
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            fallback_title: DEFAULT_UNKNOWN_TITLE.to_string(),
            paragraph_style: ParagraphStyle::default(),
            tutorial: None,
        }
    }
}

impl ClassificationRulesBuilder {
    /// 章节规则；`None` 时使用默认规则
    pub fn chapter_match(mut self, pattern: Option<impl Into<String>>) -> Self {
        self.chapter = pattern.map(Into::into);
        self
    }

    /// 卷规则；`"false"` 禁用卷识别
    pub fn volume_match(mut self, pattern: impl Into<String>) -> Self {
        self.volume = pattern.into();
        self
    }

    /// 排除规则；`None` 或空串表示不排除
    pub fn exclusion(mut self, pattern: Option<impl Into<String>>) -> Self {
        self.exclusion = pattern.map(Into::into).filter(|p| !p.is_empty());
        self
    }

    pub fn max_title_len(mut self, max: usize) -> Self {
        self.max_title_len = max;
        self
    }

    pub fn fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn paragraph_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = style;
        self
    }

    /// 启用首尾说明章节
    pub fn tutorial(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.tutorial = Some((title.into(), content.into()));
        self
    }

    pub fn build(self) -> Result<ClassificationRules, RulesError> {
        if self.max_title_len == 0 {
            return Err(RulesError::InvalidMaxTitleLength);
        }
        if self.fallback_title.trim().is_empty() {
            return Err(RulesError::EmptyFallbackTitle);
        }

        let chapter = compile(
            "chapter_match",
            self.chapter.as_deref().unwrap_or(DEFAULT_CHAPTER_MATCH),
        )?;

        let volume = if self.volume == VOLUME_DISABLED {
            VolumeRule::Disabled
        } else {
            VolumeRule::Pattern(compile("volume_match", &self.volume)?)
        };

        let exclusion = self
            .exclusion
            .as_deref()
            .map(|p| compile("exclude", p))
            .transpose()?;

        Ok(ClassificationRules {
            chapter,
            volume,
            exclusion,
            max_title_len: self.max_title_len,
            fallback_title: self.fallback_title,
            paragraph_style: self.paragraph_style,
            tutorial: self
                .tutorial
                .map(|(title, content)| Section::new(title, content)),
        })
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, RulesError> {
    Regex::new(pattern).map_err(|source| RulesError::InvalidPattern { field, source })
}
