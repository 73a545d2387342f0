//! 章节切分状态机
//!
//! 逐行扫描已解码文本，遇到卷/章标题时结束上一节并开启新的一节，
//! 输出按文档顺序排列的扁平章节列表。
//!
//! 切分策略：
//! 1. 每行去首尾空白后清洗标签，空行跳过
//! 2. 标题行（卷或章，且未被排除）触发切换
//! 3. 其余行（含被排除的伪标题）按段落规则追加到当前正文
//! 4. 第一个标题之前的正文归入“未知章节”，不丢弃

use super::book::Section;
use super::classifier::{ClassificationRules, TitleKind};
use super::sanitizer::LineSanitizer;

/// 扫描状态
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    /// 尚未遇到任何标题
    NoTitleSeen,
    /// 正在收集某个标题下的正文
    InSection(String),
}

/// 切分结果
#[derive(Debug, Clone)]
pub struct Segmented {
    /// 按文档顺序排列的扁平章节
    pub sections: Vec<Section>,
    /// 识别到的标题行数
    pub heading_count: usize,
    /// 是否产生了“未知章节”（含文末才补出的情况）
    pub used_fallback: bool,
}

/// 切分器
///
/// 每本书一个实例，规则与清洗器按引用共享。
#[derive(Debug)]
pub struct Segmenter<'r> {
    rules: &'r ClassificationRules,
    sanitizer: &'r LineSanitizer,
    state: ScanState,
    buffer: String,
    sections: Vec<Section>,
    headings: usize,
    used_fallback: bool,
}

impl<'r> Segmenter<'r> {
    pub fn new(rules: &'r ClassificationRules, sanitizer: &'r LineSanitizer) -> Self {
        Self {
            rules,
            sanitizer,
            state: ScanState::NoTitleSeen,
            buffer: String::new(),
            sections: Vec::new(),
            headings: 0,
            used_fallback: false,
        }
    }

    /// 输入一行原始文本（可含换行符和首尾空白）
    pub fn feed(&mut self, raw_line: &str) {
        let line = self.sanitizer.sanitize(raw_line.trim());
        if line.is_empty() {
            return;
        }

        let kind = self.rules.classify(&line);
        if kind.is_heading() {
            self.start_section(line.into_owned());
            return;
        }

        if kind == TitleKind::Excluded {
            tracing::trace!(line = %line, "Heading look-alike kept as content");
        }
        self.rules.paragraph_style().append(&mut self.buffer, &line);
    }

    fn start_section(&mut self, title: String) {
        tracing::trace!(title = %title, "Heading recognized");

        let content = std::mem::take(&mut self.buffer);
        match std::mem::replace(&mut self.state, ScanState::InSection(title)) {
            // 文档直接以标题开头时不产生空的前导章节
            ScanState::NoTitleSeen => {
                if !content.is_empty() {
                    self.push_fallback(content);
                }
            }
            ScanState::InSection(previous) => {
                self.sections.push(Section::new(previous, content));
            }
        }
        self.headings += 1;
    }

    fn push_fallback(&mut self, content: String) {
        self.used_fallback = true;
        self.sections
            .push(Section::new(self.rules.fallback_title(), content));
    }

    /// 结束扫描，冲刷最后一节后返回结果
    pub fn finish(mut self) -> Segmented {
        let content = std::mem::take(&mut self.buffer);
        match std::mem::replace(&mut self.state, ScanState::NoTitleSeen) {
            ScanState::NoTitleSeen => {
                if !content.is_empty() {
                    self.push_fallback(content);
                }
            }
            ScanState::InSection(title) => {
                self.sections.push(Section::new(title, content));
            }
        }
        Segmented {
            sections: self.sections,
            heading_count: self.headings,
            used_fallback: self.used_fallback,
        }
    }
}

/// 对一组行进行切分（便捷方法）
pub fn segment_lines<I, S>(
    lines: I,
    rules: &ClassificationRules,
    sanitizer: &LineSanitizer,
) -> Vec<Section>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = Segmenter::new(rules, sanitizer);
    for line in lines {
        segmenter.feed(line.as_ref());
    }
    segmenter.finish().sections
}
