//! 解析流水线
//!
//! 字节流 -> 解码文本 -> 清洗后的行 -> 扁平章节 -> 章节树
//!
//! 单线程同步执行；规则只读，可在多本书的并行解析间共享。

use std::io::Read;

use super::assembler::{assemble, inject_tutorial};
use super::book::{BookError, SectionList};
use super::classifier::ClassificationRules;
use super::encoding::decode;
use super::sanitizer::LineSanitizer;
use super::segmenter::Segmenter;

/// 一次解析的结果
#[derive(Debug, Clone)]
pub struct ParsedBook {
    /// 最终章节树
    pub sections: SectionList,
    /// 实际使用的编码
    pub encoding: &'static str,
    /// 识别到的标题行数（卷 + 章，不含被排除的）
    pub heading_count: usize,
    /// 第一个标题前的正文是否被归入“未知章节”
    pub used_fallback: bool,
    /// 解码时是否替换过非法字节
    pub malformed: bool,
}

/// 解析一本书
///
/// 只有底层读取失败会返回错误，不返回部分结果。
pub fn parse<R: Read>(
    reader: R,
    rules: &ClassificationRules,
    sanitizer: &LineSanitizer,
) -> Result<ParsedBook, BookError> {
    let text = decode(reader)?;
    let encoding = text.encoding_name();

    let mut lines = text.lines();
    let mut segmenter = Segmenter::new(rules, sanitizer);
    for line in lines.by_ref() {
        segmenter.feed(&line?);
    }
    let malformed = lines.had_malformed();

    // 未知章节可能在文末冲刷时才产生，统计须在 finish 之后读取
    let segmented = segmenter.finish();
    let sections = inject_tutorial(
        assemble(segmented.sections, rules.volume()),
        rules.tutorial(),
    );

    Ok(ParsedBook {
        sections,
        encoding,
        heading_count: segmented.heading_count,
        used_fallback: segmented.used_fallback,
        malformed,
    })
}
