//! 行内标签清洗
//!
//! 保留 EPUB 常用的行内标签（开、闭、自闭合三种形式），
//! 其余位置的 `<` `>` 全部转义为实体，标签本身原位保留、顺序不变。

use std::borrow::Cow;

use regex::Regex;

/// 默认允许保留的标签
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "img", "br", "hr", // 单标签
    "p", "span", "div", //
    "b", "i", "u", "s", "strong", "em", //
    "a", "table", "tr", "td", "th",
];

/// 行清洗器
///
/// 白名单正则只编译一次，随解析流程按引用传递。
#[derive(Debug, Clone)]
pub struct LineSanitizer {
    allowed: Regex,
}

impl Default for LineSanitizer {
    fn default() -> Self {
        Self::with_tags(DEFAULT_ALLOWED_TAGS)
    }
}

impl LineSanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义白名单
    pub fn with_tags(tags: &[&str]) -> Self {
        let pattern = tags
            .iter()
            .flat_map(|tag| {
                let tag = regex::escape(tag);
                [
                    format!(r"<{tag}\b[^>]*>"),
                    format!(r"</{tag}>"),
                    format!(r"<{tag}\b[^>]*/>"),
                ]
            })
            .collect::<Vec<_>>()
            .join("|");

        // 标签名都经过转义，模式总是合法的
        let allowed = Regex::new(&pattern).expect("escaped tag alternation is a valid regex");
        Self { allowed }
    }

    /// 清洗一行文本
    ///
    /// 不含 `<` 时原样返回（零分配）。
    pub fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if !line.contains('<') {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() + 16);
        let mut last_end = 0;
        for m in self.allowed.find_iter(line) {
            escape_into(&mut result, &line[last_end..m.start()]);
            result.push_str(m.as_str());
            last_end = m.end();
        }
        escape_into(&mut result, &line[last_end..]);

        Cow::Owned(result)
    }
}

fn escape_into(out: &mut String, segment: &str) {
    for ch in segment.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
