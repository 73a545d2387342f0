//! 章节标题拆分
//!
//! 把标题拆成序号和正文两部分，供渲染器分行显示：
//!
//! - `"第一章 标题"` -> (`"第一章"`, `"标题"`)
//! - `"1. 标题"` -> (`"1."`, `"标题"`)
//! - `"一、标题"` -> (`"一、"`, `"标题"`)
//! - `"引子"` -> (`"引子"`, `""`)
//! - `"卷名"` -> (`""`, `"卷名"`)

use regex::Regex;

const ORDINAL_PATTERNS: [&str; 4] = [
    // 第X章/回/节/集
    r"^(第[0-9一二三四五六七八九十零〇百千两 ]+[章回节集])\s*(.*)$",
    // 1. / 1、
    r"^([0-9]+[.\x{3001}])\s*(.*)$",
    // 一、
    r"^([一二三四五六七八九十]+[.\x{3001}])\s*(.*)$",
    // 无序号的特殊章节
    r"^(引子|楔子|序章|最终章|完本感言|番外)\s*(.*)$",
];

/// 拆分结果，均借用自原标题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleParts<'a> {
    /// 序号部分，未识别时为空
    pub ordinal: &'a str,
    /// 序号之后的标题文字
    pub text: &'a str,
}

impl TitleParts<'_> {
    pub fn has_ordinal(&self) -> bool {
        !self.ordinal.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TitleDecomposer {
    patterns: Vec<Regex>,
}

impl Default for TitleDecomposer {
    fn default() -> Self {
        let patterns = ORDINAL_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("built-in ordinal pattern is valid"))
            .collect();
        Self { patterns }
    }
}

impl TitleDecomposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按顺序尝试各规则，全部失败时整个标题作为正文
    pub fn decompose<'a>(&self, title: &'a str) -> TitleParts<'a> {
        for re in &self.patterns {
            if let Some(caps) = re.captures(title) {
                return TitleParts {
                    ordinal: caps.get(1).map_or("", |m| m.as_str()),
                    text: caps.get(2).map_or("", |m| m.as_str()),
                };
            }
        }

        TitleParts {
            ordinal: "",
            text: title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<'a>(d: &TitleDecomposer, title: &'a str) -> (&'a str, &'a str) {
        let p = d.decompose(title);
        (p.ordinal, p.text)
    }

    #[test]
    fn test_canonical_ordinal() {
        let d = TitleDecomposer::new();
        assert_eq!(parts(&d, "第一章 标题"), ("第一章", "标题"));
        assert_eq!(parts(&d, "第1章 标题"), ("第1章", "标题"));
        assert_eq!(parts(&d, "第一百零八回  好汉"), ("第一百零八回", "好汉"));
        assert_eq!(parts(&d, "第三集"), ("第三集", ""));
    }

    #[test]
    fn test_arabic_prefix() {
        let d = TitleDecomposer::new();
        assert_eq!(parts(&d, "1. 标题"), ("1.", "标题"));
        assert_eq!(parts(&d, "12、标题"), ("12、", "标题"));
    }

    #[test]
    fn test_cjk_numeral_prefix() {
        let d = TitleDecomposer::new();
        assert_eq!(parts(&d, "一、标题"), ("一、", "标题"));
        assert_eq!(parts(&d, "十二.标题"), ("十二.", "标题"));
    }

    #[test]
    fn test_special_markers() {
        let d = TitleDecomposer::new();
        assert_eq!(parts(&d, "引子"), ("引子", ""));
        assert_eq!(parts(&d, "番外 后日谈"), ("番外", "后日谈"));
        assert_eq!(parts(&d, "完本感言"), ("完本感言", ""));
    }

    #[test]
    fn test_unmatched_is_whole_text() {
        let d = TitleDecomposer::new();
        let p = d.decompose("卷名");
        assert!(!p.has_ordinal());
        assert_eq!(p.text, "卷名");
        assert_eq!(parts(&d, ""), ("", ""));
        assert_eq!(parts(&d, "第章"), ("", "第章"));
    }

    #[test]
    fn test_parts_are_substrings() {
        let d = TitleDecomposer::new();
        for title in ["第一章 开端", "3、三", "楔子 缘起", "普通标题", "第二回"] {
            let p = d.decompose(title);
            assert!(title.starts_with(p.ordinal));
            assert!(title.ends_with(p.text));
        }
    }
}
