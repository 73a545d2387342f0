//! Outline Query - 交给渲染器的章节大纲
//!
//! 在章节树的基础上，按需附加拆分后的章节序号与标题文字。
//! 卷标题不拆分。

use serde::Serialize;

use crate::domain::{Section, SectionList, TitleDecomposer};

/// 大纲节点
#[derive(Debug, Clone, Serialize)]
pub struct OutlineSection<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'a str>,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineSection<'a>>,
}

/// 构建大纲；`decomposer` 为 None 时不拆分标题
pub fn build_outline<'a>(
    sections: &'a SectionList,
    decomposer: Option<&TitleDecomposer>,
) -> Vec<OutlineSection<'a>> {
    sections
        .iter()
        .map(|section| outline_section(section, decomposer))
        .collect()
}

fn outline_section<'a>(
    section: &'a Section,
    decomposer: Option<&TitleDecomposer>,
) -> OutlineSection<'a> {
    if section.is_volume() {
        return OutlineSection {
            title: section.title(),
            ordinal: None,
            heading: None,
            content: section.content(),
            children: section
                .children()
                .iter()
                .map(|child| outline_section(child, decomposer))
                .collect(),
        };
    }

    let parts = decomposer
        .map(|d| d.decompose(section.title()))
        .filter(|parts| parts.has_ordinal());

    OutlineSection {
        title: section.title(),
        ordinal: parts.map(|p| p.ordinal),
        heading: parts.map(|p| p.text),
        content: section.content(),
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse, ClassificationRules, LineSanitizer};

    fn sections() -> SectionList {
        let rules = ClassificationRules::builder().build().unwrap();
        let text = "第一卷 风起\n第一章 开端\n甲\n番外 后日谈\n乙\n普通标题外的正文";
        parse(text.as_bytes(), &rules, &LineSanitizer::new())
            .unwrap()
            .sections
    }

    #[test]
    fn test_outline_without_split() {
        let sections = sections();
        let outline = build_outline(&sections, None);

        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].children.len(), 1);
        assert!(outline[0].children[0].ordinal.is_none());
    }

    #[test]
    fn test_outline_with_split() {
        let sections = sections();
        let decomposer = TitleDecomposer::new();
        let outline = build_outline(&sections, Some(&decomposer));

        // 卷标题不拆分
        assert!(outline[0].ordinal.is_none());
        let chapter = &outline[0].children[0];
        assert_eq!(chapter.ordinal, Some("第一章"));
        assert_eq!(chapter.heading, Some("开端"));
        assert_eq!(outline[1].ordinal, Some("番外"));
        assert_eq!(outline[1].heading, Some("后日谈"));
    }

    #[test]
    fn test_outline_serializes() {
        let sections = sections();
        let decomposer = TitleDecomposer::new();
        let json = serde_json::to_value(build_outline(&sections, Some(&decomposer))).unwrap();

        assert_eq!(json[0]["title"], "第一卷 风起");
        assert!(json[0].get("ordinal").is_none());
        assert_eq!(json[0]["children"][0]["ordinal"], "第一章");
    }
}
