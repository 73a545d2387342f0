//! Book Context - Entities

use serde::Serialize;

/// 章节 / 卷
///
/// 不变量:
/// - `children` 非空时表示卷，`content` 只包含卷标题与第一个子章节之间的正文
/// - `children` 为空时是叶子章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: String,
    content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Section>,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn children(&self) -> &[Section] {
        &self.children
    }

    pub fn is_volume(&self) -> bool {
        !self.children.is_empty()
    }

    /// 挂载子章节（仅在组装树时使用）
    pub(crate) fn push_child(&mut self, child: Section) {
        self.children.push(child);
    }
}

/// 根章节列表 - 交给渲染器的唯一产物
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionList(Vec<Section>);

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Self {
        Self(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.0.iter()
    }

    /// 所有节点数（顶层 + 卷内章节）
    pub fn section_count(&self) -> usize {
        self.0.iter().map(|s| 1 + s.children.len()).sum()
    }

    /// 叶子章节数（没有子章节的节点）
    pub fn leaf_count(&self) -> usize {
        self.0
            .iter()
            .map(|s| if s.is_volume() { s.children.len() } else { 1 })
            .sum()
    }

    pub(crate) fn push_front(&mut self, section: Section) {
        self.0.insert(0, section);
    }

    pub(crate) fn push(&mut self, section: Section) {
        self.0.push(section);
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
