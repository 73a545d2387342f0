//! 章节树组装
//!
//! 把扁平章节列表按卷分组：卷标题开启一个“粘性”的卷，
//! 之后的普通章节都挂到该卷下，直到出现新卷或断卷章节。

use super::book::{Section, SectionList};
use super::classifier::VolumeRule;

/// 断卷标记：以这些词开头的章节总是独立成顶层节点
///
/// 这里只做前缀判断，而卷/章识别使用完整正则。
pub const VOLUME_BREAKING_MARKERS: &[&str] = &["完本感言", "番外"];

fn is_volume_breaking(title: &str) -> bool {
    VOLUME_BREAKING_MARKERS
        .iter()
        .any(|marker| title.starts_with(marker))
}

/// 组装章节树
pub fn assemble(flat: Vec<Section>, volume: &VolumeRule) -> SectionList {
    let (mut root, open_volume) = flat.into_iter().fold(
        (Vec::new(), None::<Section>),
        |(mut root, open_volume), section| {
            if volume.is_match(section.title()) {
                root.extend(open_volume);
                (root, Some(section))
            } else if is_volume_breaking(section.title()) {
                root.extend(open_volume);
                root.push(section);
                (root, None)
            } else {
                match open_volume {
                    Some(mut current) => {
                        current.push_child(section);
                        (root, Some(current))
                    }
                    None => {
                        root.push(section);
                        (root, None)
                    }
                }
            }
        },
    );
    root.extend(open_volume);

    SectionList::new(root)
}

/// 在首尾各插入一份说明章节
pub fn inject_tutorial(mut list: SectionList, tutorial: Option<&Section>) -> SectionList {
    if let Some(tutorial) = tutorial {
        list.push_front(tutorial.clone());
        list.push(tutorial.clone());
    }
    list
}
