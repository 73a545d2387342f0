//! End-to-end parsing of manuscripts on disk

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use txtbook::application::{ParseManuscript, ParseManuscriptHandler};
use txtbook::config::ParseConfig;
use txtbook::infrastructure::FileManuscriptSource;

const NOVEL: &str = "\
作者：某某
简介：一个少年的故事

第一卷 潜龙在渊
第一章 陨落的天才
    “斗之力，三段！”
望着测验魔石碑上面闪亮得甚至有些刺眼的五个大字，少年面无表情。
第二章 斗气大陆
第三章的时候，他已经明白了。
第二卷 风起云涌
第三章 客人
<script>alert(1)</script>
番外 后日谈
很多年以后。
";

fn write_manuscript(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file
}

fn handler(config: ParseConfig) -> ParseManuscriptHandler {
    ParseManuscriptHandler::from_config(Arc::new(FileManuscriptSource::new()), &config).unwrap()
}

fn no_tips() -> ParseConfig {
    ParseConfig {
        tips: false,
        ..ParseConfig::default()
    }
}

#[test]
fn test_utf8_novel_structure() {
    let file = write_manuscript(NOVEL.as_bytes());
    let response = handler(no_tips())
        .handle(ParseManuscript::new(file.path()))
        .unwrap();

    let sections = response.sections.sections();
    let titles: Vec<&str> = sections.iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec!["章节正文", "第一卷 潜龙在渊", "第二卷 风起云涌", "番外 后日谈"]
    );

    let first_volume = &sections[1];
    assert_eq!(first_volume.children().len(), 2);
    assert!(first_volume.children()[1]
        .content()
        .contains("第三章的时候，他已经明白了。"));

    let second_volume = &sections[2];
    assert_eq!(second_volume.children()[0].title(), "第三章 客人");
    assert!(second_volume.children()[0]
        .content()
        .contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

    assert!(!sections[3].is_volume());
    assert!(response.used_fallback);
    assert_eq!(response.heading_count, 6);
    assert_eq!(response.section_count, 7);
}

#[test]
fn test_tips_wrap_the_book() {
    let file = write_manuscript(NOVEL.as_bytes());
    let response = handler(ParseConfig::default())
        .handle(ParseManuscript::new(file.path()))
        .unwrap();

    let sections = response.sections.sections();
    assert_eq!(sections.first().unwrap().title(), "制作说明");
    assert_eq!(sections.last().unwrap().title(), "制作说明");
    assert_eq!(response.section_count, 7 + 2);
}

#[test]
fn test_gb18030_manuscript() {
    let (bytes, _, _) = encoding_rs::GB18030.encode(NOVEL);
    let file = write_manuscript(&bytes);
    let response = handler(no_tips())
        .handle(ParseManuscript::new(file.path()))
        .unwrap();

    assert_ne!(response.encoding, "UTF-8");
    assert_eq!(response.sections.sections()[1].title(), "第一卷 潜龙在渊");
    assert_eq!(response.heading_count, 6);
}

#[test]
fn test_utf8_bom_manuscript() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice("第一章 开端\n正文\n".as_bytes());
    let file = write_manuscript(&bytes);
    let response = handler(no_tips())
        .handle(ParseManuscript::new(file.path()))
        .unwrap();

    assert_eq!(response.sections.len(), 1);
    assert_eq!(response.sections.sections()[0].title(), "第一章 开端");
    assert!(!response.used_fallback);
}

#[test]
fn test_manuscript_without_headings() {
    let file = write_manuscript("只是一些\n没有标题的文字\n".as_bytes());
    let response = handler(no_tips())
        .handle(ParseManuscript::new(file.path()))
        .unwrap();

    assert!(response.used_fallback);
    assert_eq!(response.heading_count, 0);
    assert_eq!(response.sections.len(), 1);
    assert_eq!(response.sections.sections()[0].title(), "章节正文");
}

#[test]
fn test_volume_matching_disabled() {
    let file = write_manuscript(NOVEL.as_bytes());
    let config = ParseConfig {
        volume_match: "false".to_string(),
        ..no_tips()
    };
    let response = handler(config)
        .handle(ParseManuscript::new(file.path()))
        .unwrap();

    assert!(response.sections.iter().all(|s| !s.is_volume()));
    // 卷标题仍由默认章节规则识别为普通章节
    assert_eq!(response.heading_count, 6);
    assert_eq!(response.sections.len(), 7);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = handler(no_tips()).handle(ParseManuscript::new(dir.path().join("none.txt")));
    assert!(result.is_err());
}

#[test]
fn test_parallel_parses_share_rules() {
    let handler = Arc::new(handler(no_tips()));
    let files: Vec<NamedTempFile> = (0..4)
        .map(|i| {
            let text = format!("第一章 第{i}本\n正文{i}\n第二章 结束\n");
            write_manuscript(text.as_bytes())
        })
        .collect();

    std::thread::scope(|scope| {
        let joins: Vec<_> = files
            .iter()
            .map(|file| {
                let handler = Arc::clone(&handler);
                scope.spawn(move || handler.handle(ParseManuscript::new(file.path())).unwrap())
            })
            .collect();

        for (i, join) in joins.into_iter().enumerate() {
            let response = join.join().unwrap();
            assert_eq!(response.sections.len(), 2);
            assert_eq!(
                response.sections.sections()[0].title(),
                format!("第一章 第{i}本")
            );
        }
    });
}
