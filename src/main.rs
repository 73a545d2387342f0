//! txtbook - 纯文本小说章节结构恢复
//!
//! 用法: txtbook <manuscript.txt> [config.toml]
//!
//! 章节大纲以 JSON 输出到 stdout，日志输出到 stderr。

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use txtbook::application::{build_outline, ParseManuscript, ParseManuscriptHandler};
use txtbook::config::{load_config_from_path, print_config, LogConfig};
use txtbook::domain::TitleDecomposer;
use txtbook::infrastructure::adapters::FileManuscriptSource;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},txtbook={}", log.level, log.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let manuscript = args
        .next()
        .map(PathBuf::from)
        .context("Usage: txtbook <manuscript.txt> [config.toml]")?;
    let config_path = args.next().map(PathBuf::from);

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(config_path.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);
    print_config(&config);

    let source = Arc::new(FileManuscriptSource::new());
    let handler = ParseManuscriptHandler::from_config(source, &config.parse)?;
    let response = handler.handle(ParseManuscript::new(manuscript))?;

    let decomposer = config
        .parse
        .separate_chapter_number
        .then(TitleDecomposer::new);
    let outline = build_outline(&response.sections, decomposer.as_ref());

    let stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(stdout, &outline)?;
    println!();

    tracing::info!(
        sections = response.section_count,
        encoding = response.encoding,
        "Done"
    );

    Ok(())
}
