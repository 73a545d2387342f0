//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（txtbook.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, DEFAULT_TIPS_CONTENT, DEFAULT_TIPS_TITLE};
use crate::domain::classifier::{
    DEFAULT_MAX_TITLE_LEN, DEFAULT_UNKNOWN_TITLE, DEFAULT_VOLUME_MATCH,
};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["txtbook", "txtbook.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TXTBOOK_`，层级分隔符 `__`）
/// 2. 配置文件（txtbook.toml 或 txtbook.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TXTBOOK_PARSE__CHAPTER_MATCH=第.{1,8}章`
/// - `TXTBOOK_PARSE__VOLUME_MATCH=false`
/// - `TXTBOOK_PARSE__MAX_TITLE_LEN=40`
/// - `TXTBOOK_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("parse.volume_match", DEFAULT_VOLUME_MATCH)?
        .set_default("parse.max_title_len", DEFAULT_MAX_TITLE_LEN as u64)?
        .set_default("parse.unknown_title", DEFAULT_UNKNOWN_TITLE)?
        .set_default("parse.tips", true)?
        .set_default("parse.tips_title", DEFAULT_TIPS_TITLE)?
        .set_default("parse.tips_content", DEFAULT_TIPS_CONTENT)?
        .set_default("parse.paragraph_style", "html")?
        .set_default("parse.indent", 2)?
        .set_default("parse.separate_chapter_number", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: TXTBOOK_PARSE__MAX_TITLE_LEN=40
    builder = builder.add_source(
        Environment::with_prefix("TXTBOOK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 正则是否合法由构建分类规则时检查。
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.parse.max_title_len == 0 {
        return Err(ConfigError::ValidationError(
            "max_title_len cannot be 0".to_string(),
        ));
    }

    if config.parse.unknown_title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "unknown_title cannot be empty".to_string(),
        ));
    }

    if config.parse.tips && config.parse.tips_title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tips_title cannot be empty when tips are enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    let parse = &config.parse;
    tracing::info!("=== Parse Configuration ===");
    tracing::info!(
        "Chapter Match: {}",
        parse.chapter_match.as_deref().unwrap_or("(auto)")
    );
    tracing::info!("Volume Match: {}", parse.volume_match);
    tracing::info!(
        "Exclude: {}",
        parse.exclude.as_deref().unwrap_or("(default)")
    );
    tracing::info!("Max Title Length: {}", parse.max_title_len);
    tracing::info!("Unknown Title: {}", parse.unknown_title);
    tracing::info!("Tips: {}", parse.tips);
    tracing::info!("Paragraph Style: {:?}", parse.paragraph_style);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("===========================");
}
