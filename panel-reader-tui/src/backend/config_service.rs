//! 配置服务
//!
//! 配置保存在 `<config_dir>/panel-reader/config.json`。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use panel_reader_core::types::NavigatorSettings;
use serde::{Deserialize, Serialize};

/// 配置目录名
const APP_DIR_NAME: &str = "panel-reader";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 语言代码（BCP 47）
    pub language: String,
    /// 日志级别，`RUST_LOG` 优先
    pub log_level: String,
    /// 导航引擎文本；缺省时使用当前语言的默认文本
    pub navigator: Option<NavigatorSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            log_level: "info".to_string(),
            navigator: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        Self { path }
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested/config.json"));
        let config = AppConfig {
            language: "zh-CN".to_string(),
            log_level: "debug".to_string(),
            navigator: Some(NavigatorSettings {
                announce_position: true,
                ..NavigatorSettings::default()
            }),
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"navigator":{"announcePosition":true}}"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.language, "en-US");
        let navigator = config.navigator.unwrap();
        assert!(navigator.announce_position);
        assert_eq!(navigator.empty_message, "Nothing here");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(err.to_string().starts_with("Malformed config file"));
    }
}
