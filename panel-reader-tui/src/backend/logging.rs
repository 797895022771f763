//! 日志初始化
//!
//! 终端被 TUI 占用，日志只写文件：`<data_dir>/panel-reader/logs/panel-reader.log`。
//! 核心库通过 `log` 门面输出，由 tracing-subscriber 的 log 桥接一并收集。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR_NAME: &str = "panel-reader";
const LOG_FILE_NAME: &str = "panel-reader.log";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
        .join("logs")
}

/// 过滤器优先级：`RUST_LOG` > 配置文件 > `info`
fn build_env_filter(config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(config_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志，返回的 guard 必须存活到程序结束，否则缓冲的日志会丢失
pub fn init_logging(config_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_env_filter(config_level))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging to {}", dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}
