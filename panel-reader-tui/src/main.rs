//! Panel Reader TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 模拟聚落、朗读日志、配置与日志 (`backend/`)
//! - **Adapters**: 每种建筑的面板适配器 (`adapters/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置，失败时使用默认值并在状态栏提示
//!     i18n::set_language()        // 按配置选择语言
//!     init_logging()              // 日志写入文件，guard 存活到程序结束
//!     model::App::new()           // 创建 APP 实例
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod adapters;
mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{init_logging, AppConfig, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(format!("{e:#}"))),
    };

    // 2. 语言
    if let Some(language) = i18n::Language::from_code(&config.language) {
        i18n::set_language(language);
    }

    // 3. 日志（终端被占用，只写文件）
    let _log_guard = init_logging(&config.log_level)?;
    tracing::info!(
        "Starting {} v{} ({})",
        i18n::t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        i18n::current_language().code()
    );
    if let Some(error) = &config_error {
        tracing::warn!("Using default config: {error}");
    }

    // 4. 创建应用实例
    let mut app = model::App::new(config, Box::new(config_service));
    if let Some(error) = config_error {
        app.set_status(error);
    }

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
