//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          └───────────┘          └────┬─────┘         │   │
//！│  │        ▲                                           │ 修改          │   │
//！│  │   ┌─────────┐                                 ┌──────────┐         │   │
//！│  │   │  View   │ ◀──────────── 读取 ──────────── │  Model   │         │   │
//！│  │   └─────────┘                                 └────┬─────┘         │   │
//！│  └────────────────────────────────────────────────────│───────────────┘   │
//！│                                                       │ 按键命令          │
//！│                                                       ▼                   │
//！│                                              ┌─────────────────┐          │
//！│                                              │ Navigator (core)│          │
//！│                                              └────────┬────────┘          │
//！│                                                       │ 适配器            │
//！│                                                       ▼                   │
//！│                                              ┌─────────────────┐          │
//！│                                              │  Backend 层     │          │
//！│                                              └─────────────────┘          │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：模拟聚落与宿主服务
//!
//! Backend 层与 UI 完全解耦。它替代真实游戏，给导航引擎提供它需要的
//! 外部协作者：访问器、朗读接收器、音效接收器。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod accessors;          // 建筑专用访问器 trait 与快照类型
//!         mod settlement;         // 模拟聚落（实现所有访问器）
//!         mod speech;             // 朗读日志（实现 SpeechSink / AudioCueSink）
//!         mod config_service;     // 配置文件（JSON）
//!         mod logging;            // 文件日志
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、模拟聚落（Settlement）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/settlement.rs 中定义：
//!
//!         实现核心库的 WorkforceAccessor、UpgradeAccessor，
//!         以及本 crate 的 SettlementDirectory、ProductionAccessor、
//!         HearthAccessor、StorageAccessor。
//!
//!         主循环每秒调用一次 tick()：
//!             - 有工人的工坊推进生产进度，满 100% 时消耗原料产出一件
//!             - 火炉向目标热度靠拢，每 5 刻烧掉一单位燃料
//!             - 每 30 刻有一名工人离岗
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、朗读日志（SpeechLog）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/speech.rs 中定义：
//!
//!         同时实现 SpeechSink 与 AudioCueSink，记录带时间戳的条目，
//!         右侧面板按时间顺序显示。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在面板中按下 Enter
//!         ↓
//!     Event 层翻译为 AppMessage::Nav(NavCommand::Enter)
//!         ↓
//!     Update 层调用 Navigator::on_key
//!         ↓
//!     适配器调用 Settlement 的写方法
//!         ↓
//!     Navigator 刷新适配器并朗读结果（写入 SpeechLog）
//!         ↓
//!     View 层重新渲染朗读日志
//!

mod accessors;
mod config_service;
mod logging;
mod settlement;
mod speech;

pub use accessors::{
    BuildingKind, BuildingSummary, FuelInfo, GoodCategory, HearthAccessor, ProductionAccessor,
    RecipeInfo, SettlementDirectory, StorageAccessor, StoredGood,
};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use logging::init_logging;
pub use settlement::Settlement;
pub use speech::{SpeechEntry, SpeechEvent, SpeechLog};
