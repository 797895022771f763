//! 应用主状态结构

use std::sync::Arc;

use panel_reader_core::types::NavigatorSettings;
use panel_reader_core::{Navigator, PanelContext};

use super::{BuildingListState, FocusPanel, ModalState};
use crate::backend::{AppConfig, ConfigService, Settlement, SettlementDirectory, SpeechLog};
use crate::i18n;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 建筑列表
    pub buildings: BuildingListState,

    /// 模拟聚落
    pub settlement: Arc<Settlement>,

    /// 朗读日志（同时是音效接收器）
    pub speech: Arc<SpeechLog>,

    /// 面板导航引擎
    pub navigator: Navigator,

    /// 上次按键后模拟是否推进过（面板快照需要同步）
    pub panel_stale: bool,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前配置
    pub config: AppConfig,

    /// 配置持久化
    pub config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig, config_service: Box<dyn ConfigService>) -> Self {
        let settlement = Arc::new(Settlement::demo());
        let speech = Arc::new(SpeechLog::new());
        let context = PanelContext::new(speech.clone(), speech.clone())
            .with_settings(Self::navigator_settings(&config));

        Self {
            should_quit: false,
            focus: FocusPanel::Buildings,
            buildings: BuildingListState::new(settlement.buildings()),
            settlement,
            speech,
            navigator: Navigator::new(context),
            panel_stale: false,
            modal: ModalState::new(),
            status_message: None,
            config,
            config_service,
        }
    }

    /// 配置文件中的导航文本优先，否则用当前语言的默认文本
    pub fn navigator_settings(config: &AppConfig) -> NavigatorSettings {
        config
            .navigator
            .clone()
            .unwrap_or_else(i18n::navigator_settings)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
