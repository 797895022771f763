//! 导航逻辑服务层

mod navigator;
mod search;
pub mod tree;
mod upgrade_tiers;
mod worker_slots;

pub use navigator::Navigator;
pub use search::{next_hit, search, SearchHit};
pub use upgrade_tiers::UpgradeTiers;
pub use worker_slots::WorkerSlots;

use std::sync::Arc;

use crate::traits::{AudioCueSink, SpeechSink};
use crate::types::{AudioCue, NavigatorSettings};

/// 面板上下文 - 持有引擎的所有外部依赖
///
/// 宿主需要创建此上下文，并注入平台特定的语音与音效实现。
pub struct PanelContext {
    /// 语音输出
    pub speech: Arc<dyn SpeechSink>,
    /// 音效输出
    pub audio: Arc<dyn AudioCueSink>,
    /// 可配置文本
    pub settings: NavigatorSettings,
    last_spoken: Option<String>,
}

impl PanelContext {
    /// 创建面板上下文（默认设置）
    #[must_use]
    pub fn new(speech: Arc<dyn SpeechSink>, audio: Arc<dyn AudioCueSink>) -> Self {
        Self {
            speech,
            audio,
            settings: NavigatorSettings::default(),
            last_spoken: None,
        }
    }

    /// 替换设置
    #[must_use]
    pub fn with_settings(mut self, settings: NavigatorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 朗读并记住最后一句
    pub fn say(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.speech.say(&text);
        self.last_spoken = Some(text);
    }

    /// 播放音效
    pub fn play(&self, cue: AudioCue) {
        self.audio.play(cue);
    }

    /// 最后朗读的内容
    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }
}
