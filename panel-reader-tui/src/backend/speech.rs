//! 朗读日志
//!
//! 终端宿主没有语音合成，朗读内容和音效都记录到一个带时间戳的日志里，
//! 由右侧面板显示。

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};
use panel_reader_core::traits::{AudioCueSink, SpeechSink};
use panel_reader_core::types::AudioCue;

/// 日志保留的最大条目数
const MAX_ENTRIES: usize = 200;

/// 日志条目内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// 朗读的一句话
    Utterance(String),
    /// 播放的音效
    Cue(AudioCue),
}

/// 日志条目
#[derive(Debug, Clone)]
pub struct SpeechEntry {
    pub at: DateTime<Local>,
    pub event: SpeechEvent,
}

/// 朗读日志，同时充当朗读接收器和音效接收器
#[derive(Debug, Default)]
pub struct SpeechLog {
    entries: Mutex<VecDeque<SpeechEntry>>,
}

impl SpeechLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近的条目，最新的在最后
    pub fn recent(&self, count: usize) -> Vec<SpeechEntry> {
        let entries = self.entries();
        let skip = entries.len().saturating_sub(count);
        entries.iter().skip(skip).cloned().collect()
    }

    /// 最后一句朗读
    pub fn last_utterance(&self) -> Option<String> {
        self.entries().iter().rev().find_map(|entry| match &entry.event {
            SpeechEvent::Utterance(text) => Some(text.clone()),
            SpeechEvent::Cue(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    fn push(&self, event: SpeechEvent) {
        let mut entries = self.entries();
        if entries.len() == MAX_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(SpeechEntry {
            at: Local::now(),
            event,
        });
    }

    fn entries(&self) -> MutexGuard<'_, VecDeque<SpeechEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SpeechSink for SpeechLog {
    fn say(&self, text: &str) {
        tracing::debug!(target: "speech", "{text}");
        self.push(SpeechEvent::Utterance(text.to_string()));
    }
}

impl AudioCueSink for SpeechLog {
    fn play(&self, cue: AudioCue) {
        self.push(SpeechEvent::Cue(cue));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_utterances_and_cues_in_order() {
        let log = SpeechLog::new();
        log.play(AudioCue::PanelOpen);
        log.say("Lumber Mill, Status");
        log.play(AudioCue::Confirm);

        let recent = log.recent(10);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].event, SpeechEvent::Cue(AudioCue::PanelOpen));
        assert_eq!(log.last_utterance().as_deref(), Some("Lumber Mill, Status"));
    }

    #[test]
    fn keeps_a_bounded_history() {
        let log = SpeechLog::new();
        for i in 0..MAX_ENTRIES + 5 {
            log.say(&format!("line {i}"));
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        let recent = log.recent(1);
        assert_eq!(
            recent[0].event,
            SpeechEvent::Utterance(format!("line {}", MAX_ENTRIES + 4))
        );
    }
}
