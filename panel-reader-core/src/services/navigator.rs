//! 导航引擎
//!
//! 持有光标与当前聚焦的适配器，把宿主的按键命令翻译成
//! 层级移动、朗读和动作调用。每条命令执行前都会用适配器的
//! 最新计数重新夹紧光标，引擎从不缓存计数。

use super::{search, tree, PanelContext};
use crate::error::NavError;
use crate::traits::BuildingAdapter;
use crate::types::{
    ActionOutcome, Address, AudioCue, Cursor, KeyResponse, Level, Modifiers, NavCommand,
    NavigatorSettings,
};

/// 一次聚焦期间的适配器会话
struct Session {
    adapter: Box<dyn BuildingAdapter>,
    cursor: Cursor,
    last_query: Option<String>,
}

/// 层级导航引擎
pub struct Navigator {
    ctx: PanelContext,
    session: Option<Session>,
}

impl Navigator {
    /// 创建引擎（尚未聚焦任何面板）
    #[must_use]
    pub fn new(ctx: PanelContext) -> Self {
        Self { ctx, session: None }
    }

    /// 面板获得焦点
    ///
    /// 刷新适配器、重置光标、播放打开音效，并朗读 "标题, 第一个分区"。
    /// 若之前有会话，先将其清理。
    pub fn on_focus(&mut self, mut adapter: Box<dyn BuildingAdapter>) {
        self.on_blur();

        adapter.refresh_data();
        let title = adapter.title();
        log::debug!("Focus panel {title:?}");

        let mut session = Session {
            adapter,
            cursor: Cursor::new(),
            last_query: None,
        };
        self.ctx.play(AudioCue::PanelOpen);

        let text = if session.adapter.section_count() == 0 {
            format!("{title}, {}", self.ctx.settings.empty_panel_message)
        } else {
            format!("{title}, {}", session.describe(&self.ctx.settings))
        };
        self.ctx.say(text);
        self.session = Some(session);
    }

    /// 面板失去焦点：清空适配器快照并销毁会话
    pub fn on_blur(&mut self) {
        if let Some(mut session) = self.session.take() {
            log::debug!("Blur panel {:?}", session.adapter.title());
            session.adapter.clear_data();
        }
    }

    /// 处理一条导航命令
    ///
    /// 没有聚焦的面板时忽略命令。错误不会传出此方法。
    pub fn on_key(&mut self, command: NavCommand) -> KeyResponse {
        let Some(session) = self.session.as_mut() else {
            log::debug!("Ignoring {command:?}: no panel focused");
            return KeyResponse::Continue;
        };
        session.handle(&mut self.ctx, command)
    }

    /// 静默地重新读取适配器快照
    ///
    /// 宿主在游戏状态变化后、下一次按键前调用。不朗读也不移动光标：
    /// 下一条命令会按新的树形夹紧光标，必要时朗读夹紧后的位置。
    pub fn sync(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.adapter.refresh_data();
        }
    }

    /// 是否有面板处于聚焦状态
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// 当前光标
    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.session.as_ref().map(|s| s.cursor)
    }

    /// 当前面板标题
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.adapter.title())
    }

    /// 最后一次朗读的内容
    #[must_use]
    pub fn last_spoken(&self) -> Option<&str> {
        self.ctx.last_spoken()
    }

    /// 光标路径上每一层的名字（用于状态栏）
    ///
    /// 没有稳定名字的层用 1 起始的序号代替。
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<String> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        if session.adapter.section_count() == 0 {
            return Vec::new();
        }
        let address = session.cursor.address();
        Level::ALL
            .into_iter()
            .filter(|level| *level <= address.level)
            .map(|level| {
                session
                    .adapter
                    .name_of(&address.truncated(level))
                    .unwrap_or_else(|| (address.index_at(level) + 1).to_string())
            })
            .collect()
    }

    /// 当前设置
    #[must_use]
    pub fn settings(&self) -> &NavigatorSettings {
        &self.ctx.settings
    }

    /// 替换设置（对后续命令生效）
    pub fn set_settings(&mut self, settings: NavigatorSettings) {
        self.ctx.settings = settings;
    }
}

impl Session {
    fn handle(&mut self, ctx: &mut PanelContext, command: NavCommand) -> KeyResponse {
        log::debug!("Key {command:?} at {}", self.cursor.address());

        match command {
            NavCommand::Escape => return self.escape(ctx),
            NavCommand::Refresh => {
                self.refresh(ctx);
                return KeyResponse::Continue;
            }
            _ => {}
        }

        if self.adapter.section_count() == 0 {
            let text = ctx.settings.empty_panel_message.clone();
            ctx.say(text);
            return KeyResponse::Continue;
        }

        // 两次按键之间游戏状态可能已经变化
        if !matches!(command, NavCommand::Search(_)) && tree::clamp(&*self.adapter, &mut self.cursor)
        {
            log::warn!("Cursor drifted, now at {}", self.cursor.address());
            self.announce(ctx, false);
            return KeyResponse::Continue;
        }

        match command {
            NavCommand::Up => self.select(ctx, self.cursor.index().checked_sub(1)),
            NavCommand::Down => self.select(ctx, Some(self.cursor.index() + 1)),
            NavCommand::First => self.select(ctx, Some(0)),
            NavCommand::Last => self.select(ctx, self.level_count().checked_sub(1)),
            NavCommand::Enter => self.enter(ctx),
            NavCommand::Increment(modifiers) => self.adjust(ctx, 1, modifiers),
            NavCommand::Decrement(modifiers) => self.adjust(ctx, -1, modifiers),
            NavCommand::Repeat => self.announce(ctx, false),
            NavCommand::Search(query) => self.search(ctx, query),
            NavCommand::SearchNext => self.search_step(ctx, true),
            NavCommand::SearchPrevious => self.search_step(ctx, false),
            NavCommand::Escape | NavCommand::Refresh => {}
        }
        KeyResponse::Continue
    }

    /// 当前层的条目数
    fn level_count(&self) -> usize {
        let address = self.cursor.address();
        tree::count_at(&*self.adapter, &address, address.level)
    }

    /// 生成当前地址的朗读文本，适配器出错时退回到 "未知" 文本
    fn describe(&mut self, settings: &NavigatorSettings) -> String {
        let address = self.cursor.address();
        match tree::announce_at(self.adapter.as_mut(), &address) {
            Ok(text) => text,
            Err(e) => {
                log_error(&address, &e);
                settings.unknown_message.clone()
            }
        }
    }

    /// 朗读当前地址；`with_position` 时按设置追加 "N of M"
    fn announce(&mut self, ctx: &mut PanelContext, with_position: bool) {
        let mut text = self.describe(&ctx.settings);
        if with_position && ctx.settings.announce_position {
            text = format!(
                "{text}, {} of {}",
                self.cursor.index() + 1,
                self.level_count()
            );
        }
        ctx.say(text);
    }

    /// 横向移动；越界时什么都不做
    fn select(&mut self, ctx: &mut PanelContext, target: Option<usize>) {
        match target {
            Some(index) if index < self.level_count() && index != self.cursor.index() => {
                self.cursor.select(index);
                self.announce(ctx, true);
            }
            _ => log::trace!("Lateral move to {target:?} ignored"),
        }
    }

    fn enter(&mut self, ctx: &mut PanelContext) {
        let address = self.cursor.address();
        if tree::child_count(&*self.adapter, &address) > 0 && self.cursor.descend() {
            log::debug!("Descended to {}", self.cursor.address());
            self.announce(ctx, true);
            return;
        }

        let outcome = tree::perform_at(self.adapter.as_mut(), &address);
        if outcome == ActionOutcome::Unhandled {
            let text = ctx.settings.empty_message.clone();
            ctx.say(text);
            return;
        }
        self.apply(ctx, outcome);
    }

    fn escape(&mut self, ctx: &mut PanelContext) -> KeyResponse {
        if !self.cursor.ascend() {
            ctx.play(AudioCue::PanelClose);
            return KeyResponse::ClosePanel;
        }
        log::debug!("Ascended to {}", self.cursor.address());
        tree::clamp(&*self.adapter, &mut self.cursor);
        if self.adapter.section_count() == 0 {
            let text = ctx.settings.empty_panel_message.clone();
            ctx.say(text);
        } else {
            self.announce(ctx, false);
        }
        KeyResponse::Continue
    }

    fn adjust(&mut self, ctx: &mut PanelContext, delta: i32, modifiers: Modifiers) {
        let address = self.cursor.address();
        let outcome = tree::adjust_at(self.adapter.as_mut(), &address, delta, modifiers);
        self.apply(ctx, outcome);
    }

    /// 应用动作结果：音效、刷新、收起、夹紧、朗读
    fn apply(&mut self, ctx: &mut PanelContext, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Unhandled => {}
            ActionOutcome::Success {
                message,
                cue,
                collapse_to,
            } => {
                ctx.play(cue);
                self.adapter.refresh_data();
                if let Some(level) = collapse_to {
                    if self.cursor.collapse_to(level) {
                        log::debug!("Collapsed to {}", self.cursor.address());
                    }
                }
                tree::clamp(&*self.adapter, &mut self.cursor);
                match message {
                    Some(text) => ctx.say(text),
                    None => self.announce(ctx, false),
                }
            }
            ActionOutcome::Failure { message } => {
                // 失败的动作也可能已经改动了游戏状态
                if tree::clamp(&*self.adapter, &mut self.cursor) {
                    log::debug!("Clamped after failure to {}", self.cursor.address());
                }
                ctx.play(AudioCue::Fail);
                ctx.say(message);
            }
        }
    }

    fn refresh(&mut self, ctx: &mut PanelContext) {
        self.adapter.refresh_data();
        tree::clamp(&*self.adapter, &mut self.cursor);
        if self.adapter.section_count() == 0 {
            let text = ctx.settings.empty_panel_message.clone();
            ctx.say(text);
        } else {
            self.announce(ctx, false);
        }
    }

    fn search(&mut self, ctx: &mut PanelContext, query: String) {
        let hits = search::search(&*self.adapter, &query);
        match hits.first() {
            Some(hit) => self.jump(ctx, hit.address()),
            None => {
                ctx.play(AudioCue::Fail);
                let text = ctx.settings.no_matches(query.trim());
                ctx.say(text);
            }
        }
        self.last_query = Some(query);
    }

    fn search_step(&mut self, ctx: &mut PanelContext, forward: bool) {
        let Some(query) = self.last_query.clone() else {
            log::trace!("No previous search");
            return;
        };
        let hits = search::search(&*self.adapter, &query);
        match search::next_hit(&hits, &self.cursor.address(), forward) {
            Some(hit) => self.jump(ctx, hit.address()),
            None => {
                ctx.play(AudioCue::Fail);
                let text = ctx.settings.no_matches(query.trim());
                ctx.say(text);
            }
        }
    }

    fn jump(&mut self, ctx: &mut PanelContext, address: Address) {
        self.cursor.jump_to(address);
        tree::clamp(&*self.adapter, &mut self.cursor);
        log::debug!("Jumped to {}", self.cursor.address());
        self.announce(ctx, true);
    }
}

fn log_error(address: &Address, e: &NavError) {
    if e.is_expected() {
        log::warn!("Cannot announce {address}: {e}");
    } else {
        log::error!("Cannot announce {address}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::NavResult;
    use crate::services::WorkerSlots;
    use crate::test_utils::{MockWorkforce, RecordingCues, RecordingSpeech, TreeAdapter};
    use crate::types::BuildingId;

    struct Harness {
        nav: Navigator,
        speech: Arc<RecordingSpeech>,
        cues: Arc<RecordingCues>,
    }

    impl Harness {
        fn focus(adapter: impl BuildingAdapter + 'static) -> Self {
            let speech = Arc::new(RecordingSpeech::default());
            let cues = Arc::new(RecordingCues::default());
            let mut nav = Navigator::new(PanelContext::new(speech.clone(), cues.clone()));
            nav.on_focus(Box::new(adapter));
            Self { nav, speech, cues }
        }

        fn key(&mut self, command: NavCommand) -> KeyResponse {
            self.nav.on_key(command)
        }

        fn address(&self) -> Address {
            self.nav.cursor().unwrap().address()
        }

        fn spoken(&self) -> String {
            self.nav.last_spoken().unwrap_or_default().to_string()
        }
    }

    fn bakery() -> TreeAdapter {
        TreeAdapter::new()
            .section("Recipes")
            .item("Bread", &["Flour", "Water"])
            .item("Biscuits", &[])
            .section("Workers")
            .item("Slot 1", &["Unassign", "Beaver"])
            .item("Slot 2", &["Beaver"])
    }

    #[test]
    fn focus_announces_title_and_first_section() {
        let h = Harness::focus(bakery());
        assert_eq!(h.spoken(), "Test building, Recipes");
        assert_eq!(h.cues.played(), vec![AudioCue::PanelOpen]);
        assert_eq!(h.address(), Address::section(0));
    }

    #[test]
    fn focus_on_empty_panel() {
        let h = Harness::focus(TreeAdapter::new());
        assert_eq!(h.spoken(), "Test building, Panel is empty");
    }

    #[test]
    fn lateral_moves_clamp_without_wrapping() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Down);
        assert_eq!(h.spoken(), "Workers");
        let utterances = h.speech.count();

        h.key(NavCommand::Down);
        assert_eq!(h.address(), Address::section(1));
        assert_eq!(h.speech.count(), utterances);
        assert_eq!(h.spoken(), "Workers");

        h.key(NavCommand::Up);
        h.key(NavCommand::Up);
        assert_eq!(h.address(), Address::section(0));
        assert_eq!(
            h.speech.utterances(),
            ["Test building, Recipes", "Workers", "Recipes"]
        );
    }

    #[test]
    fn first_and_last_jump_within_level() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Down);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Last);
        assert_eq!(h.address(), Address::item(1, 1));
        h.key(NavCommand::First);
        assert_eq!(h.address(), Address::item(1, 0));
        assert_eq!(h.spoken(), "Slot 1");
    }

    #[test]
    fn descend_then_ascend_restores_address() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Enter);
        let start = h.address();
        assert_eq!(start, Address::item(0, 0));

        h.key(NavCommand::Enter);
        h.key(NavCommand::Down);
        assert_eq!(h.address(), Address::sub_item(0, 0, 1));
        assert_eq!(h.spoken(), "Water");
        h.key(NavCommand::Escape);
        assert_eq!(h.address(), start);
        assert_eq!(h.spoken(), "Bread");
    }

    #[test]
    fn enter_on_leaf_without_action_speaks_empty_message() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Enter);
        h.key(NavCommand::Down);
        h.key(NavCommand::Enter);
        assert_eq!(h.address(), Address::item(0, 1));
        assert_eq!(h.spoken(), "Nothing here");
    }

    #[test]
    fn escape_at_root_closes_panel() {
        let mut h = Harness::focus(bakery());
        assert_eq!(h.key(NavCommand::Escape), KeyResponse::ClosePanel);
        assert_eq!(h.cues.last(), Some(AudioCue::PanelClose));
    }

    #[test]
    fn collapsing_action_leaves_level_one_less() {
        let adapter = bakery().on_action(
            Address::sub_item(1, 1, 0),
            ActionOutcome::success("Assigned Ada, Beaver").collapsing_to(Level::Item),
        );
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Down);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Down);
        h.key(NavCommand::Enter);
        assert_eq!(h.address(), Address::sub_item(1, 1, 0));

        h.key(NavCommand::Enter);
        assert_eq!(h.address(), Address::item(1, 1));
        assert_eq!(h.spoken(), "Assigned Ada, Beaver");
        assert_eq!(h.cues.last(), Some(AudioCue::Confirm));
    }

    #[test]
    fn successful_action_refreshes_adapter() {
        let adapter = bakery().on_action(Address::sub_item(0, 0, 1), ActionOutcome::silent_success());
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Down);
        let before = handle.refresh_count();

        h.key(NavCommand::Enter);
        assert_eq!(handle.refresh_count(), before + 1);
        // 没有消息时朗读当前地址
        assert_eq!(h.spoken(), "Water");
        assert_eq!(handle.performed(), vec![Address::sub_item(0, 0, 1)]);
    }

    #[test]
    fn failed_action_keeps_cursor() {
        let adapter = bakery().on_action(
            Address::sub_item(1, 1, 0),
            ActionOutcome::failure("No free Beaver workers"),
        );
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Down);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Down);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Enter);
        assert_eq!(h.address(), Address::sub_item(1, 1, 0));
        assert_eq!(h.spoken(), "No free Beaver workers");
        assert_eq!(h.cues.last(), Some(AudioCue::Fail));
    }

    /// 只有一个 "Workers" 分区的适配器，直接委托给 WorkerSlots
    struct SlotsAdapter {
        slots: WorkerSlots,
    }

    impl BuildingAdapter for SlotsAdapter {
        fn title(&self) -> String {
            "Mill".to_string()
        }

        fn refresh_data(&mut self) {
            self.slots.refresh();
        }

        fn clear_data(&mut self) {
            self.slots.clear();
        }

        fn section_count(&self) -> usize {
            1
        }

        fn section_name(&self, section: usize) -> Option<String> {
            (section == 0).then(|| "Workers".to_string())
        }

        fn item_count(&self, _section: usize) -> usize {
            self.slots.item_count()
        }

        fn sub_item_count(&self, _section: usize, item: usize) -> usize {
            self.slots.sub_item_count(item)
        }

        fn announce_item(&mut self, _section: usize, item: usize) -> NavResult<String> {
            self.slots.announce_item(item)
        }

        fn announce_sub_item(
            &mut self,
            _section: usize,
            item: usize,
            sub_item: usize,
        ) -> NavResult<String> {
            self.slots.announce_sub_item(item, sub_item)
        }

        fn perform_sub_item_action(
            &mut self,
            _section: usize,
            item: usize,
            sub_item: usize,
        ) -> ActionOutcome {
            self.slots.perform_sub_item_action(item, sub_item)
        }
    }

    #[test]
    fn failure_that_changed_state_is_clamped() {
        let mock = Arc::new(
            MockWorkforce::new(1)
                .with_worker(0, "Ada", "Beaver")
                .with_race("Beaver", 1)
                .with_race("Human", 2),
        );
        let adapter = SlotsAdapter {
            slots: WorkerSlots::new(mock.clone(), BuildingId(1)),
        };
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Last);
        assert_eq!(h.address(), Address::sub_item(0, 0, 2));
        assert_eq!(h.spoken(), "Human, 2 free");

        // 解雇成功、分配失败：工位变空，子项从 3 个变成 2 个
        mock.reject_assignments(true);
        h.key(NavCommand::Enter);
        assert_eq!(h.spoken(), "Unassigned Ada, could not assign Human");
        assert_eq!(h.cues.last(), Some(AudioCue::Fail));
        assert_eq!(h.address(), Address::sub_item(0, 0, 1));
        assert_eq!(mock.unassign_calls(), 1);

        // 光标仍然有效，下一条命令直接执行而不是报告漂移
        h.key(NavCommand::Repeat);
        assert_eq!(h.spoken(), "Human, 2 free");
        h.key(NavCommand::Up);
        assert_eq!(h.address(), Address::sub_item(0, 0, 0));
        assert_eq!(h.spoken(), "Beaver, 2 free");
    }

    #[test]
    fn drift_is_clamped_before_moving() {
        let adapter = bakery();
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Down);
        assert_eq!(h.address(), Address::item(0, 1));

        // 游戏在两次按键之间删掉了 Biscuits
        handle.remove_item(0, 1);
        h.key(NavCommand::Down);
        assert_eq!(h.address(), Address::item(0, 0));
        assert_eq!(h.spoken(), "Bread");
    }

    #[test]
    fn emptied_level_moves_cursor_up() {
        let adapter = bakery();
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Enter);
        h.key(NavCommand::Enter);
        assert_eq!(h.address(), Address::sub_item(0, 0, 0));

        handle.set_sub_items(0, 0, &[]);
        h.key(NavCommand::Refresh);
        assert_eq!(h.address(), Address::item(0, 0));
        assert_eq!(h.spoken(), "Bread");
    }

    #[test]
    fn index_stays_in_range_after_every_command() {
        let adapter = bakery();
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        let commands = [
            NavCommand::Down,
            NavCommand::Enter,
            NavCommand::Last,
            NavCommand::Enter,
            NavCommand::Down,
            NavCommand::Down,
            NavCommand::Escape,
            NavCommand::Up,
            NavCommand::Enter,
            NavCommand::Repeat,
        ];
        for command in commands {
            h.key(command);
            let address = h.address();
            let count = tree::count_at(&handle.snapshot(), &address, address.level);
            assert!(address.index_at(address.level) < count, "{address} out of {count}");
        }
    }

    #[test]
    fn adapter_error_speaks_unknown_message() {
        let adapter = bakery().failing_at(Address::section(1));
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Down);
        assert_eq!(h.address(), Address::section(1));
        assert_eq!(h.spoken(), "Unknown item");
    }

    #[test]
    fn adjust_passes_modifiers_and_is_silent_when_unhandled() {
        let adapter = bakery().on_adjust(Address::item(0, 0), ActionOutcome::success("Limit 10"));
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        h.key(NavCommand::Increment(Modifiers::NONE));
        let utterances = h.speech.count();
        assert_eq!(h.spoken(), "Test building, Recipes");

        h.key(NavCommand::Enter);
        h.key(NavCommand::Decrement(Modifiers::SHIFT));
        assert_eq!(h.spoken(), "Limit 10");
        assert_eq!(h.speech.count(), utterances + 2);
        assert_eq!(
            handle.adjustments(),
            vec![
                (Address::section(0), 1, Modifiers::NONE),
                (Address::item(0, 0), -1, Modifiers::SHIFT)
            ]
        );
    }

    #[test]
    fn search_jumps_to_first_hit() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Search("wat".into()));
        assert_eq!(h.address(), Address::sub_item(0, 0, 1));
        assert_eq!(h.spoken(), "Water");

        h.key(NavCommand::Search("zz".into()));
        assert_eq!(h.address(), Address::sub_item(0, 0, 1));
        assert_eq!(h.spoken(), "No matches for zz");
        assert_eq!(h.cues.last(), Some(AudioCue::Fail));
    }

    #[test]
    fn search_next_and_previous_wrap() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Search("beaver".into()));
        assert_eq!(h.address(), Address::sub_item(1, 0, 1));

        h.key(NavCommand::SearchNext);
        assert_eq!(h.address(), Address::sub_item(1, 1, 0));
        h.key(NavCommand::SearchNext);
        assert_eq!(h.address(), Address::sub_item(1, 0, 1));
        h.key(NavCommand::SearchPrevious);
        assert_eq!(h.address(), Address::sub_item(1, 1, 0));
    }

    #[test]
    fn search_next_without_query_is_silent() {
        let mut h = Harness::focus(bakery());
        let utterances = h.speech.count();
        h.key(NavCommand::SearchNext);
        assert_eq!(h.speech.count(), utterances);
    }

    #[test]
    fn announce_position_appends_fraction() {
        let mut h = Harness::focus(bakery());
        let mut settings = h.nav.settings().clone();
        settings.announce_position = true;
        h.nav.set_settings(settings);

        h.key(NavCommand::Down);
        assert_eq!(h.spoken(), "Workers, 2 of 2");
        h.key(NavCommand::Repeat);
        assert_eq!(h.spoken(), "Workers");

        // 搜索结果和手动移动一样带位置
        h.key(NavCommand::Search("biscuits".to_string()));
        assert_eq!(h.address(), Address::item(0, 1));
        assert_eq!(h.spoken(), "Biscuits, 2 of 2");
    }

    #[test]
    fn blur_clears_adapter() {
        let adapter = bakery();
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        h.nav.on_blur();
        assert!(!h.nav.is_active());
        assert_eq!(handle.clear_count(), 1);
        assert_eq!(h.key(NavCommand::Down), KeyResponse::Continue);
    }

    #[test]
    fn sync_refreshes_without_speaking() {
        let adapter = bakery();
        let handle = adapter.handle();
        let mut h = Harness::focus(adapter);
        let refreshes = handle.refresh_count();
        let utterances = h.speech.count();

        h.nav.sync();
        assert_eq!(handle.refresh_count(), refreshes + 1);
        assert_eq!(h.speech.count(), utterances);
        assert_eq!(h.address(), Address::section(0));
    }

    #[test]
    fn breadcrumb_names_the_path() {
        let mut h = Harness::focus(bakery());
        h.key(NavCommand::Enter);
        h.key(NavCommand::Enter);
        assert_eq!(h.nav.breadcrumb(), ["Recipes", "Bread", "Flour"]);
    }
}
