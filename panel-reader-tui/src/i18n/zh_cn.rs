//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, BuildingListTexts, CommonTexts, HearthTexts, HelpTexts, HintTexts, KeyNames,
    NavigatorTexts, PanelTexts, ProductionTexts, SearchTexts, SpeechLogTexts, StatusBarTexts,
    Translations, WarehouseTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "面板朗读器",
        quit: "退出",
        language_changed: "简体中文",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            arrows_ud: "↑↓",
            plus_minus: "+/-",
            home_end: "Home/End",
            slash: "/",
            next_prev: "n/N",
            repeat: "r",
            refresh: "Alt+r",
            language: "Alt+l",
            help: "?",
            quit: "Ctrl+c",
        },
        actions: ActionTexts {
            move_up_down: "移动",
            open_panel: "打开面板",
            activate: "进入 / 执行",
            back: "返回",
            adjust: "调整（Shift ×10，Ctrl ×100）",
            first_last: "第一项 / 最后一项",
            search: "搜索",
            search_step: "下一个 / 上一个结果",
            repeat: "重读",
            refresh: "刷新",
            language: "语言",
            help: "帮助",
            quit: "退出",
            submit: "搜索",
            cancel: "取消",
        },
    },

    // ========================================================================
    // 界面区域
    // ========================================================================
    buildings: BuildingListTexts {
        title: "建筑",
        workshop: "工坊",
        hearth: "火炉",
        warehouse: "仓库",
        empty: "没有建筑",
    },

    speech: SpeechLogTexts {
        title: "朗读",
        empty: "尚无朗读内容",
        cue: "音效",
        cue_confirm: "确认",
        cue_fail: "失败",
        cue_toggle_on: "开启",
        cue_toggle_off: "关闭",
        cue_panel_open: "面板打开",
        cue_panel_close: "面板关闭",
    },

    search: SearchTexts {
        title: "搜索",
        placeholder: "输入名称...",
    },

    status_bar: StatusBarTexts {
        buildings: "建筑",
        panel: "面板",
        tick: "第 {ticks} 刻",
    },

    help: HelpTexts {
        title: "帮助",
        list_section: "建筑列表",
        panel_section: "建筑面板",
        global_section: "全局",
        close_hint: "按任意键关闭",
    },

    // ========================================================================
    // 朗读文本
    // ========================================================================
    navigator: NavigatorTexts {
        empty_message: "这里没有内容",
        unknown_message: "未知项目",
        empty_panel_message: "面板为空",
        no_matches_message: "没有找到 {query}",
    },

    panel: PanelTexts {
        production: ProductionTexts {
            section_status: "状态",
            section_recipes: "配方",
            section_workers: "工人",
            section_upgrades: "升级",
            status_workers: "{count} / {max} 名工人",
            status_producing: "正在生产 {product}，{progress}%",
            status_idle: "空闲",
            status_upgrades: "已完成 {achieved} / {total} 项升级",
            recipe: "{product}，{state}，需要 {ingredients}，{limit}，库存 {stock}",
            enabled: "已启用",
            disabled: "已停用",
            limit: "上限 {limit}",
            no_limit: "无上限",
            no_ingredients: "无",
            recipe_enabled: "{product} 已启用",
            recipe_disabled: "{product} 已停用",
            limit_set: "{product} 上限 {limit}",
            limit_removed: "{product} 无上限",
        },
        hearth: HearthTexts {
            section_heat: "热度",
            section_fuel: "燃料",
            section_workers: "守火人",
            heat: "热度 {heat}%",
            target: "目标热度 {target}%",
            fuel: "{good}，{state}，库存 {stock}",
            allowed: "允许",
            forbidden: "禁止",
            fuel_allowed: "允许燃烧 {good}",
            fuel_forbidden: "禁止燃烧 {good}",
        },
        warehouse: WarehouseTexts {
            section_storage: "存储",
            section_summary: "概况",
            category: "{name}，{count} 种货物",
            good: "{good}，{amount}，{state}",
            accepting: "接收中",
            refusing: "拒收",
            action_accept: "接收运送",
            action_refuse: "拒收运送",
            action_discard: "丢弃 {amount}",
            accepted: "{good} 已接收",
            refused: "{good} 已拒收",
            discarded: "已丢弃 {amount} {good}",
            nothing_to_discard: "没有可丢弃的 {good}",
            total_stored: "共存储 {total} 件货物",
            refused_count: "拒收 {count} 种货物",
        },
        rejected: "无法修改 {name}",
    },
};
