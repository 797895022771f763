//! 英文翻译 (en-US)

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
        app_name: "Panel Reader",
        quit: "Quit",
        language_changed: "English",
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
            move_up_down: "Move",
            open_panel: "Open panel",
            activate: "Enter / act",
            back: "Back",
            adjust: "Adjust (Shift ×10, Ctrl ×100)",
            first_last: "First / last",
            search: "Search",
            search_step: "Next / previous match",
            repeat: "Repeat",
            refresh: "Refresh",
            language: "Language",
            help: "Help",
            quit: "Quit",
            submit: "Search",
            cancel: "Cancel",
        },
    },

    // ========================================================================
    // 界面区域
    // ========================================================================
    buildings: BuildingListTexts {
        title: "Buildings",
        workshop: "Workshop",
        hearth: "Hearth",
        warehouse: "Warehouse",
        empty: "No buildings",
    },

    speech: SpeechLogTexts {
        title: "Speech",
        empty: "Nothing spoken yet",
        cue: "cue",
        cue_confirm: "confirm",
        cue_fail: "fail",
        cue_toggle_on: "toggle on",
        cue_toggle_off: "toggle off",
        cue_panel_open: "panel open",
        cue_panel_close: "panel close",
    },

    search: SearchTexts {
        title: "Search",
        placeholder: "Type a name...",
    },

    status_bar: StatusBarTexts {
        buildings: "Buildings",
        panel: "Panel",
        tick: "Tick {ticks}",
    },

    help: HelpTexts {
        title: "Help",
        list_section: "Building list",
        panel_section: "Building panel",
        global_section: "Global",
        close_hint: "Press any key to close",
    },

    // ========================================================================
    // 朗读文本
    // ========================================================================
    navigator: NavigatorTexts {
        empty_message: "Nothing here",
        unknown_message: "Unknown item",
        empty_panel_message: "Panel is empty",
        no_matches_message: "No matches for {query}",
    },

    panel: PanelTexts {
        production: ProductionTexts {
            section_status: "Status",
            section_recipes: "Recipes",
            section_workers: "Workers",
            section_upgrades: "Upgrades",
            status_workers: "{count} of {max} workers",
            status_producing: "Producing {product}, {progress} percent",
            status_idle: "Idle",
            status_upgrades: "{achieved} of {total} upgrades",
            recipe: "{product}, {state}, needs {ingredients}, {limit}, {stock} in stock",
            enabled: "enabled",
            disabled: "disabled",
            limit: "limit {limit}",
            no_limit: "no limit",
            no_ingredients: "nothing",
            recipe_enabled: "{product} enabled",
            recipe_disabled: "{product} disabled",
            limit_set: "{product} limit {limit}",
            limit_removed: "{product} no limit",
        },
        hearth: HearthTexts {
            section_heat: "Heat",
            section_fuel: "Fuel",
            section_workers: "Firekeepers",
            heat: "Heat {heat} percent",
            target: "Target heat {target} percent",
            fuel: "{good}, {state}, {stock} in stock",
            allowed: "allowed",
            forbidden: "forbidden",
            fuel_allowed: "{good} allowed",
            fuel_forbidden: "{good} forbidden",
        },
        warehouse: WarehouseTexts {
            section_storage: "Storage",
            section_summary: "Summary",
            category: "{name}, {count} goods",
            good: "{good}, {amount}, {state}",
            accepting: "accepting",
            refusing: "refusing",
            action_accept: "Accept deliveries",
            action_refuse: "Refuse deliveries",
            action_discard: "Discard {amount}",
            accepted: "{good} accepted",
            refused: "{good} refused",
            discarded: "Discarded {amount} {good}",
            nothing_to_discard: "No {good} to discard",
            total_stored: "{total} goods stored",
            refused_count: "Refusing {count} goods",
        },
        rejected: "Could not change {name}",
    },
};
