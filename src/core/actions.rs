//! 액션 레지스트리 (키 바인딩, 커맨드바 항목의 단일 출처)
//!
//! 모든 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crate::ui::{I18n, Language};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Session
    OpenDialog,
    CloseDialog,
    Confirm,
    // Selection
    PickFiles,
    RemoveSelected,
    RemoveAll,
    DismissWarning,
    ToggleEnabled,
    // Navigation
    MoveUp,
    MoveDown,
    // System
    ToggleLanguage,
    CycleTheme,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Session,
    Selection,
    Navigation,
    System,
}

/// 커맨드바에 표시되는 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionScope {
    /// 메인 화면에서만
    Main,
    /// 선택 다이얼로그에서만
    Dialog,
    /// 어디서나
    Any,
}

impl ActionScope {
    fn visible(self, dialog_open: bool) -> bool {
        match self {
            ActionScope::Main => !dialog_open,
            ActionScope::Dialog => dialog_open,
            ActionScope::Any => true,
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
    pub scope: ActionScope,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::OpenDialog,
        id: "open_dialog",
        label: "Add",
        category: ActionCategory::Session,
        command_bar: Some(CommandBarEntry {
            key: "o",
            label: "Add",
            priority: 1,
            scope: ActionScope::Main,
        }),
    },
    ActionDef {
        action: Action::CloseDialog,
        id: "close_dialog",
        label: "Close",
        category: ActionCategory::Session,
        command_bar: Some(CommandBarEntry {
            key: "Esc",
            label: "Close",
            priority: 90,
            scope: ActionScope::Dialog,
        }),
    },
    ActionDef {
        action: Action::Confirm,
        id: "confirm",
        label: "Done",
        category: ActionCategory::Session,
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Done",
            priority: 80,
            scope: ActionScope::Main,
        }),
    },
    ActionDef {
        action: Action::PickFiles,
        id: "pick",
        label: "Path",
        category: ActionCategory::Selection,
        command_bar: Some(CommandBarEntry {
            key: "a",
            label: "Path",
            priority: 10,
            scope: ActionScope::Dialog,
        }),
    },
    ActionDef {
        action: Action::RemoveSelected,
        id: "remove",
        label: "Remove",
        category: ActionCategory::Selection,
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Remove",
            priority: 20,
            scope: ActionScope::Any,
        }),
    },
    ActionDef {
        action: Action::RemoveAll,
        id: "remove_all",
        label: "Remove all",
        category: ActionCategory::Selection,
        command_bar: Some(CommandBarEntry {
            key: "D",
            label: "Clear",
            priority: 21,
            scope: ActionScope::Any,
        }),
    },
    ActionDef {
        action: Action::DismissWarning,
        id: "dismiss",
        label: "Dismiss",
        category: ActionCategory::Selection,
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleEnabled,
        id: "toggle_enabled",
        label: "On/Off",
        category: ActionCategory::Selection,
        command_bar: Some(CommandBarEntry {
            key: "e",
            label: "On/Off",
            priority: 30,
            scope: ActionScope::Any,
        }),
    },
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Up",
        category: ActionCategory::Navigation,
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
            scope: ActionScope::Any,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Down",
        category: ActionCategory::Navigation,
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleLanguage,
        id: "language",
        label: "Lang",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "L",
            label: "Lang",
            priority: 60,
            scope: ActionScope::Main,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "theme",
        label: "Theme",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "T",
            label: "Theme",
            priority: 61,
            scope: ActionScope::Main,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
            scope: ActionScope::Main,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 다이얼로그
        KeyBinding {
            code: KeyCode::Char('o'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenDialog,
        },
        KeyBinding {
            code: KeyCode::Esc,
            modifiers: None,
            action: Action::CloseDialog,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::Confirm,
        },
        // 선택
        KeyBinding {
            code: KeyCode::Char('a'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::PickFiles,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::RemoveSelected,
        },
        KeyBinding {
            code: KeyCode::Delete,
            modifiers: None,
            action: Action::RemoveSelected,
        },
        KeyBinding {
            code: KeyCode::Char('D'),
            modifiers: None,
            action: Action::RemoveAll,
        },
        KeyBinding {
            code: KeyCode::Char('x'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::DismissWarning,
        },
        KeyBinding {
            code: KeyCode::Char('e'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleEnabled,
        },
        // 탐색: Vim + 화살표
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        // 시스템
        KeyBinding {
            code: KeyCode::Char('L'),
            modifiers: None,
            action: Action::ToggleLanguage,
        },
        KeyBinding {
            code: KeyCode::Char('T'),
            modifiers: None,
            action: Action::CycleTheme,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

impl Action {
    /// action_id 문자열로 Action 조회
    pub fn from_id(id: &str) -> Option<Action> {
        ACTION_DEFS.iter().find(|d| d.id == id).map(|d| d.action)
    }

    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == self)
            .map(|d| d.id)
            .unwrap_or("unknown")
    }
}

/// 커맨드바용 항목 생성 (현재 화면에 맞는 항목만, priority 순 정렬)
pub fn generate_command_bar_items(language: Language, dialog_open: bool) -> Vec<CommandItem> {
    let i18n = I18n::new(language);
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .filter(|(cb, _)| cb.scope.visible(dialog_open))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, def)| CommandItem::new(cb.key, i18n.action_label(def.id, cb.label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_id() {
        assert_eq!(Action::from_id("open_dialog"), Some(Action::OpenDialog));
        assert_eq!(Action::from_id("remove_all"), Some(Action::RemoveAll));
        assert_eq!(Action::from_id("quit"), Some(Action::Quit));
        assert_eq!(Action::from_id("nonexistent"), None);
        assert_eq!(Action::DismissWarning.id(), "dismiss");
    }

    #[test]
    fn test_every_action_has_definition() {
        let all = [
            Action::OpenDialog,
            Action::CloseDialog,
            Action::Confirm,
            Action::PickFiles,
            Action::RemoveSelected,
            Action::RemoveAll,
            Action::DismissWarning,
            Action::ToggleEnabled,
            Action::MoveUp,
            Action::MoveDown,
            Action::ToggleLanguage,
            Action::CycleTheme,
            Action::Quit,
        ];
        for action in all {
            assert_ne!(action.id(), "unknown", "{:?}", action);
        }
    }

    #[test]
    fn test_find_action_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('o')),
            Some(Action::OpenDialog)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Up),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Delete),
            Some(Action::RemoveSelected)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Esc),
            Some(Action::CloseDialog)
        );
    }

    #[test]
    fn test_find_action_modifiers() {
        // 대문자는 SHIFT 유무와 무관
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char('D')),
            Some(Action::RemoveAll)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('D')),
            Some(Action::RemoveAll)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('c')), None);
        assert_eq!(find_action(KeyModifiers::CONTROL, KeyCode::Char('d')), None);
    }

    #[test]
    fn test_command_bar_items_follow_scope() {
        let main = generate_command_bar_items(Language::English, false);
        let keys: Vec<&str> = main.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.first(), Some(&"o"));
        assert!(keys.contains(&"q"));
        assert!(!keys.contains(&"Esc"));

        let dialog = generate_command_bar_items(Language::English, true);
        let keys: Vec<&str> = dialog.iter().map(|c| c.key.as_str()).collect();
        assert!(keys.contains(&"a"));
        assert!(keys.contains(&"Esc"));
        assert!(!keys.contains(&"o"));
    }

    #[test]
    fn test_command_bar_items_localized() {
        let items = generate_command_bar_items(Language::Korean, false);
        assert!(items.iter().any(|c| c.label == "추가"));
    }
}
