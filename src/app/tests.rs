use super::*;
use crate::config::Cli;
use crate::core::actions::Action;
use crate::ui::HitRegion;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn make_test_app() -> App {
    App::new_for_test()
}

fn make_single_app(accept: Option<&str>) -> App {
    App::new_for_test_with(Config {
        accept: accept.map(str::to_string),
        multiple: false,
        ..Default::default()
    })
}

fn create_files(base: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = base.join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            path
        })
        .collect()
}

/// 터미널이 드롭할 때 붙여넣는 형태 (경로마다 작은따옴표)
fn drop_payload(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn selected_names(app: &App) -> Vec<String> {
    app.selection.files().iter().map(|f| f.name.clone()).collect()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_paste_opens_session_and_adds_files() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.csv", "b.csv"]);
    let mut app = make_test_app();
    assert!(!app.session.is_open());

    app.handle_paste(&drop_payload(&paths));

    assert!(app.session.is_open());
    assert_eq!(selected_names(&app), vec!["a.csv", "b.csv"]);
    assert!(app.session.report().is_none());
    assert_eq!(app.toast_display(), Some("Added 2 file(s)"));
    assert!(!app.selection.is_over());
}

#[test]
fn test_paste_duplicates_raise_warning() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("other")).unwrap();
    let first = create_files(temp.path(), &["Report.csv"]);
    let second = create_files(&temp.path().join("other"), &["report.CSV", "extra.csv"]);
    let mut app = make_test_app();

    app.handle_paste(&drop_payload(&first));
    app.handle_paste(&drop_payload(&second));

    assert_eq!(selected_names(&app), vec!["Report.csv", "extra.csv"]);
    let message = app.duplicate_message().unwrap();
    assert_eq!(message, "1 duplicate file skipped: report.CSV");
}

#[test]
fn test_warning_survives_noop_drop_and_clears_on_reopen() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.csv", "skip.txt"]);
    let mut app = App::new_for_test_with(Config {
        accept: Some(".csv".to_string()),
        ..Default::default()
    });

    app.handle_paste(&drop_payload(&paths[..1]));
    app.handle_paste(&drop_payload(&paths[..1]));
    assert!(app.session.report().is_some());

    // 허용되지 않는 파일만 드롭 → 경고 유지
    app.handle_paste(&drop_payload(&paths[1..]));
    assert!(app.session.report().is_some());
    assert_eq!(app.toast_display(), Some("No file matches .csv"));

    app.execute_action(Action::CloseDialog);
    assert!(!app.session.is_open());
    app.execute_action(Action::OpenDialog);
    assert!(app.session.report().is_none());
    assert_eq!(selected_names(&app), vec!["a.csv"]);
}

#[test]
fn test_dismiss_warning() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt"]);
    let mut app = make_test_app();
    let payload = format!("{0} {0}", drop_payload(&paths));

    app.handle_paste(&payload);
    assert!(app.session.report().is_some());

    app.execute_action(Action::DismissWarning);
    assert!(app.session.report().is_none());
    assert_eq!(selected_names(&app), vec!["a.txt"]);
}

#[test]
fn test_escape_closes_pick_input_before_session() {
    let mut app = make_test_app();
    app.execute_action(Action::PickFiles);
    assert!(app.session.is_open());
    assert!(app.is_pick_input_open());

    app.execute_action(Action::CloseDialog);
    assert!(!app.is_pick_input_open());
    assert!(app.session.is_open());

    app.execute_action(Action::CloseDialog);
    assert!(!app.session.is_open());

    // 닫힌 상태의 Esc는 아무 일도 없음
    app.execute_action(Action::CloseDialog);
    assert!(!app.session.is_open());
    assert!(!app.should_quit());
}

#[test]
fn test_close_keeps_selection() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt", "b.txt"]);
    let mut app = make_test_app();

    app.handle_paste(&drop_payload(&paths));
    app.execute_action(Action::Confirm);
    assert!(!app.session.is_open());
    assert!(!app.should_quit());
    assert_eq!(selected_names(&app).len(), 2);
}

#[test]
fn test_outside_click_closes_session() {
    let mut app = make_test_app();
    app.execute_action(Action::OpenDialog);
    let frame = app.dialog_areas().frame;

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), frame.x + 2, frame.y + 2));
    assert!(app.session.is_open());

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
    assert!(!app.session.is_open());
}

#[test]
fn test_pointer_drag_hover_through_nested_list() {
    let mut app = make_test_app();
    app.execute_action(Action::OpenDialog);
    let areas = app.dialog_areas();
    let zone = (areas.drop_zone.x + 1, areas.drop_zone.y + 1);
    let list = (areas.list.x + 1, areas.list.y + 1);

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), zone.0, zone.1));
    assert_eq!(app.pointer.current(), Some(HitRegion::Zone));
    assert!(app.selection.is_over());

    // 목록으로 들어가도 hover 유지
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), list.0, list.1));
    assert_eq!(app.pointer.current(), Some(HitRegion::List));
    assert!(app.selection.is_over());

    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), zone.0, zone.1));
    assert!(app.selection.is_over());

    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0));
    assert!(!app.selection.is_over());

    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), list.0, list.1));
    assert!(app.selection.is_over());
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), list.0, list.1));
    assert!(!app.selection.is_over());
    assert_eq!(app.pointer.current(), None);
}

#[test]
fn test_close_resets_hover() {
    let mut app = make_test_app();
    app.execute_action(Action::OpenDialog);
    let zone = app.dialog_areas().drop_zone;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), zone.x + 1, zone.y + 1));
    assert!(app.selection.is_over());

    app.execute_action(Action::CloseDialog);
    assert!(!app.selection.is_over());
    assert_eq!(app.pointer.current(), None);
}

#[test]
fn test_click_on_list_row_moves_cursor() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt", "b.txt", "c.txt"]);
    let mut app = make_test_app();
    app.handle_paste(&drop_payload(&paths));
    let list = app.dialog_areas().list;

    // 첫 줄은 헤더
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), list.x + 1, list.y + 3));
    assert_eq!(app.selected_index, 2);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), list.x + 1, list.y + 3));
    assert_eq!(selected_names(&app).len(), 3);
}

#[test]
fn test_disabled_target_ignores_input() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt", "b.txt"]);
    let mut app = make_test_app();
    app.handle_paste(&drop_payload(&paths[..1]));

    app.execute_action(Action::ToggleEnabled);
    assert!(!app.selection.is_enabled());

    app.handle_paste(&drop_payload(&paths[1..]));
    app.execute_action(Action::RemoveSelected);
    app.execute_action(Action::RemoveAll);
    assert_eq!(selected_names(&app), vec!["a.txt"]);

    let zone = app.dialog_areas().drop_zone;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), zone.x + 1, zone.y + 1));
    assert!(!app.selection.is_over());

    app.execute_action(Action::ToggleEnabled);
    app.handle_paste(&drop_payload(&paths[1..]));
    assert_eq!(selected_names(&app), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_remove_selected_and_clamp_cursor() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt", "b.txt", "c.txt"]);
    let mut app = make_test_app();
    app.handle_paste(&drop_payload(&paths));

    app.execute_action(Action::MoveDown);
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::MoveDown);
    assert_eq!(app.selected_index, 2);

    app.execute_action(Action::RemoveSelected);
    assert_eq!(selected_names(&app), vec!["a.txt", "b.txt"]);
    assert_eq!(app.selected_index, 1);
    assert_eq!(app.toast_display(), Some("Removed c.txt"));

    app.execute_action(Action::MoveUp);
    app.execute_action(Action::MoveUp);
    assert_eq!(app.selected_index, 0);
    app.execute_action(Action::RemoveSelected);
    assert_eq!(selected_names(&app), vec!["b.txt"]);

    app.execute_action(Action::RemoveAll);
    assert!(app.selection.files().is_empty());
    assert_eq!(app.selected_index, 0);

    // 빈 목록에서 제거는 아무 일도 없음
    app.execute_action(Action::RemoveSelected);
    assert!(app.selection.files().is_empty());
}

#[test]
fn test_single_mode_keeps_first_accepted() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["notes.txt", "first.pdf", "second.pdf"]);
    let mut app = make_single_app(Some(".pdf"));

    app.handle_paste(&drop_payload(&paths));
    assert_eq!(selected_names(&app), vec!["first.pdf"]);

    // 허용되지 않는 파일만 드롭 → 기존 선택 유지
    app.handle_paste(&drop_payload(&paths[..1]));
    assert_eq!(selected_names(&app), vec!["first.pdf"]);

    // 단일 모드는 중복 검사 없이 교체
    app.handle_paste(&drop_payload(&paths[2..]));
    assert_eq!(selected_names(&app), vec!["second.pdf"]);
    assert!(app.session.report().is_none());

    app.execute_action(Action::RemoveSelected);
    assert!(app.selection.files().is_empty());
}

#[test]
fn test_pick_input_adds_typed_paths() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt"]);
    let mut app = make_test_app();

    app.execute_action(Action::PickFiles);
    app.dialog_input_str(&drop_payload(&paths));
    assert!(app.get_dialog_input_value().unwrap().ends_with("a.txt'"));
    app.dialog_input_submit();

    assert!(app.dialog.is_none());
    assert_eq!(selected_names(&app), vec!["a.txt"]);
    assert_eq!(app.selected_paths(), paths);
}

#[test]
fn test_pick_input_cancel_button() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt"]);
    let mut app = make_test_app();

    app.execute_action(Action::PickFiles);
    for c in paths[0].display().to_string().chars() {
        app.dialog_input_char(c);
    }
    app.dialog_input_toggle_button();
    app.dialog_input_submit();

    assert!(app.dialog.is_none());
    assert!(app.selection.files().is_empty());
}

#[test]
fn test_pick_input_missing_path_shows_message() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app();
    let missing = temp.path().join("missing.txt");

    app.execute_action(Action::PickFiles);
    app.dialog_input_str(&missing.display().to_string());
    app.dialog_input_submit();

    match &app.dialog {
        Some(DialogKind::Message { message, .. }) => {
            assert!(message.contains("missing.txt"));
        }
        other => panic!("expected message dialog, got {:?}", other),
    }
    assert!(app.selection.files().is_empty());
}

#[test]
fn test_paste_into_pick_input_edits_value() {
    let mut app = make_test_app();
    app.execute_action(Action::PickFiles);
    app.handle_paste("/tmp/a.txt\n");
    assert_eq!(app.get_dialog_input_value(), Some("/tmp/a.txt "));
    assert!(app.selection.files().is_empty());
}

#[test]
fn test_confirm_on_main_screen_quits_with_paths() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["b.txt", "a.txt"]);
    let mut app = make_test_app();
    app.handle_paste(&drop_payload(&paths));
    app.execute_action(Action::CloseDialog);

    app.execute_action(Action::Confirm);
    assert!(app.confirmed);
    assert!(app.should_quit());
    assert_eq!(app.selected_paths(), paths);
}

#[test]
fn test_quit_without_confirm() {
    let mut app = make_test_app();
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
    assert!(!app.confirmed);
}

#[test]
fn test_language_and_theme_persist_on_quit() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("boksldrop").join("config.toml");
    let mut app = App::new(Config::default(), Some(config_path.clone()));

    // 변경이 없으면 저장하지 않음
    app.quit();
    assert!(!config_path.exists());

    app.execute_action(Action::ToggleLanguage);
    assert_eq!(app.language, Language::Korean);
    app.execute_action(Action::CycleTheme);
    let theme = app.theme_manager.current_name().to_string();
    app.quit();

    let saved = Config::load_from(&config_path).unwrap();
    assert_eq!(saved.language, "ko");
    assert_eq!(saved.theme, theme);
}

#[test]
fn test_cli_overrides_and_runtime_toggle_are_not_persisted() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    let cli = Cli {
        accept: Some(".csv".to_string()),
        single: true,
        disabled: true,
        config: Some(config_path.clone()),
        ..Default::default()
    };
    let (config, path) = cli.resolve_config().unwrap();
    let mut app = App::new(config, path);

    app.execute_action(Action::ToggleEnabled);
    assert!(app.selection.is_enabled());
    app.execute_action(Action::ToggleLanguage);
    app.quit();

    let saved = Config::load_from(&config_path).unwrap();
    assert_eq!(saved.language, "ko");
    assert_eq!(saved.accept, None);
    assert!(saved.multiple);
    assert!(!saved.disabled);
}

#[test]
fn test_korean_messages() {
    let temp = TempDir::new().unwrap();
    let paths = create_files(temp.path(), &["a.txt"]);
    let mut app = App::new_for_test_with(Config {
        language: "ko".to_string(),
        ..Default::default()
    });

    app.handle_paste(&drop_payload(&paths));
    app.handle_paste(&drop_payload(&paths));
    assert_eq!(
        app.duplicate_message().as_deref(),
        Some("중복 파일 1개를 건너뛰었습니다: a.txt")
    );
}

#[test]
fn test_paste_of_missing_paths_leaves_session_closed() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app();
    app.handle_paste(&temp.path().join("nope.txt").display().to_string());

    assert!(!app.session.is_open());
    assert!(app.toast_display().unwrap().contains("nope.txt"));
}
