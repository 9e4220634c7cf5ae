use anyhow::{Context, Result};
use boksldrop::app::App;
use boksldrop::config::Cli;
use boksldrop::core::actions::{find_action, generate_command_bar_items};
use boksldrop::logging;
use boksldrop::ui::{
    CommandBar, Dialog, DialogKind, DropZoneStatus, FileList, LayoutMode, SelectionDialog,
    SelectionDialogText, StatusBar, TextKey, Theme, WarningScreen,
};
use boksldrop::utils::formatter::format_file_size;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    // 설정 오류는 화면 전환 전에 보고
    let (config, config_path) = cli.resolve_config().context("failed to load configuration")?;

    if let Some(path) = logging::default_log_path() {
        // 로그 파일을 못 열면 로그 없이 진행
        let _ = logging::init_logging(&path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, config_path);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "event loop failed");
        eprintln!("Error: {:?}", err);
        return Err(err);
    }

    if app.confirmed {
        let paths = app.selected_paths();
        info!(count = paths.len(), "selection confirmed");
        let mut out = io::stdout().lock();
        for path in paths {
            writeln!(out, "{}", path.display())?;
        }
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .hint(app.i18n().tr(TextKey::WarnTooSmall))
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => render_main_ui(f, app),
            }
        })?;

        app.clear_expired_toast();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.dialog.is_some() {
                        handle_dialog_keys(app, key.modifiers, key.code);
                    } else if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
                Event::Paste(text) => app.handle_paste(&text),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 보조 다이얼로그 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match app.dialog {
        Some(DialogKind::PickInput { .. }) => handle_pick_input_keys(app, modifiers, code),
        Some(DialogKind::Message { .. }) => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        None => {}
    }
}

/// 경로 입력 다이얼로그 키 처리
fn handle_pick_input_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.dialog_input_submit(),
        (_, KeyCode::Esc) => app.close_dialog(),
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.dialog_input_toggle_button();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.dialog_input_delete_prev_segment(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.dialog_input_char(c),
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 드롭 영역 안내 문구
fn drop_hint(app: &App) -> &'static str {
    let i18n = app.i18n();
    if !app.selection.is_enabled() {
        i18n.tr(TextKey::DropHintDisabled)
    } else if app.selection.is_over() {
        i18n.tr(TextKey::DropHintActive)
    } else {
        i18n.tr(TextKey::DropHint)
    }
}

/// 허용 패턴 표시 ("Accept: .csv, .pdf")
fn accept_label(app: &App) -> String {
    let i18n = app.i18n();
    let accept = app
        .selection
        .accept()
        .describe()
        .unwrap_or_else(|| i18n.tr(TextKey::AcceptAll).to_string());
    format!("{}: {}", i18n.tr(TextKey::AcceptPrefix), accept)
}

/// 메인 화면의 선택 목록 (읽기 전용)
fn render_selection_view(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let i18n = app.i18n();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border.to_color()))
        .title(Span::styled(
            i18n.tr(TextKey::SelectionTitle),
            Style::default().fg(theme.accent.to_color()),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let empty = if app.selection.is_multiple() {
        i18n.tr(TextKey::SelectionEmpty)
    } else {
        i18n.tr(TextKey::SingleEmpty)
    };
    let files = app.selection.files();
    let list = FileList::new(files)
        .selected_index((!files.is_empty()).then_some(app.selected_index))
        .headers(
            i18n.tr(TextKey::ListHeaderName),
            i18n.tr(TextKey::ListHeaderSize),
            i18n.tr(TextKey::ListHeaderModified),
        )
        .empty_text(empty)
        .dimmed(!app.selection.is_enabled())
        .theme(theme);
    f.render_widget(list, inner);
}

/// 상태바 데이터 수집 + 렌더링
fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let i18n = app.i18n();
    let files = app.selection.files();
    let total_size = format_file_size(files.iter().map(|file| file.size).sum());
    let accept = accept_label(app);
    let mode = if app.selection.is_multiple() {
        i18n.tr(TextKey::ModeMulti)
    } else {
        i18n.tr(TextKey::ModeSingle)
    };
    let enabled_label = if app.selection.is_enabled() {
        i18n.tr(TextKey::Enabled)
    } else {
        i18n.tr(TextKey::Disabled)
    };

    let status_bar = StatusBar::new()
        .file_count(files.len())
        .total_size(&total_size)
        .accept(&accept)
        .message(app.toast_display())
        .mode(mode)
        .enabled(app.selection.is_enabled(), enabled_label)
        .theme(theme);
    f.render_widget(status_bar, area);
}

/// 선택 다이얼로그 렌더링
fn render_selection_dialog(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme) {
    let i18n = app.i18n();
    let areas = app.dialog_areas();
    let files = app.selection.files();
    let report = app.duplicate_message();
    let empty = if app.selection.is_multiple() {
        i18n.tr(TextKey::SelectionEmpty)
    } else {
        i18n.tr(TextKey::SingleEmpty)
    };
    let text = SelectionDialogText {
        title: i18n.tr(TextKey::DialogTitle),
        zone_title: i18n.tr(TextKey::SelectionTitle),
        hint: drop_hint(app),
        empty,
        dismiss: i18n.tr(TextKey::DismissHint),
        headers: [
            i18n.tr(TextKey::ListHeaderName),
            i18n.tr(TextKey::ListHeaderSize),
            i18n.tr(TextKey::ListHeaderModified),
        ],
    };
    let dialog = SelectionDialog::new(&areas, files)
        .selected_index((!files.is_empty()).then_some(app.selected_index))
        .status(DropZoneStatus::from_flags(
            app.selection.is_enabled(),
            app.selection.is_over(),
        ))
        .report(report.as_deref())
        .text(text)
        .theme(theme);
    f.render_widget(dialog, f.area());
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();
    let i18n = app.i18n();

    let header = Paragraph::new(Span::styled(
        format!(" {}", i18n.tr(TextKey::AppTitle)),
        Style::default()
            .fg(theme.accent.to_color())
            .add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(theme.bg_primary.to_color()));
    f.render_widget(header, areas.header);

    render_selection_view(f, app, theme, areas.body);
    render_status_bar(f, app, theme, areas.status_bar);

    let commands = generate_command_bar_items(app.language, app.session.is_open());
    let command_bar = CommandBar::new().commands(commands).theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if app.session.is_open() {
        render_selection_dialog(f, app, theme);
    }

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind)
            .labels(i18n.tr(TextKey::Ok), i18n.tr(TextKey::Cancel))
            .theme(theme);
        f.render_widget(dialog, f.area());
    }
}
