use crate::config::Config;
use crate::core::drag::DropEffect;
use crate::models::{FileHandle, MultiFileSelection, SingleFileSelection};
use crate::system::FileSystem;
use crate::ui::{DialogAreas, DialogKind, I18n, Language, LayoutManager, PointerRouter, ThemeManager};
use crate::utils::AcceptPattern;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

mod dialogs;
mod navigation;
pub mod session;
mod text_edit;

pub use session::DialogSession;

/// 호스트하는 선택 위젯 (단일 / 다중)
#[derive(Debug, Clone)]
pub enum SelectionWidget {
    Single(SingleFileSelection),
    Multi(MultiFileSelection),
}

impl SelectionWidget {
    pub fn from_config(config: &Config) -> Self {
        let accept = config.accept_pattern();
        let mut widget = if config.multiple {
            SelectionWidget::Multi(MultiFileSelection::new(accept))
        } else {
            SelectionWidget::Single(SingleFileSelection::new(accept))
        };
        widget.set_enabled(!config.disabled);
        widget
    }

    /// 현재 선택된 파일 (단일 모드는 0~1개)
    pub fn files(&self) -> &[FileHandle] {
        match self {
            SelectionWidget::Single(single) => single.file().map(std::slice::from_ref).unwrap_or(&[]),
            SelectionWidget::Multi(multi) => multi.files().as_slice(),
        }
    }

    pub fn accept(&self) -> &AcceptPattern {
        match self {
            SelectionWidget::Single(single) => single.accept(),
            SelectionWidget::Multi(multi) => multi.accept(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, SelectionWidget::Multi(_))
    }

    pub fn is_over(&self) -> bool {
        match self {
            SelectionWidget::Single(single) => single.is_over(),
            SelectionWidget::Multi(multi) => multi.is_over(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            SelectionWidget::Single(single) => single.is_enabled(),
            SelectionWidget::Multi(multi) => multi.is_enabled(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            SelectionWidget::Single(single) => single.set_enabled(enabled),
            SelectionWidget::Multi(multi) => multi.set_enabled(enabled),
        }
    }

    pub fn hide(&mut self) {
        match self {
            SelectionWidget::Single(single) => single.hide(),
            SelectionWidget::Multi(multi) => multi.hide(),
        }
    }

    pub fn drag_enter(&mut self) {
        match self {
            SelectionWidget::Single(single) => single.drag_enter(),
            SelectionWidget::Multi(multi) => multi.drag_enter(),
        }
    }

    pub fn drag_over(&self) -> DropEffect {
        match self {
            SelectionWidget::Single(single) => single.drag_over(),
            SelectionWidget::Multi(multi) => multi.drag_over(),
        }
    }

    pub fn drag_leave(&mut self) {
        match self {
            SelectionWidget::Single(single) => single.drag_leave(),
            SelectionWidget::Multi(multi) => multi.drag_leave(),
        }
    }
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 선택 확정 후 종료 (경로를 stdout으로 출력)
    pub confirmed: bool,
    /// 이번 실행의 설정 (명령줄 옵션 포함, 언어/테마 변경 반영)
    pub config: Config,
    /// 설정 저장 경로 (없으면 저장하지 않음)
    config_path: Option<PathBuf>,
    /// 언어/테마가 바뀌어 저장이 필요한지
    config_dirty: bool,
    pub layout: LayoutManager,
    pub theme_manager: ThemeManager,
    pub language: Language,
    pub filesystem: FileSystem,
    /// 선택 다이얼로그 세션
    pub session: DialogSession,
    pub selection: SelectionWidget,
    /// 목록 커서
    pub selected_index: usize,
    /// 세션 위에 겹치는 보조 다이얼로그 (경로 입력, 메시지)
    pub dialog: Option<DialogKind>,
    /// 마우스 드래그 라우터
    pub pointer: PointerRouter,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let mut theme_manager = ThemeManager::new();
        match theme_manager.load_themes_from_config_dir() {
            Ok(0) => {}
            Ok(count) => info!(count, "custom themes loaded"),
            Err(err) => warn!(%err, "failed to read themes directory"),
        }
        if let Err(err) = theme_manager.switch_theme(&config.theme) {
            warn!(%err, "falling back to default theme");
        }

        info!(
            multiple = config.multiple,
            disabled = config.disabled,
            accept = config.accept.as_deref().unwrap_or("*"),
            "app started"
        );

        Self {
            should_quit: false,
            confirmed: false,
            language: Language::from_code(&config.language),
            selection: SelectionWidget::from_config(&config),
            config,
            config_path,
            config_dirty: false,
            layout: LayoutManager::new(),
            theme_manager,
            filesystem: FileSystem::new(),
            session: DialogSession::new(),
            selected_index: 0,
            dialog: None,
            pointer: PointerRouter::new(),
            toast_message: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        Self::new_for_test_with(Config::default())
    }

    #[cfg(test)]
    pub(crate) fn new_for_test_with(config: Config) -> Self {
        let mut app = Self::new(config, None);
        app.layout.update(ratatui::layout::Rect::new(0, 0, 100, 30));
        app
    }

    pub fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 종료 (언어/테마가 바뀌었으면 설정 파일에 그 두 항목만 저장)
    pub fn quit(&mut self) {
        if self.config_dirty {
            if let Some(path) = &self.config_path {
                let saved =
                    Config::save_preferences(path, &self.config.language, &self.config.theme);
                match saved {
                    Ok(()) => info!(path = %path.display(), "config saved"),
                    Err(err) => warn!(%err, "failed to save config"),
                }
            }
            self.config_dirty = false;
        }
        self.should_quit = true;
    }

    /// 선택 확정 후 종료
    pub fn confirm_and_quit(&mut self) {
        self.confirmed = true;
        self.quit();
    }

    /// 선택된 파일의 원본 경로 (알 수 없는 항목은 이름)
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.selection
            .files()
            .iter()
            .map(|handle| {
                handle
                    .source()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(&handle.name))
            })
            .collect()
    }

    /// 선택 다이얼로그 영역 (렌더링과 hit-test가 같은 값을 씀)
    pub fn dialog_areas(&self) -> DialogAreas {
        self.layout.dialog_areas(self.session.report().is_some())
    }

    /// 세션 열기
    pub fn open_session(&mut self) {
        self.session.open();
        self.clamp_cursor();
    }

    /// 세션 닫기 (드래그 상태만 정리, 선택은 유지)
    pub fn close_session(&mut self) {
        self.session.close();
        self.after_session_closed();
    }

    fn after_session_closed(&mut self) {
        self.selection.hide();
        self.pointer.reset();
        self.dialog = None;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.selection.set_enabled(enabled);
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.config.language = self.language.code().to_string();
        self.config_dirty = true;
    }

    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        self.config.theme = self.theme_manager.current_name().to_string();
        self.config_dirty = true;
    }

    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.selection.files().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests;
