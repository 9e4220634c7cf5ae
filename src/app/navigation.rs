use super::*;
use crate::core::actions::Action;
use crate::core::drag::DragEvent;
use crate::ui::{DropRegions, HitRegion, MessageKey, TextKey};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

impl App {
    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::OpenDialog => {
                if !self.session.is_open() {
                    self.open_session();
                }
            }
            Action::CloseDialog => {
                if self.dialog.is_some() {
                    self.close_dialog();
                } else if self.session.on_escape() {
                    self.after_session_closed();
                }
            }
            Action::Confirm => {
                if self.session.is_open() {
                    self.close_session();
                } else {
                    self.confirm_and_quit();
                }
            }
            Action::PickFiles => self.open_pick_input(),
            Action::RemoveSelected => self.remove_selected(),
            Action::RemoveAll => self.remove_all(),
            Action::DismissWarning => self.session.dismiss_report(),
            Action::ToggleEnabled => self.toggle_enabled(),
            Action::MoveUp => self.move_selection_up(),
            Action::MoveDown => self.move_selection_down(),
            Action::ToggleLanguage => {
                self.toggle_language();
                self.set_toast(self.i18n().msg(MessageKey::LanguageChanged));
            }
            Action::CycleTheme => {
                self.cycle_theme();
                let name = self.theme_manager.current_name().to_string();
                let message = self
                    .i18n()
                    .fmt(MessageKey::ThemeChanged, &[("name", name.as_str())]);
                self.set_toast(&message);
            }
        }
    }

    // === 목록 커서 ===

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.selection.files().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    // === 선택 편집 ===

    /// 커서 위치의 파일 제거
    pub fn remove_selected(&mut self) {
        let Some(handle) = self.selection.files().get(self.selected_index).cloned() else {
            return;
        };
        let removed = match &mut self.selection {
            SelectionWidget::Multi(multi) => {
                self.session.remove_one(multi, &handle.display_key())
            }
            SelectionWidget::Single(single) => {
                let enabled = single.is_enabled();
                single.clear();
                enabled
            }
        };
        if removed {
            let message = self
                .i18n()
                .fmt(MessageKey::Removed, &[("name", handle.name.as_str())]);
            self.set_toast(&message);
        }
        self.clamp_cursor();
    }

    /// 모두 제거
    pub fn remove_all(&mut self) {
        if !self.selection.is_enabled() || self.selection.files().is_empty() {
            return;
        }
        match &mut self.selection {
            SelectionWidget::Multi(multi) => self.session.remove_all(multi),
            SelectionWidget::Single(single) => single.clear(),
        }
        self.set_toast(self.i18n().msg(MessageKey::RemovedAll));
        self.clamp_cursor();
    }

    /// 드롭 대상 활성/비활성 전환
    pub fn toggle_enabled(&mut self) {
        let enabled = !self.selection.is_enabled();
        self.set_enabled(enabled);
        if !enabled {
            self.pointer.reset();
        }
        let key = if enabled {
            MessageKey::TargetEnabled
        } else {
            MessageKey::TargetDisabled
        };
        self.set_toast(self.i18n().msg(key));
    }

    // === 드래그 & 드롭 ===

    /// 드래그 이벤트를 선택 위젯에 전달 (드롭은 `incoming`을 추가)
    pub fn apply_drag_event(&mut self, event: DragEvent, incoming: Vec<FileHandle>) {
        match event {
            DragEvent::Enter => self.selection.drag_enter(),
            DragEvent::Over => {
                let effect = self.selection.drag_over();
                debug!(?effect, "drag over");
            }
            DragEvent::Leave => self.selection.drag_leave(),
            DragEvent::Drop => self.drop_into_selection(incoming),
        }
    }

    fn drop_into_selection(&mut self, incoming: Vec<FileHandle>) {
        let offered = incoming.len();
        let enabled = self.selection.is_enabled();
        let (added, duplicates) = match &mut self.selection {
            SelectionWidget::Multi(multi) => {
                let outcome = self.session.drop_files(multi, incoming);
                (outcome.added.len(), outcome.duplicates.len())
            }
            SelectionWidget::Single(single) => (usize::from(single.drop_files(incoming)), 0),
        };
        if offered > 0 && enabled {
            self.report_added(added, duplicates);
        }
        self.clamp_cursor();
    }

    /// 터미널 드롭 (bracketed paste)
    ///
    /// 경로 입력 중이면 입력란에 넣고, 아니면 세션을 열고 enter → drop 순서로 전달한다.
    pub fn handle_paste(&mut self, text: &str) {
        if self.is_pick_input_open() {
            self.dialog_input_str(text);
            return;
        }
        if self.dialog.is_some() {
            self.close_dialog();
        }

        let paths = self.filesystem.parse_drop_payload(text);
        if paths.is_empty() {
            return;
        }
        let handles = self.filesystem.handles_for(&paths);
        if handles.is_empty() {
            let shown = paths[0].display().to_string();
            let message = self
                .i18n()
                .fmt(MessageKey::PathNotFound, &[("path", shown.as_str())]);
            self.set_toast(&message);
            return;
        }

        if !self.session.is_open() {
            self.open_session();
        }
        if !self.selection.is_enabled() {
            self.set_toast(self.i18n().tr(TextKey::DropHintDisabled));
        }
        info!(paths = paths.len(), files = handles.len(), "drop received");
        self.apply_drag_event(DragEvent::Enter, Vec::new());
        self.apply_drag_event(DragEvent::Drop, handles);
    }

    /// 드롭 영역 (열린 선택 다이얼로그 기준)
    pub fn drop_regions(&self) -> DropRegions {
        let areas = self.dialog_areas();
        DropRegions::new(areas.drop_zone, areas.list)
    }

    /// 마우스 입력 처리 (선택 다이얼로그가 열려 있을 때만)
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if !self.session.is_open() || self.dialog.is_some() {
            return;
        }
        let regions = self.drop_regions();
        let (column, row) = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let frame = self.dialog_areas().frame;
                if !frame.contains(ratatui::layout::Position::new(column, row)) {
                    if self.session.on_outside_click() {
                        self.after_session_closed();
                    }
                    return;
                }
                if regions.hit_test(column, row) == Some(HitRegion::List) {
                    self.select_row_at(row);
                }
                for drag in self.pointer.on_drag(&regions, column, row) {
                    self.apply_drag_event(drag, Vec::new());
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                for drag in self.pointer.on_drag(&regions, column, row) {
                    self.apply_drag_event(drag, Vec::new());
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                for drag in self.pointer.on_release(&regions, column, row) {
                    self.apply_drag_event(drag, Vec::new());
                }
            }
            MouseEventKind::ScrollDown => self.move_selection_down(),
            MouseEventKind::ScrollUp => self.move_selection_up(),
            _ => {}
        }
    }

    /// 목록 행 클릭 → 커서 이동 (첫 줄은 헤더)
    fn select_row_at(&mut self, row: u16) {
        let list = self.dialog_areas().list;
        let Some(line) = row.checked_sub(list.y + 1) else {
            return;
        };
        let visible_rows = list.height.saturating_sub(1) as usize;
        let offset =
            crate::ui::FileList::scroll_offset(Some(self.selected_index), visible_rows);
        let index = offset + line as usize;
        if index < self.selection.files().len() {
            self.selected_index = index;
        }
    }

    // === 토스트 ===

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= 3 {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed().as_secs() < 3 {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }

    /// 현재 중복 경고 문구 (현재 언어)
    pub fn duplicate_message(&self) -> Option<String> {
        self.session
            .report()
            .map(|report| self.i18n().duplicate_report(report))
    }
}
