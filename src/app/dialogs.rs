use super::text_edit::TextBufferEdit;
use super::*;
use crate::ui::{MessageKey, TextKey};

impl App {
    // === 경로 입력 다이얼로그 ===

    /// 경로 입력 다이얼로그 열기 (세션이 닫혀 있으면 먼저 연다)
    pub fn open_pick_input(&mut self) {
        if !self.selection.is_enabled() {
            self.set_toast(self.i18n().tr(TextKey::DropHintDisabled));
            return;
        }
        if !self.session.is_open() {
            self.open_session();
        }
        let i18n = self.i18n();
        self.dialog = Some(DialogKind::pick_input(
            i18n.tr(TextKey::PickTitle),
            i18n.tr(TextKey::PickPrompt),
            "",
        ));
    }

    /// 보조 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn is_pick_input_open(&self) -> bool {
        matches!(self.dialog, Some(DialogKind::PickInput { .. }))
    }

    fn with_pick_input(&mut self, edit: impl FnOnce(&mut String, &mut usize)) {
        if let Some(DialogKind::PickInput {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            edit(value, cursor_pos);
        }
    }

    pub fn dialog_input_char(&mut self, c: char) {
        self.with_pick_input(|value, cursor| TextBufferEdit::insert_char(value, cursor, c));
    }

    pub fn dialog_input_str(&mut self, text: &str) {
        self.with_pick_input(|value, cursor| TextBufferEdit::insert_str(value, cursor, text));
    }

    pub fn dialog_input_backspace(&mut self) {
        self.with_pick_input(TextBufferEdit::backspace);
    }

    pub fn dialog_input_delete(&mut self) {
        self.with_pick_input(TextBufferEdit::delete);
    }

    /// 이전 경로 조각 삭제 (Ctrl+W)
    pub fn dialog_input_delete_prev_segment(&mut self) {
        self.with_pick_input(TextBufferEdit::delete_prev_segment);
    }

    pub fn dialog_input_left(&mut self) {
        self.with_pick_input(|value, cursor| TextBufferEdit::left(value, cursor));
    }

    pub fn dialog_input_right(&mut self) {
        self.with_pick_input(|value, cursor| TextBufferEdit::right(value, cursor));
    }

    pub fn dialog_input_home(&mut self) {
        self.with_pick_input(|_, cursor| TextBufferEdit::home(cursor));
    }

    pub fn dialog_input_end(&mut self) {
        self.with_pick_input(|value, cursor| TextBufferEdit::end(value, cursor));
    }

    /// OK / Cancel 버튼 전환 (Tab)
    pub fn dialog_input_toggle_button(&mut self) {
        if let Some(DialogKind::PickInput {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    /// Enter: 선택된 버튼에 따라 확정 또는 취소
    pub fn dialog_input_submit(&mut self) {
        let Some(DialogKind::PickInput {
            value,
            selected_button,
            ..
        }) = self.dialog.take()
        else {
            return;
        };
        if selected_button == 0 {
            self.confirm_pick(&value);
        }
    }

    /// 입력된 경로들을 선택에 반영
    ///
    /// 여러 경로는 공백으로 구분하며 셸 인용 규칙을 따른다.
    pub fn confirm_pick(&mut self, value: &str) {
        let paths = self.filesystem.parse_drop_payload(value);
        if paths.is_empty() || !self.selection.is_enabled() {
            return;
        }
        let handles = self.filesystem.handles_for(&paths);
        if handles.is_empty() {
            let i18n = self.i18n();
            let shown = paths[0].display().to_string();
            let message = i18n.fmt(MessageKey::PathNotFound, &[("path", shown.as_str())]);
            self.dialog = Some(DialogKind::message(i18n.tr(TextKey::PickTitle), message));
            return;
        }

        match &mut self.selection {
            SelectionWidget::Multi(multi) => {
                let outcome = self.session.add_files(multi, handles);
                self.report_added(outcome.added.len(), outcome.duplicates.len());
            }
            SelectionWidget::Single(single) => {
                let accepted = single.accept().filter(handles).into_iter().next();
                match accepted {
                    Some(handle) => {
                        single.pick(handle);
                        self.report_added(1, 0);
                    }
                    None => self.report_added(0, 0),
                }
            }
        }
        self.clamp_cursor();
    }

    /// 추가 결과 토스트 (중복만 있었으면 경고 배너가 대신 보임)
    pub(super) fn report_added(&mut self, added: usize, duplicates: usize) {
        let i18n = self.i18n();
        let message = if added > 0 {
            i18n.fmt(MessageKey::FilesAdded, &[("count", added.to_string().as_str())])
        } else if duplicates > 0 {
            return;
        } else {
            let accept = self
                .selection
                .accept()
                .describe()
                .unwrap_or_else(|| i18n.tr(TextKey::AcceptAll).to_string());
            i18n.fmt(MessageKey::NothingAccepted, &[("accept", accept.as_str())])
        };
        self.set_toast(&message);
    }

    /// 메시지 다이얼로그 표시
    pub fn show_message(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    pub fn get_dialog_input_value(&self) -> Option<&str> {
        match &self.dialog {
            Some(DialogKind::PickInput { value, .. }) => Some(value.as_str()),
            _ => None,
        }
    }
}
