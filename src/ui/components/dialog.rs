//! 보조 다이얼로그 (경로 입력, 메시지)
//!
//! 선택 다이얼로그 위에 겹쳐 표시되는 작은 모달 위젯

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

/// 다이얼로그 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// 경로 입력 다이얼로그 (pick)
    PickInput {
        title: String,
        prompt: String,
        value: String,
        cursor_pos: usize,
        selected_button: usize, // 0: OK, 1: Cancel
    },
    /// 메시지 다이얼로그 (정보 표시)
    Message { title: String, message: String },
}

impl DialogKind {
    /// 새 입력 다이얼로그 생성
    pub fn pick_input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        initial: impl Into<String>,
    ) -> Self {
        let value: String = initial.into();
        let cursor_pos = value.len();
        DialogKind::PickInput {
            title: title.into(),
            prompt: prompt.into(),
            value,
            cursor_pos,
            selected_button: 0,
        }
    }

    /// 새 메시지 다이얼로그 생성
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// 다이얼로그 위젯
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    ok_label: &'a str,
    cancel_label: &'a str,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            ok_label: "OK",
            cancel_label: "Cancel",
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
        }
    }

    /// 버튼 레이블 설정
    pub fn labels(mut self, ok: &'a str, cancel: &'a str) -> Self {
        self.ok_label = ok;
        self.cancel_label = cancel;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.border_active.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.command_bar_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.list_selected_bg.to_color();
        self.button_selected_fg = theme.list_selected.to_color();
        self.input_bg = theme.command_bar_bg.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    pub fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::PickInput { .. } => (60u16.min(sw.saturating_sub(4)).max(30), 7u16),
            DialogKind::Message { message, .. } => {
                let lines = message.lines().count().max(1);
                let w = 50u16.min(sw.saturating_sub(4)).max(30);
                let h = (6 + lines as u16).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(4));

        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn frame(&self, buf: &mut Buffer, area: Rect, title: &str) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(&self, buf: &mut Buffer, x: u16, y: u16, label: &str, is_selected: bool) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };

        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        buf.set_string(x, y, &padded_label, Style::default().fg(fg).bg(bg));

        // Wide character(한글 등) continuation cell의 배경색 보정
        for i in 0..width {
            if let Some(cell) = buf.cell_mut((x + i, y)) {
                cell.set_bg(bg);
            }
        }

        width
    }

    #[allow(clippy::too_many_arguments)]
    fn render_input(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        prompt: &str,
        value: &str,
        cursor_pos: usize,
        selected_button: usize,
    ) {
        self.frame(buf, area, title);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        };
        if inner.width < 3 || inner.height < 4 {
            return;
        }

        buf.set_string(inner.x, inner.y, prompt, Style::default().fg(self.fg_color));

        // 입력 필드 배경
        let input_y = inner.y + 1;
        for x in inner.x..inner.x + inner.width {
            if let Some(cell) = buf.cell_mut((x, input_y)) {
                cell.set_bg(self.input_bg);
            }
        }

        let max_display = inner.width as usize - 2;
        let (display_value, cursor_col) = visible_window(value, cursor_pos, max_display);
        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        buf.set_string(inner.x + 1, input_y, display_value, value_style);

        // 커서 표시
        let cursor_x = inner.x + 1 + cursor_col as u16;
        if cursor_x < inner.x + inner.width - 1 {
            if let Some(cell) = buf.cell_mut((cursor_x, input_y)) {
                if cursor_pos < value.len() {
                    cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                } else {
                    cell.set_char('▏');
                    cell.set_style(Style::default().fg(self.fg_color).bg(self.input_bg));
                }
            }
        }

        let button_y = inner.y + 3;
        let ok_width = self.render_button(buf, inner.x, button_y, self.ok_label, selected_button == 0);
        self.render_button(
            buf,
            inner.x + ok_width + 2,
            button_y,
            self.cancel_label,
            selected_button == 1,
        );
    }

    fn render_message(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str) {
        self.frame(buf, area, title);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
        };

        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        if area.height >= 3 && area.width >= 6 {
            let button_y = area.y + area.height - 2;
            let button_x = area.x + (area.width - 6) / 2;
            self.render_button(buf, button_x, button_y, self.ok_label, true);
        }
    }
}

/// 커서가 보이도록 입력값의 표시 구간 결정
///
/// `cursor_pos`는 바이트 인덱스, 반환하는 커서 열은 표시 너비 기준.
fn visible_window(value: &str, cursor_pos: usize, max_display: usize) -> (&str, usize) {
    let cursor_col: usize = value[..cursor_pos]
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();

    if value.width() <= max_display || cursor_col < max_display {
        return (value, cursor_col);
    }

    // 커서가 오른쪽 끝에 오도록 스크롤
    let target_start_width = cursor_col.saturating_sub(max_display.saturating_sub(1));
    let mut start_byte = 0;
    let mut width_sum = 0;
    for (i, c) in value.char_indices() {
        if width_sum >= target_start_width {
            start_byte = i;
            break;
        }
        width_sum += UnicodeWidthChar::width(c).unwrap_or(0);
    }
    (&value[start_byte..], cursor_col - width_sum)
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::PickInput {
                title,
                prompt,
                value,
                cursor_pos,
                selected_button,
            } => self.render_input(
                buf,
                dialog_area,
                title,
                prompt,
                value,
                *cursor_pos,
                *selected_button,
            ),
            DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message)
            }
        }
    }
}
