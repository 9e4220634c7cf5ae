// Warning components - 경고 화면 / 중복 경고 배너
//
// 터미널이 너무 작을 때의 경고 화면과,
// 중복 파일을 건너뛰었을 때 다이얼로그 상단에 표시되는 배너

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen<'a> {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    /// 안내 문구
    hint: &'a str,
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
    error_color: Color,
    success_color: Color,
}

impl Default for WarningScreen<'_> {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            hint: "Please resize your terminal",
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            error_color: Color::Red,
            success_color: Color::Green,
        }
    }
}

impl<'a> WarningScreen<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self
    }
}

impl Widget for WarningScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled("⚠", bold(self.warning_color))),
            Line::from(vec![
                Span::styled(
                    format!("{}x{}", self.current_size.0, self.current_size.1),
                    bold(self.error_color),
                ),
                Span::styled(" / ", Style::default().fg(self.fg_color)),
                Span::styled(format!("{}x{}", MIN_WIDTH, MIN_HEIGHT), bold(self.success_color)),
            ]),
            Line::from(Span::styled(
                self.hint,
                Style::default().fg(self.fg_color).add_modifier(Modifier::DIM),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

/// 중복 경고 배너 (한 줄, 닫기 안내 포함)
pub struct DuplicateBanner<'a> {
    message: &'a str,
    dismiss_hint: &'a str,
    fg_color: Color,
    bg_color: Color,
}

impl<'a> DuplicateBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            dismiss_hint: "x:Dismiss",
            fg_color: Color::Black,
            bg_color: Color::Yellow,
        }
    }

    pub fn dismiss_hint(mut self, hint: &'a str) -> Self {
        self.dismiss_hint = hint;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.bg_primary.to_color();
        self.bg_color = theme.warning.to_color();
        self
    }
}

impl Widget for DuplicateBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_style(area, style);

        let hint_width = self.dismiss_hint.width() + 1;
        let message_width = (area.width as usize).saturating_sub(hint_width + 1);
        buf.set_stringn(area.x, area.y, format!(" ⚠ {}", self.message), message_width, style);

        if (area.width as usize) > hint_width {
            let x = area.x + area.width - hint_width as u16;
            buf.set_string(x, area.y, self.dismiss_hint, style.add_modifier(Modifier::BOLD));
        }
    }
}
