// Status bar component - 상태바 컴포넌트
//
// 선택된 파일 수, 총 크기, 허용 패턴, 모드/활성 상태 표시

use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 선택된 파일 수
    file_count: usize,
    /// 총 크기 (포맷된 문자열)
    total_size: &'a str,
    /// 허용 패턴 설명
    accept: &'a str,
    /// 일시 메시지 (최근 작업 결과)
    message: Option<&'a str>,
    /// 모드 표시 (SINGLE/MULTI)
    mode: &'a str,
    /// 활성 상태 표시 (ON/OFF)
    enabled_label: &'a str,
    enabled: bool,
    bg_color: Color,
    fg_color: Color,
    message_color: Color,
    disabled_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            file_count: 0,
            total_size: "0 B",
            accept: "",
            message: None,
            mode: "MULTI",
            enabled_label: "ON",
            enabled: true,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            message_color: Color::Yellow,
            disabled_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn total_size(mut self, size: &'a str) -> Self {
        self.total_size = size;
        self
    }

    pub fn accept(mut self, accept: &'a str) -> Self {
        self.accept = accept;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn mode(mut self, mode: &'a str) -> Self {
        self.mode = mode;
        self
    }

    pub fn enabled(mut self, enabled: bool, label: &'a str) -> Self {
        self.enabled = enabled;
        self.enabled_label = label;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.message_color = theme.warning.to_color();
        self.disabled_color = theme.fg_dim.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = format!(
            " {} | {} | {}",
            pluralize(self.file_count, "file", "files"),
            self.total_size,
            self.accept
        );
        let message_info = match self.message {
            Some(message) => format!(" | {}", message),
            None => String::new(),
        };
        let right_info = format!("[{}] [{}] ", self.mode, self.enabled_label);

        let used = left_info.width() + message_info.width() + right_info.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let enabled_color = if self.enabled {
            self.fg_color
        } else {
            self.disabled_color
        };

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(message_info, Style::default().fg(self.message_color)),
            Span::raw(padding),
            Span::styled(right_info, Style::default().fg(enabled_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_creation() {
        let status_bar = StatusBar::new()
            .file_count(3)
            .total_size("1.2 MB")
            .accept(".csv");

        assert_eq!(status_bar.file_count, 3);
        assert_eq!(status_bar.total_size, "1.2 MB");
        assert_eq!(status_bar.accept, ".csv");
    }

    #[test]
    fn test_status_bar_renders_right_info() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .file_count(1)
            .mode("SINGLE")
            .enabled(false, "OFF")
            .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("1 file"));
        assert!(text.trim_end().ends_with("[SINGLE] [OFF]"));
    }
}
