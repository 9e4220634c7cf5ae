// Drop zone component - 드롭 대상 영역
//
// 테두리 색상으로 상태 표시:
// - hover 중: 강조색
// - 비활성: 흐린 색
// - 그 외: 기본 테두리

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// 드롭 영역 표시 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneStatus {
    #[default]
    Idle,
    Over,
    Disabled,
}

impl DropZoneStatus {
    pub fn from_flags(enabled: bool, is_over: bool) -> Self {
        if !enabled {
            DropZoneStatus::Disabled
        } else if is_over {
            DropZoneStatus::Over
        } else {
            DropZoneStatus::Idle
        }
    }
}

/// 드롭 영역 컴포넌트 (테두리 + 안내 한 줄)
pub struct DropZone<'a> {
    title: &'a str,
    hint: &'a str,
    status: DropZoneStatus,
    border_color: Color,
    active_border_color: Color,
    disabled_border_color: Color,
    fg_color: Color,
    dim_color: Color,
    bg_color: Color,
}

impl<'a> DropZone<'a> {
    pub fn new() -> Self {
        Self {
            title: "",
            hint: "",
            status: DropZoneStatus::Idle,
            border_color: Color::Rgb(60, 60, 60),
            active_border_color: Color::Rgb(0, 120, 212),
            disabled_border_color: Color::Rgb(42, 42, 42),
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(128, 128, 128),
            bg_color: Color::Rgb(30, 30, 30),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    pub fn status(mut self, status: DropZoneStatus) -> Self {
        self.status = status;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.border.to_color();
        self.active_border_color = theme.border_active.to_color();
        self.disabled_border_color = theme.border_disabled.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.dim_color = theme.fg_dim.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self
    }

    /// 상태별 테두리 색상
    pub fn border_color(&self) -> Color {
        match self.status {
            DropZoneStatus::Idle => self.border_color,
            DropZoneStatus::Over => self.active_border_color,
            DropZoneStatus::Disabled => self.disabled_border_color,
        }
    }
}

impl Default for DropZone<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DropZone<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let border_type = match self.status {
            DropZoneStatus::Over => BorderType::Thick,
            _ => BorderType::Rounded,
        };
        let title_style = match self.status {
            DropZoneStatus::Disabled => Style::default().fg(self.dim_color),
            _ => Style::default().fg(self.fg_color).add_modifier(Modifier::BOLD),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(self.title, title_style))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        let hint_style = match self.status {
            DropZoneStatus::Over => Style::default()
                .fg(self.active_border_color)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(self.dim_color),
        };
        Paragraph::new(Span::styled(self.hint, hint_style))
            .alignment(Alignment::Center)
            .render(Rect { height: 1, ..inner }, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_flags() {
        assert_eq!(DropZoneStatus::from_flags(true, false), DropZoneStatus::Idle);
        assert_eq!(DropZoneStatus::from_flags(true, true), DropZoneStatus::Over);
        // 비활성이 hover보다 우선
        assert_eq!(DropZoneStatus::from_flags(false, true), DropZoneStatus::Disabled);
    }

    #[test]
    fn test_border_color_follows_status() {
        let theme = Theme::dark();
        let zone = DropZone::new().theme(&theme);
        assert_eq!(zone.border_color(), theme.border.to_color());

        let zone = DropZone::new().theme(&theme).status(DropZoneStatus::Over);
        assert_eq!(zone.border_color(), theme.border_active.to_color());

        let zone = DropZone::new().theme(&theme).status(DropZoneStatus::Disabled);
        assert_eq!(zone.border_color(), theme.border_disabled.to_color());
    }

    #[test]
    fn test_render_hint_inside_border() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        DropZone::new().hint("Drop here").render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Drop here"));
        assert_eq!(buf[(0, 0)].symbol(), "╭");
    }
}
