// File list component - 선택된 파일 목록
//
// 이름 | 크기 | 수정일 열, 커서 강조, 스크롤바

use crate::models::FileHandle;
use crate::ui::Theme;
use crate::utils::formatter::{format_file_size, format_timestamp};
use crate::utils::path_display::truncate_file_name;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

const SIZE_WIDTH: usize = 10;
const DATE_WIDTH: usize = 16;
const COLUMN_GAP: usize = 2;

/// 열 너비 계산 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub size: usize,
    pub date: usize,
}

/// 파일 목록 컴포넌트
pub struct FileList<'a> {
    files: &'a [FileHandle],
    /// 커서 위치
    selected_index: Option<usize>,
    /// 헤더 레이블 (이름, 크기, 수정일)
    headers: [&'a str; 3],
    /// 비었을 때 문구
    empty_text: &'a str,
    /// 비활성이면 흐리게 표시
    dimmed: bool,
    fg_color: Color,
    dim_color: Color,
    selected_fg: Color,
    selected_bg: Color,
    header_color: Color,
}

impl<'a> FileList<'a> {
    pub fn new(files: &'a [FileHandle]) -> Self {
        Self {
            files,
            selected_index: None,
            headers: ["Name", "Size", "Modified"],
            empty_text: "",
            dimmed: false,
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(128, 128, 128),
            selected_fg: Color::White,
            selected_bg: Color::Rgb(0, 120, 212),
            header_color: Color::Rgb(0, 120, 212),
        }
    }

    pub fn selected_index(mut self, index: Option<usize>) -> Self {
        self.selected_index = index;
        self
    }

    pub fn headers(mut self, name: &'a str, size: &'a str, modified: &'a str) -> Self {
        self.headers = [name, size, modified];
        self
    }

    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.list_normal.to_color();
        self.dim_color = theme.fg_dim.to_color();
        self.selected_fg = theme.list_selected.to_color();
        self.selected_bg = theme.list_selected_bg.to_color();
        self.header_color = theme.accent.to_color();
        self
    }

    /// 너비에 맞춰 열 배치 (좁으면 수정일 → 크기 순으로 생략)
    pub fn calculate_column_layout(width: usize) -> ColumnLayout {
        let full = SIZE_WIDTH + DATE_WIDTH + COLUMN_GAP * 2;
        let size_only = SIZE_WIDTH + COLUMN_GAP;
        if width >= full + 12 {
            ColumnLayout {
                name: width - full,
                size: SIZE_WIDTH,
                date: DATE_WIDTH,
            }
        } else if width >= size_only + 8 {
            ColumnLayout {
                name: width - size_only,
                size: SIZE_WIDTH,
                date: 0,
            }
        } else {
            ColumnLayout {
                name: width,
                size: 0,
                date: 0,
            }
        }
    }

    /// 커서가 보이도록 스크롤 시작 위치 계산
    pub fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
        match selected {
            Some(index) if visible_rows > 0 && index >= visible_rows => index + 1 - visible_rows,
            _ => 0,
        }
    }

    fn format_row(handle: &FileHandle, layout: &ColumnLayout) -> String {
        let name = truncate_file_name(&handle.name, layout.name);
        let mut row = format!("{}{}", name, " ".repeat(layout.name.saturating_sub(name.width())));
        if layout.size > 0 {
            row.push_str(&" ".repeat(COLUMN_GAP));
            row.push_str(&format!("{:>width$}", format_file_size(handle.size), width = layout.size));
        }
        if layout.date > 0 {
            row.push_str(&" ".repeat(COLUMN_GAP));
            row.push_str(&format!("{:>width$}", format_timestamp(handle.last_modified), width = layout.date));
        }
        row
    }

    fn format_header(&self, layout: &ColumnLayout) -> String {
        let [name, size, date] = self.headers;
        let mut row = format!("{}{}", name, " ".repeat(layout.name.saturating_sub(name.width())));
        if layout.size > 0 {
            row.push_str(&" ".repeat(COLUMN_GAP));
            row.push_str(&" ".repeat(layout.size.saturating_sub(size.width())));
            row.push_str(size);
        }
        if layout.date > 0 {
            row.push_str(&" ".repeat(COLUMN_GAP));
            row.push_str(&" ".repeat(layout.date.saturating_sub(date.width())));
            row.push_str(date);
        }
        row
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text_color = if self.dimmed { self.dim_color } else { self.fg_color };

        if self.files.is_empty() {
            let style = Style::default().fg(self.dim_color).add_modifier(Modifier::ITALIC);
            buf.set_stringn(area.x, area.y, self.empty_text, area.width as usize, style);
            return;
        }

        let rows = (area.height as usize).saturating_sub(1);
        let has_scrollbar = self.files.len() > rows;
        let list_width = (area.width as usize).saturating_sub(usize::from(has_scrollbar));
        let layout = Self::calculate_column_layout(list_width);

        let header_style = Style::default()
            .fg(self.header_color)
            .add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x, area.y, self.format_header(&layout), list_width, header_style);

        let offset = Self::scroll_offset(self.selected_index, rows);
        for (i, handle) in self.files.iter().skip(offset).take(rows).enumerate() {
            let index = offset + i;
            let y = area.y + 1 + i as u16;
            let style = if Some(index) == self.selected_index {
                Style::default().fg(self.selected_fg).bg(self.selected_bg)
            } else {
                Style::default().fg(text_color)
            };
            let row = Self::format_row(handle, &layout);
            buf.set_stringn(area.x, y, &row, list_width, style);
        }

        if has_scrollbar && rows > 0 {
            let total = self.files.len();
            let thumb_height = (rows * rows / total).max(1);
            let max_scroll = total.saturating_sub(rows);
            let thumb_pos = if max_scroll == 0 {
                0
            } else {
                offset * rows.saturating_sub(thumb_height) / max_scroll
            };
            let x = area.x + area.width - 1;
            for i in 0..rows {
                let (symbol, color) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                    ("┃", self.fg_color)
                } else {
                    ("│", self.dim_color)
                };
                buf.set_string(x, area.y + 1 + i as u16, symbol, Style::default().fg(color));
            }
        }
    }
}
