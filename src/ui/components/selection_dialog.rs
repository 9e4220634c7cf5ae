// Selection dialog component - 파일 선택 모달
//
// 중복 경고 배너 | 드롭 영역 (안쪽에 선택 목록)

use crate::models::FileHandle;
use crate::ui::components::drop_zone::{DropZone, DropZoneStatus};
use crate::ui::components::file_list::FileList;
use crate::ui::components::warning::DuplicateBanner;
use crate::ui::layout::DialogAreas;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};

/// 다이얼로그에 표시되는 문구 모음
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionDialogText<'a> {
    pub title: &'a str,
    pub zone_title: &'a str,
    pub hint: &'a str,
    pub empty: &'a str,
    pub dismiss: &'a str,
    pub headers: [&'a str; 3],
}

/// 선택 다이얼로그 컴포넌트
pub struct SelectionDialog<'a> {
    areas: &'a DialogAreas,
    files: &'a [FileHandle],
    selected_index: Option<usize>,
    status: DropZoneStatus,
    report: Option<&'a str>,
    text: SelectionDialogText<'a>,
    theme: Option<&'a Theme>,
}

impl<'a> SelectionDialog<'a> {
    pub fn new(areas: &'a DialogAreas, files: &'a [FileHandle]) -> Self {
        Self {
            areas,
            files,
            selected_index: None,
            status: DropZoneStatus::Idle,
            report: None,
            text: SelectionDialogText::default(),
            theme: None,
        }
    }

    pub fn selected_index(mut self, index: Option<usize>) -> Self {
        self.selected_index = index;
        self
    }

    pub fn status(mut self, status: DropZoneStatus) -> Self {
        self.status = status;
        self
    }

    /// 중복 경고 문구 (없으면 배너 생략)
    pub fn report(mut self, report: Option<&'a str>) -> Self {
        self.report = report;
        self
    }

    pub fn text(mut self, text: SelectionDialogText<'a>) -> Self {
        self.text = text;
        self
    }

    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

impl Widget for SelectionDialog<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let areas = self.areas;
        if areas.frame.width < 4 || areas.frame.height < 4 {
            return;
        }
        Clear.render(areas.frame, buf);

        let mut block = Block::default().borders(Borders::ALL);
        if let Some(theme) = self.theme {
            block = block
                .border_style(Style::default().fg(theme.border_active.to_color()))
                .style(Style::default().bg(theme.bg_primary.to_color()))
                .title(Span::styled(
                    self.text.title,
                    Style::default()
                        .fg(theme.accent.to_color())
                        .add_modifier(Modifier::BOLD),
                ));
        } else {
            block = block.title(self.text.title);
        }
        block.render(areas.frame, buf);

        if let Some(message) = self.report {
            let mut banner = DuplicateBanner::new(message).dismiss_hint(self.text.dismiss);
            if let Some(theme) = self.theme {
                banner = banner.theme(theme);
            }
            banner.render(areas.warning, buf);
        }

        let mut zone = DropZone::new()
            .title(self.text.zone_title)
            .hint(self.text.hint)
            .status(self.status);
        let [name, size, modified] = self.text.headers;
        let mut list = FileList::new(self.files)
            .selected_index(self.selected_index)
            .empty_text(self.text.empty)
            .headers(name, size, modified)
            .dimmed(self.status == DropZoneStatus::Disabled);
        if let Some(theme) = self.theme {
            zone = zone.theme(theme);
            list = list.theme(theme);
        }
        zone.render(areas.drop_zone, buf);
        list.render(areas.list, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::compute_dialog_areas;

    fn rendered(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_with_report_banner() {
        let screen = Rect::new(0, 0, 80, 24);
        let areas = compute_dialog_areas(screen, true);
        let files = vec![FileHandle::new("a.csv", 10, 0)];
        let mut buf = Buffer::empty(screen);

        SelectionDialog::new(&areas, &files)
            .report(Some("1 duplicate file skipped: A.CSV"))
            .text(SelectionDialogText {
                title: " Add files ",
                hint: "Drop files here",
                dismiss: "x:Dismiss",
                headers: ["Name", "Size", "Modified"],
                ..Default::default()
            })
            .render(screen, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("Add files"));
        assert!(text.contains("1 duplicate file skipped: A.CSV"));
        assert!(text.contains("Drop files here"));
        assert!(text.contains("a.csv"));
    }

    #[test]
    fn test_render_without_report() {
        let screen = Rect::new(0, 0, 80, 24);
        let areas = compute_dialog_areas(screen, false);
        let mut buf = Buffer::empty(screen);

        SelectionDialog::new(&areas, &[])
            .text(SelectionDialogText {
                empty: "No files selected",
                dismiss: "x:Dismiss",
                ..Default::default()
            })
            .render(screen, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("No files selected"));
        assert!(!text.contains("x:Dismiss"));
    }
}
