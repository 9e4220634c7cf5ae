// Layout system - 메인 화면과 선택 다이얼로그 영역 계산
//
// 터미널 크기에 따른 레이아웃 모드:
// - 40x12 이상: 일반 모드
// - 그보다 작으면: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// 다이얼로그 크기 (터미널 대비 비율)
const DIALOG_WIDTH_PERCENT: u16 = 80;
const DIALOG_HEIGHT_PERCENT: u16 = 75;
const DIALOG_MAX_WIDTH: u16 = 100;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 메인 화면 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 상단 제목 줄
    pub header: Rect,
    /// 드롭 영역 + 선택 목록
    pub body: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 선택 다이얼로그 영역
///
/// `list`는 항상 `drop_zone` 안에 포함된다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogAreas {
    /// 테두리를 포함한 다이얼로그 전체
    pub frame: Rect,
    /// 중복 경고 배너 (없으면 높이 0)
    pub warning: Rect,
    /// 드롭 대상 영역
    pub drop_zone: Rect,
    /// 드롭 영역 안쪽의 선택 목록
    pub list: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub terminal_size: (u16, u16),
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = match self.state.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_main_areas(area),
        };
    }

    fn calculate_main_areas(area: Rect) -> LayoutAreas {
        // 제목 | 본문 | 상태바 | 커맨드바
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
            command_bar: chunks[3],
            warning: Rect::default(),
        }
    }

    /// 선택 다이얼로그 영역 계산
    pub fn dialog_areas(&self, has_warning: bool) -> DialogAreas {
        let (width, height) = self.state.terminal_size;
        compute_dialog_areas(Rect::new(0, 0, width, height), has_warning)
    }

    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.state.mode, LayoutMode::TooSmall)
    }
}

/// 화면 중앙에 다이얼로그 배치 후 내부 영역 분할
pub fn compute_dialog_areas(screen: Rect, has_warning: bool) -> DialogAreas {
    let width = (screen.width * DIALOG_WIDTH_PERCENT / 100)
        .min(DIALOG_MAX_WIDTH)
        .max(MIN_WIDTH.min(screen.width));
    let height = (screen.height * DIALOG_HEIGHT_PERCENT / 100).max(MIN_HEIGHT.min(screen.height));
    let frame = centered_rect(screen, width, height);

    // 테두리 안쪽
    let inner = Rect {
        x: frame.x.saturating_add(1),
        y: frame.y.saturating_add(1),
        width: frame.width.saturating_sub(2),
        height: frame.height.saturating_sub(2),
    };

    let warning_height = if has_warning { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(warning_height), Constraint::Min(3)])
        .split(inner);

    let drop_zone = chunks[1];
    // 드롭 영역 테두리와 안내 문구 한 줄을 제외한 나머지가 목록
    let list = Rect {
        x: drop_zone.x.saturating_add(1),
        y: drop_zone.y.saturating_add(2),
        width: drop_zone.width.saturating_sub(2),
        height: drop_zone.height.saturating_sub(3),
    };

    DialogAreas {
        frame,
        warning: chunks[0],
        drop_zone,
        list,
    }
}

/// 주어진 크기의 사각형을 영역 중앙에 배치
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
