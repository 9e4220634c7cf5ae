//! 마우스 드래그 → 드래그 이벤트 라우팅
//!
//! 드롭 영역(`Zone`)과 그 안에 중첩된 목록(`List`)에 대해 hit-test를 하고,
//! 하위 영역 경계를 넘을 때마다 enter/leave를 따로 발생시킨다.
//! 하위 영역의 이벤트는 드롭 영역까지 전파되므로 하나의 드래그 추적기가
//! 중첩 이벤트를 모두 받는다.

use crate::core::drag::DragEvent;
use ratatui::layout::{Position, Rect};

/// hit-test 결과 (가장 안쪽 영역)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Zone,
    List,
}

/// 드롭 영역과 중첩된 목록 영역
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropRegions {
    pub zone: Rect,
    pub list: Rect,
}

impl DropRegions {
    pub fn new(zone: Rect, list: Rect) -> Self {
        Self { zone, list }
    }

    /// 좌표가 속한 가장 안쪽 영역
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitRegion> {
        let position = Position::new(column, row);
        if self.list.contains(position) {
            Some(HitRegion::List)
        } else if self.zone.contains(position) {
            Some(HitRegion::Zone)
        } else {
            None
        }
    }
}

/// 한 번의 마우스 드래그 동작을 추적
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    current: Option<HitRegion>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 포인터가 있는 영역
    pub fn current(&self) -> Option<HitRegion> {
        self.current
    }

    /// 드래그 이동
    pub fn on_drag(&mut self, regions: &DropRegions, column: u16, row: u16) -> Vec<DragEvent> {
        let next = regions.hit_test(column, row);
        let events = transition(self.current, next);
        self.current = next;
        events
    }

    /// 버튼 놓기: 영역 안이면 드롭
    pub fn on_release(&mut self, regions: &DropRegions, column: u16, row: u16) -> Vec<DragEvent> {
        let mut events = self.on_drag(regions, column, row);
        if self.current.take().is_some() {
            events.push(DragEvent::Drop);
        }
        events
    }

    /// 영역이 사라짐 (다이얼로그 닫힘 등)
    pub fn reset(&mut self) {
        self.current = None;
    }
}

fn transition(from: Option<HitRegion>, to: Option<HitRegion>) -> Vec<DragEvent> {
    match (from, to) {
        (None, None) => Vec::new(),
        (None, Some(_)) => vec![DragEvent::Enter],
        (Some(_), None) => vec![DragEvent::Leave],
        (Some(a), Some(b)) if a == b => vec![DragEvent::Over],
        // 부모↔자식 이동: 새 영역의 enter가 이전 영역의 leave보다 먼저
        (Some(_), Some(_)) => vec![DragEvent::Enter, DragEvent::Leave],
    }
}
