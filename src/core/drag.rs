//! 드래그 깊이 추적기
//!
//! 중첩된 하위 영역마다 enter/leave가 따로 들어오므로 hover 여부를
//! enter/leave 한 쌍으로 판단하지 않는다. 깊이 카운터가 0↔1 경계를
//! 넘을 때만 `is_over`가 바뀐다.

use tracing::trace;

/// 드래그 이벤트 (호스트가 정규화해서 전달)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

/// 드래그 중 호스트에 알릴 드롭 효과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// 드롭 가능 (복사)
    Copy,
    /// 드롭 불가 (비활성 위젯)
    None,
}

/// 드롭 대상 하나의 드래그 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDepthTracker {
    depth: u32,
    enabled: bool,
}

impl Default for DragDepthTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragDepthTracker {
    /// 활성 상태, 깊이 0으로 생성
    pub fn new() -> Self {
        Self {
            depth: 0,
            enabled: true,
        }
    }

    /// 현재 깊이
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// 무언가 드래그되어 영역 위에 있는지
    pub fn is_over(&self) -> bool {
        self.depth > 0
    }

    /// 활성 여부
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 활성/비활성 전환 (비활성화 시 깊이 초기화)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    /// 깊이 초기화 (위젯이 숨겨질 때)
    pub fn reset(&mut self) {
        if self.depth != 0 {
            trace!(from = self.depth, "drag depth reset");
        }
        self.depth = 0;
    }

    /// 드래그 진입
    pub fn on_enter(&mut self) {
        if !self.enabled {
            return;
        }
        self.depth = self.depth.saturating_add(1);
        trace!(depth = self.depth, "drag enter");
    }

    /// 드래그 이탈 (0 미만으로 내려가지 않음)
    pub fn on_leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        trace!(depth = self.depth, "drag leave");
    }

    /// 영역 위에서 계속 이동 중 (상태 변화 없음)
    pub fn on_drag_over(&self) -> DropEffect {
        if self.enabled {
            DropEffect::Copy
        } else {
            DropEffect::None
        }
    }

    /// 드롭: 이전 깊이와 무관하게 0으로
    ///
    /// 활성 상태면 `true`를 반환하며, 이때만 드롭된 파일을 처리한다.
    pub fn on_drop(&mut self) -> bool {
        self.reset();
        self.enabled
    }

    /// 이벤트 하나 적용 후 `is_over` 반환
    pub fn apply(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Enter => self.on_enter(),
            DragEvent::Over => {
                self.on_drag_over();
            }
            DragEvent::Leave => self.on_leave(),
            DragEvent::Drop => {
                self.on_drop();
            }
        }
        self.is_over()
    }
}
