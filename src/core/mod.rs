// Core Layer - 병합 엔진, 드래그 추적기, 액션 레지스트리
pub mod actions;
pub mod drag;
pub mod merge;

pub use drag::{DragDepthTracker, DragEvent, DropEffect};
pub use merge::{merge_with_report, MergeOutcome};
