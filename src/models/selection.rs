//! 선택 관리자 (단일 파일 / 다중 파일)
//!
//! 허용 패턴, 병합 엔진, 드래그 깊이 추적기를 묶어 선택 상태를 관리한다.
//! 비활성 상태에서는 모든 변경 작업이 무시된다.

use crate::core::drag::{DragDepthTracker, DropEffect};
use crate::core::merge::merge_with_report;
use crate::models::{DuplicateReport, FileCollection, FileHandle};
use crate::utils::keys::DisplayKey;
use crate::utils::AcceptPattern;
use tracing::debug;

/// 파일 추가 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// 실제로 추가된 항목
    pub added: Vec<FileHandle>,
    /// 중복으로 제외된 항목
    pub duplicates: Vec<FileHandle>,
    /// 허용 패턴에 맞지 않아 조용히 제외된 수
    pub filtered_out: usize,
    /// 중복이 있었을 때만 생성되는 보고서
    pub report: Option<DuplicateReport>,
}

impl AddOutcome {
    /// 새로 추가된 항목이 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }
}

/// 다중 파일 선택 관리자
#[derive(Debug, Clone, Default)]
pub struct MultiFileSelection {
    files: FileCollection,
    drag: DragDepthTracker,
    accept: AcceptPattern,
}

impl MultiFileSelection {
    /// 허용 패턴을 지정해 생성
    pub fn new(accept: AcceptPattern) -> Self {
        Self {
            files: FileCollection::new(),
            drag: DragDepthTracker::new(),
            accept,
        }
    }

    /// 선택된 파일 목록
    pub fn files(&self) -> &FileCollection {
        &self.files
    }

    /// 허용 패턴
    pub fn accept(&self) -> &AcceptPattern {
        &self.accept
    }

    /// 드래그 hover 여부
    pub fn is_over(&self) -> bool {
        self.drag.is_over()
    }

    /// 활성 여부
    pub fn is_enabled(&self) -> bool {
        self.drag.is_enabled()
    }

    /// 활성/비활성 전환
    pub fn set_enabled(&mut self, enabled: bool) {
        self.drag.set_enabled(enabled);
    }

    /// 위젯이 숨겨짐 (드래그 상태만 초기화)
    pub fn hide(&mut self) {
        self.drag.reset();
    }

    /// 파일 추가 (필터 → 병합 → 중복 보고서)
    pub fn add_files(&mut self, incoming: Vec<FileHandle>) -> AddOutcome {
        if !self.is_enabled() {
            return AddOutcome::default();
        }

        let offered = incoming.len();
        let candidates = self.accept.filter(incoming);
        let filtered_out = offered - candidates.len();

        let existing = std::mem::take(&mut self.files);
        let outcome = merge_with_report(existing, candidates);
        self.files = outcome.merged;

        let report = DuplicateReport::from_rejected(&outcome.duplicates);
        debug!(
            offered,
            filtered_out,
            added = outcome.added.len(),
            duplicates = outcome.duplicates.len(),
            "add files"
        );

        AddOutcome {
            added: outcome.added,
            duplicates: outcome.duplicates,
            filtered_out,
            report,
        }
    }

    /// 표시 키가 일치하는 항목 제거 (없으면 아무 일도 없음)
    pub fn remove_one(&mut self, key: &DisplayKey) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.files.remove_by_display_key(key).is_some()
    }

    /// 전체 제거
    pub fn remove_all(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.files.clear();
    }

    pub fn drag_enter(&mut self) {
        self.drag.on_enter();
    }

    pub fn drag_over(&self) -> DropEffect {
        self.drag.on_drag_over()
    }

    pub fn drag_leave(&mut self) {
        self.drag.on_leave();
    }

    /// 드롭: 드래그 상태를 끝내고 활성 상태면 파일 추가
    pub fn drop_files(&mut self, incoming: Vec<FileHandle>) -> AddOutcome {
        if self.drag.on_drop() {
            self.add_files(incoming)
        } else {
            AddOutcome::default()
        }
    }
}

/// 단일 파일 선택 관리자
#[derive(Debug, Clone, Default)]
pub struct SingleFileSelection {
    file: Option<FileHandle>,
    drag: DragDepthTracker,
    accept: AcceptPattern,
}

impl SingleFileSelection {
    /// 허용 패턴을 지정해 생성
    pub fn new(accept: AcceptPattern) -> Self {
        Self {
            file: None,
            drag: DragDepthTracker::new(),
            accept,
        }
    }

    /// 선택된 파일
    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    /// 허용 패턴
    pub fn accept(&self) -> &AcceptPattern {
        &self.accept
    }

    /// 드래그 hover 여부
    pub fn is_over(&self) -> bool {
        self.drag.is_over()
    }

    /// 활성 여부
    pub fn is_enabled(&self) -> bool {
        self.drag.is_enabled()
    }

    /// 활성/비활성 전환
    pub fn set_enabled(&mut self, enabled: bool) {
        self.drag.set_enabled(enabled);
    }

    /// 위젯이 숨겨짐 (드래그 상태만 초기화)
    pub fn hide(&mut self) {
        self.drag.reset();
    }

    /// 선택 교체 (중복 검사 없음)
    pub fn pick(&mut self, handle: FileHandle) {
        if !self.is_enabled() {
            return;
        }
        debug!(name = %handle.name, "pick single file");
        self.file = Some(handle);
    }

    /// 선택 해제
    pub fn clear(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.file = None;
    }

    pub fn drag_enter(&mut self) {
        self.drag.on_enter();
    }

    pub fn drag_over(&self) -> DropEffect {
        self.drag.on_drag_over()
    }

    pub fn drag_leave(&mut self) {
        self.drag.on_leave();
    }

    /// 드롭: 허용 패턴에 맞는 첫 번째 파일로 교체
    ///
    /// 맞는 파일이 없으면 기존 선택을 유지하고 `false`를 반환한다.
    pub fn drop_files(&mut self, incoming: Vec<FileHandle>) -> bool {
        if !self.drag.on_drop() {
            return false;
        }
        match self.accept.filter(incoming).into_iter().next() {
            Some(handle) => {
                self.pick(handle);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str) -> FileHandle {
        FileHandle::new(name, 10, 0)
    }

    fn names(selection: &MultiFileSelection) -> Vec<String> {
        selection.files().iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_filter_then_merge_scenario() {
        // pattern .csv, incoming = [a.csv, b.txt, A.CSV]
        let mut selection = MultiFileSelection::new(AcceptPattern::parse(Some(".csv")));
        let outcome = selection.add_files(vec![handle("a.csv"), handle("b.txt"), handle("A.CSV")]);

        assert_eq!(names(&selection), vec!["a.csv"]);
        assert_eq!(outcome.added.len(), 1);
        assert_eq!(outcome.filtered_out, 1);
        assert_eq!(outcome.duplicates[0].name, "A.CSV");
        let report = outcome.report.unwrap();
        assert_eq!(report.names(), &["A.CSV".to_string()]);
    }

    #[test]
    fn test_filtered_only_produces_no_report() {
        let mut selection = MultiFileSelection::new(AcceptPattern::parse(Some(".png")));
        let outcome = selection.add_files(vec![handle("a.txt"), handle("b.txt")]);
        assert!(outcome.is_empty());
        assert_eq!(outcome.filtered_out, 2);
        assert!(outcome.report.is_none());
        assert!(selection.files().is_empty());
    }

    #[test]
    fn test_remove_one_and_all() {
        let mut selection = MultiFileSelection::default();
        selection.add_files(vec![handle("a"), handle("b"), handle("c")]);

        let key = handle("b").display_key();
        assert!(selection.remove_one(&key));
        assert_eq!(names(&selection), vec!["a", "c"]);

        // 없는 키는 변화 없음
        assert!(!selection.remove_one(&key));
        assert_eq!(names(&selection), vec!["a", "c"]);

        selection.remove_all();
        assert!(selection.files().is_empty());
    }

    #[test]
    fn test_disabled_multi_ignores_mutations() {
        let mut selection = MultiFileSelection::default();
        selection.add_files(vec![handle("keep")]);
        selection.set_enabled(false);

        let outcome = selection.add_files(vec![handle("new")]);
        assert_eq!(outcome, AddOutcome::default());
        assert!(!selection.remove_one(&handle("keep").display_key()));
        selection.remove_all();
        assert_eq!(names(&selection), vec!["keep"]);
    }

    #[test]
    fn test_disabled_multi_drag_sequence() {
        let mut selection = MultiFileSelection::default();
        selection.set_enabled(false);

        selection.drag_enter();
        assert!(!selection.is_over());
        assert_eq!(selection.drag_over(), DropEffect::None);
        let outcome = selection.drop_files(vec![handle("a")]);
        assert!(outcome.is_empty());
        assert!(!selection.is_over());
        assert!(selection.files().is_empty());
    }

    #[test]
    fn test_drop_adds_and_clears_hover() {
        let mut selection = MultiFileSelection::default();
        selection.drag_enter();
        selection.drag_enter();
        assert!(selection.is_over());

        let outcome = selection.drop_files(vec![handle("a"), handle("b")]);
        assert_eq!(outcome.added.len(), 2);
        assert!(!selection.is_over());
    }

    #[test]
    fn test_hide_resets_hover_only() {
        let mut selection = MultiFileSelection::default();
        selection.add_files(vec![handle("a")]);
        selection.drag_enter();
        selection.hide();
        assert!(!selection.is_over());
        assert_eq!(selection.files().len(), 1);
    }

    #[test]
    fn test_single_pick_replaces_without_dedup() {
        let mut single = SingleFileSelection::default();
        single.pick(handle("a.pdf"));
        single.pick(handle("A.PDF"));
        assert_eq!(single.file().map(|f| f.name.as_str()), Some("A.PDF"));

        single.clear();
        assert!(single.file().is_none());
    }

    #[test]
    fn test_single_drop_without_candidates_keeps_selection() {
        let mut single = SingleFileSelection::new(AcceptPattern::parse(Some(".pdf")));
        single.pick(handle("keep.pdf"));

        assert!(!single.drop_files(vec![handle("image.png")]));
        assert!(!single.drop_files(Vec::new()));
        assert_eq!(single.file().map(|f| f.name.as_str()), Some("keep.pdf"));
    }

    #[test]
    fn test_single_drop_takes_first_accepted() {
        let mut single = SingleFileSelection::new(AcceptPattern::parse(Some(".pdf")));
        single.drag_enter();
        assert!(single.drop_files(vec![handle("x.png"), handle("b.pdf"), handle("c.pdf")]));
        assert_eq!(single.file().map(|f| f.name.as_str()), Some("b.pdf"));
        assert!(!single.is_over());
    }

    #[test]
    fn test_single_disabled_ignores_pick_and_clear() {
        let mut single = SingleFileSelection::default();
        single.pick(handle("a"));
        single.set_enabled(false);

        single.pick(handle("b"));
        single.clear();
        assert!(!single.drop_files(vec![handle("c")]));
        assert_eq!(single.file().map(|f| f.name.as_str()), Some("a"));
    }
}
