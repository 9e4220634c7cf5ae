//! 선택 다이얼로그 세션
//!
//! 다이얼로그 열림 여부와 중복 경고를 소유한다. 선택 데이터는
//! 선택 관리자가 소유하며, 세션을 닫아도 선택은 유지된다.

use crate::models::{AddOutcome, DuplicateReport, FileHandle, MultiFileSelection};
use crate::utils::keys::DisplayKey;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogSession {
    open: bool,
    report: Option<DuplicateReport>,
}

impl DialogSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 열기 (이전 중복 경고는 지움)
    pub fn open(&mut self) {
        self.report = None;
        if !self.open {
            info!("selection dialog opened");
        }
        self.open = true;
    }

    /// 닫기 (선택 데이터는 건드리지 않음)
    pub fn close(&mut self) {
        if self.open {
            info!("selection dialog closed");
        }
        self.open = false;
    }

    /// Esc 입력: 열려 있을 때만 닫고 `true`
    pub fn on_escape(&mut self) -> bool {
        self.request_close()
    }

    /// 다이얼로그 바깥 클릭: 열려 있을 때만 닫고 `true`
    pub fn on_outside_click(&mut self) -> bool {
        self.request_close()
    }

    fn request_close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.close();
        true
    }

    /// 현재 중복 경고
    pub fn report(&self) -> Option<&DuplicateReport> {
        self.report.as_ref()
    }

    /// 중복 경고 닫기
    pub fn dismiss_report(&mut self) {
        self.report = None;
    }

    /// 결과에 중복 보고서가 있을 때만 교체 (새로 추가된 것이 없어도 기존 경고 유지)
    fn record(&mut self, outcome: &AddOutcome) {
        if let Some(report) = &outcome.report {
            self.report = Some(report.clone());
        }
    }

    /// 선택 관리자에 파일 추가
    pub fn add_files(
        &mut self,
        selection: &mut MultiFileSelection,
        incoming: Vec<FileHandle>,
    ) -> AddOutcome {
        let outcome = selection.add_files(incoming);
        self.record(&outcome);
        outcome
    }

    /// 드롭된 파일 추가
    pub fn drop_files(
        &mut self,
        selection: &mut MultiFileSelection,
        incoming: Vec<FileHandle>,
    ) -> AddOutcome {
        let outcome = selection.drop_files(incoming);
        self.record(&outcome);
        outcome
    }

    pub fn remove_one(&mut self, selection: &mut MultiFileSelection, key: &DisplayKey) -> bool {
        selection.remove_one(key)
    }

    pub fn remove_all(&mut self, selection: &mut MultiFileSelection) {
        selection.remove_all();
    }
}
