//! 병합 엔진
//!
//! 기존 목록에 새로 들어온 파일을 이어 붙이면서 식별 키가 겹치는 항목을 걸러낸다.
//! 먼저 들어온 항목이 이긴다 (기존 목록 우선, 같은 묶음 안에서는 앞쪽 우선).

use crate::models::{FileCollection, FileHandle};
use tracing::debug;

/// 병합 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// 기존 항목 + 새로 추가된 항목 (순서 유지)
    pub merged: FileCollection,
    /// 이번 병합에서 실제로 추가된 항목
    pub added: Vec<FileHandle>,
    /// 중복으로 제외된 항목 (입력 순서)
    pub duplicates: Vec<FileHandle>,
}

/// 기존 목록과 새 파일 묶음을 병합
///
/// 기존 항목은 제거하거나 재정렬하지 않는다. 입력이 비어 있으면
/// 기존 목록을 그대로 돌려준다.
pub fn merge_with_report(existing: FileCollection, incoming: Vec<FileHandle>) -> MergeOutcome {
    if incoming.is_empty() {
        return MergeOutcome {
            merged: existing,
            added: Vec::new(),
            duplicates: Vec::new(),
        };
    }

    let mut seen = existing.identity_keys();
    let mut merged = existing;
    let mut added = Vec::new();
    let mut duplicates = Vec::new();

    for handle in incoming {
        // insert가 false면 이미 본 키
        if !seen.insert(handle.identity_key()) {
            duplicates.push(handle);
            continue;
        }
        added.push(handle.clone());
        merged.push_unchecked(handle);
    }

    debug!(
        added = added.len(),
        duplicates = duplicates.len(),
        total = merged.len(),
        "merged incoming files"
    );

    MergeOutcome {
        merged,
        added,
        duplicates,
    }
}
