use crate::models::FileHandle;
use crate::utils::keys::{DisplayKey, IdentityKey};
use std::collections::HashSet;

/// 선택된 파일 목록
///
/// 삽입 순서를 유지하며 같은 `IdentityKey`를 가진 항목은 둘 이상 존재하지 않는다.
/// 항목 추가는 병합 엔진(`core::merge`)을 통해서만 이루어진다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCollection {
    files: Vec<FileHandle>,
}

impl FileCollection {
    /// 빈 목록 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 병합 엔진 전용: 이미 중복이 제거된 목록으로 생성
    pub(crate) fn from_deduplicated(files: Vec<FileHandle>) -> Self {
        Self { files }
    }

    /// 병합 엔진 전용: 중복 검사가 끝난 항목을 뒤에 추가
    pub(crate) fn push_unchecked(&mut self, handle: FileHandle) {
        self.files.push(handle);
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 항목 순회
    pub fn iter(&self) -> std::slice::Iter<'_, FileHandle> {
        self.files.iter()
    }

    /// 슬라이스로 반환
    pub fn as_slice(&self) -> &[FileHandle] {
        &self.files
    }

    /// 인덱스로 항목 조회
    pub fn get(&self, index: usize) -> Option<&FileHandle> {
        self.files.get(index)
    }

    /// 전체 크기 (바이트)
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// 모든 항목의 식별 키
    pub fn identity_keys(&self) -> HashSet<IdentityKey> {
        self.files.iter().map(FileHandle::identity_key).collect()
    }

    /// 표시 키로 항목 위치 조회
    pub fn position_of(&self, key: &DisplayKey) -> Option<usize> {
        self.files.iter().position(|f| &f.display_key() == key)
    }

    /// 표시 키가 일치하는 항목 하나를 제거 (없으면 `None`)
    pub fn remove_by_display_key(&mut self, key: &DisplayKey) -> Option<FileHandle> {
        let index = self.position_of(key)?;
        Some(self.files.remove(index))
    }

    /// 전체 비우기
    pub fn clear(&mut self) {
        self.files.clear();
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a FileHandle;
    type IntoIter = std::slice::Iter<'a, FileHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
