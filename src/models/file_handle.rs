use crate::utils::keys::{self, DisplayKey, IdentityKey};
use std::path::{Path, PathBuf};

/// 호스트가 넘겨준 파일 참조
///
/// 내용은 읽지 않는다. 이름/크기/수정 시각만 보관하며,
/// 업로드 단계로 넘길 수 있도록 원본 위치를 함께 들고 있을 수 있다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// 파일 이름 (경로 제외)
    pub name: String,
    /// 바이트 단위 크기
    pub size: u64,
    /// 수정 시각 (Unix epoch 기준 밀리초)
    pub last_modified: i64,
    /// 원본 위치 (호스트가 알고 있는 경우)
    pub source: Option<PathBuf>,
}

impl FileHandle {
    /// 새 파일 핸들 생성
    pub fn new(name: impl Into<String>, size: u64, last_modified: i64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified,
            source: None,
        }
    }

    /// 원본 위치 지정
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// 원본 위치 반환
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 중복 판정용 키
    pub fn identity_key(&self) -> IdentityKey {
        keys::identity_key(self)
    }

    /// 목록 렌더링용 키
    pub fn display_key(&self) -> DisplayKey {
        keys::display_key(self)
    }
}
