//! 파일 식별 키
//!
//! - `IdentityKey`: 중복 판정용. 이름만 사용 (NFKC 정규화, 공백 제거, 소문자)
//! - `DisplayKey`: 목록 렌더링용. 이름 + 크기 + 수정 시각

use crate::models::FileHandle;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// 표시 키 구분자
///
/// 뒤쪽 두 필드가 항상 숫자이므로 오른쪽에서 분해하면 유일하다.
const DISPLAY_KEY_SEPARATOR: &str = "::";

/// 중복 판정용 키
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 목록 항목 식별 키
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayKey(String);

impl DisplayKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 파일 이름에서 식별 키 생성
pub fn identity_key_for_name(name: &str) -> IdentityKey {
    let compact: String = name.nfkc().filter(|c| !c.is_whitespace()).collect();
    IdentityKey(compact.to_lowercase())
}

/// 파일 핸들의 식별 키
pub fn identity_key(handle: &FileHandle) -> IdentityKey {
    identity_key_for_name(&handle.name)
}

/// 파일 핸들의 표시 키
pub fn display_key(handle: &FileHandle) -> DisplayKey {
    DisplayKey(format!(
        "{}{sep}{}{sep}{}",
        handle.name,
        handle.size,
        handle.last_modified,
        sep = DISPLAY_KEY_SEPARATOR
    ))
}
