use crate::models::FileHandle;
use crate::utils::error::{BokslDropError, Result};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::warn;

/// 파일 시스템 어댑터
///
/// 호스트 입력(경로, 붙여넣은 드롭 텍스트)을 `FileHandle`로 변환합니다.
/// 파일 내용은 읽지 않습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl FileSystem {
    pub fn new() -> Self {
        Self
    }

    /// 경로 하나를 FileHandle로 변환
    ///
    /// 존재하지 않거나 일반 파일이 아니면 `InvalidPath`.
    pub fn handle_for(&self, path: &Path) -> Result<FileHandle> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BokslDropError::InvalidPath(path.to_path_buf()));
            }
            Err(e) => return Err(BokslDropError::Io(e)),
        };

        if !metadata.is_file() {
            return Err(BokslDropError::InvalidPath(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| BokslDropError::InvalidPath(path.to_path_buf()))?;

        Ok(FileHandle::new(name, metadata.len(), modified_millis(&metadata)).with_source(path))
    }

    /// 여러 경로 변환 (실패한 경로는 경고 후 건너뜀, 순서 유지)
    pub fn handles_for(&self, paths: &[PathBuf]) -> Vec<FileHandle> {
        paths
            .iter()
            .filter_map(|path| match self.handle_for(path) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping path");
                    None
                }
            })
            .collect()
    }

    /// 터미널 드롭(붙여넣기) 텍스트를 경로 목록으로 분리
    ///
    /// 셸 인용 규칙을 따르며, 따옴표가 맞지 않으면 공백 기준으로 나눈다.
    pub fn parse_drop_payload(&self, text: &str) -> Vec<PathBuf> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let tokens = shlex::split(text)
            .unwrap_or_else(|| text.split_whitespace().map(str::to_string).collect());

        tokens
            .into_iter()
            .filter(|token| !token.is_empty())
            .map(|token| expand_home(&unwrap_file_uri(&token)))
            .collect()
    }
}

/// 수정 시각 (epoch 이전이거나 조회 불가면 0)
fn modified_millis(metadata: &Metadata) -> i64 {
    metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|duration| i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// `file://` URI를 경로 문자열로 변환
fn unwrap_file_uri(token: &str) -> String {
    let Some(rest) = token.strip_prefix("file://") else {
        return token.to_string();
    };
    // file://localhost/path 형태
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    percent_decode(rest)
}

/// `%XX` 이스케이프 해제 (잘못된 시퀀스는 그대로 둠)
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

/// 앞쪽 `~`를 홈 디렉토리로 확장
fn expand_home(path: &str) -> PathBuf {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path.trim_start_matches('~').trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}
