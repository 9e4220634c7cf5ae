use std::path::PathBuf;
use thiserror::Error;

/// 호스트 측 오류 (파일 상태 조회, 설정 입출력, 터미널 입출력)
///
/// 선택 엔진 자체는 실패하지 않는다. 필터링/중복은 데이터로 표현된다.
#[derive(Error, Debug)]
pub enum BokslDropError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Not a regular file: {}", .0.display())]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, BokslDropError>;
