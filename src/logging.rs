//! 로그 설정
//!
//! 화면을 TUI가 차지하므로 로그는 파일로만 기록한다.
//! 필터는 `BOKSLDROP_LOG` 환경 변수로 바꿀 수 있다 (`EnvFilter` 문법).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 필터 환경 변수
pub const LOG_ENV: &str = "BOKSLDROP_LOG";

/// 기본 로그 파일 경로 (`data_local_dir/boksldrop/boksldrop.log`)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("boksldrop").join("boksldrop.log"))
}

/// 기본 필터 지시문 (외부 crate는 warn)
pub fn default_directives(level: Level) -> String {
    format!("warn,boksldrop={}", level.as_str().to_lowercase())
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// 파일 로그 초기화
///
/// 로그 파일을 열 수 없으면 에러를 반환하며, 이때 로그는 기록되지 않는다.
pub fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(Level::INFO))
        .with(layer)
        .try_init()
        .map_err(io::Error::other)
}
