//! 설정 파일과 명령줄 옵션
//!
//! `config_dir/boksldrop/config.toml`에서 읽고, 명령줄 옵션으로 덮어쓴다.

use crate::utils::error::Result;
use crate::utils::AcceptPattern;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 설정 파일 경로를 바꾸는 환경 변수
pub const CONFIG_ENV: &str = "BOKSLDROP_CONFIG";

/// 사용자 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 허용 패턴 (예: ".csv,.pdf")
    pub accept: Option<String>,
    /// 다중 선택 여부
    pub multiple: bool,
    /// 시작 시 비활성 여부
    pub disabled: bool,
    /// 언어 코드 (en / ko)
    pub language: String,
    /// 테마 이름
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accept: None,
            multiple: true,
            disabled: false,
            language: "en".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// 기본 설정 파일 경로 (`BOKSLDROP_CONFIG`가 있으면 우선)
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("boksldrop").join("config.toml"))
    }

    /// 파일에서 로드 (없으면 기본값, 형식 오류는 에러)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// 파일의 언어/테마만 갱신 (나머지 항목은 파일 값 유지)
    pub fn save_preferences(path: &Path, language: &str, theme: &str) -> Result<()> {
        let mut stored = Self::load_from(path)?;
        stored.language = language.to_string();
        stored.theme = theme.to_string();
        stored.save(path)
    }

    /// 파일로 저장 (상위 디렉토리 생성)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 허용 패턴 파싱 결과
    pub fn accept_pattern(&self) -> AcceptPattern {
        AcceptPattern::parse(self.accept.as_deref())
    }

    /// 명령줄 옵션 덮어쓰기
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(accept) = &cli.accept {
            self.accept = Some(accept.clone());
        }
        if cli.single {
            self.multiple = false;
        }
        if cli.disabled {
            self.disabled = true;
        }
        if let Some(lang) = &cli.lang {
            self.language = lang.clone();
        }
        if let Some(theme) = &cli.theme {
            self.theme = theme.clone();
        }
        self
    }
}

/// 명령줄 옵션
#[derive(Debug, Default, Parser)]
#[command(
    name = "boksldrop",
    version,
    about = "A drag-and-drop file selection tray for the terminal",
    long_about = "Collect files by dropping (pasting) them into the terminal or typing paths.\n\
                  On confirm, the selected paths are printed to stdout, one per line."
)]
pub struct Cli {
    /// Accepted extensions, comma separated (e.g. ".csv,.pdf").
    #[arg(long, value_name = "PATTERN")]
    pub accept: Option<String>,

    /// Hold a single file instead of a collection.
    #[arg(long)]
    pub single: bool,

    /// Start with the drop target disabled.
    #[arg(long)]
    pub disabled: bool,

    /// UI language (en, ko).
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Theme name (dark, light, high_contrast, or a custom theme).
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// 설정 파일 로드 후 옵션 적용
    pub fn resolve_config(&self) -> Result<(Config, Option<PathBuf>)> {
        let path = self.config.clone().or_else(Config::default_path);
        let config = match &path {
            Some(path) => Config::load_from(path)?,
            None => Config::default(),
        };
        Ok((config.apply_cli(self), path))
    }
}
