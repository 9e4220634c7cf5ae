use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 색상 테마
///
/// 드롭 영역, 선택 목록, 상태/명령 바의 색상을 정의합니다.
/// TOML 파일에서 로드하거나 미리 정의된 테마를 사용할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_dim: ColorDef,

    // 드롭 영역 테두리
    pub border: ColorDef,
    pub border_active: ColorDef,
    pub border_disabled: ColorDef,

    // 선택 목록
    pub list_normal: ColorDef,
    pub list_selected: ColorDef,
    pub list_selected_bg: ColorDef,

    // 바
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (Hex 문자열 "#1e1e1e" 또는 이름 "Red")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) if hex.starts_with('#') => parse_hex_color(hex),
            ColorDef::Hex(name) | ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),
            fg_dim: "#808080".into(),

            border: "#3c3c3c".into(),
            border_active: "#0078d4".into(),
            border_disabled: "#2a2a2a".into(),

            list_normal: "#d4d4d4".into(),
            list_selected: "#ffffff".into(),
            list_selected_bg: "#0078d4".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),
            fg_dim: "#8a8a8a".into(),

            border: "#cccccc".into(),
            border_active: "#0078d4".into(),
            border_disabled: "#e8e8e8".into(),

            list_normal: "#1e1e1e".into(),
            list_selected: "#000000".into(),
            list_selected_bg: "#add6ff".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),
            fg_dim: "#c0c0c0".into(),

            border: "#808080".into(),
            border_active: "#00ff00".into(),
            border_disabled: "#404040".into(),

            list_normal: "#ffffff".into(),
            list_selected: "#000000".into(),
            list_selected_bg: "#00ff00".into(),

            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }

    /// 테마를 TOML 파일로 저장
    pub fn save_to_file(&self, path: &Path) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current: usize,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current: 0,
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    pub fn current(&self) -> &Theme {
        &self.available_themes[self.current].1
    }

    pub fn current_name(&self) -> &str {
        &self.available_themes[self.current].0
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.available_themes.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(format!("테마를 찾을 수 없습니다: {}", name)),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        self.current = (self.current + 1) % self.available_themes.len();
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가 (같은 이름이면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        match self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = theme,
            None => self.available_themes.push((name, theme)),
        }
    }

    /// 디렉토리의 `*.toml` 테마 로드 (읽을 수 없는 파일은 건너뜀)
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<usize, anyhow::Error> {
        if !themes_dir.is_dir() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    debug!(%name, "custom theme loaded");
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(err) => warn!(path = %path.display(), %err, "skipping invalid theme file"),
            }
        }
        Ok(loaded)
    }

    /// 설정 디렉토리(`boksldrop/themes`)에서 테마 로드
    pub fn load_themes_from_config_dir(&mut self) -> Result<usize, anyhow::Error> {
        match themes_dir() {
            Some(dir) => self.load_themes_from_dir(&dir),
            None => Ok(0),
        }
    }
}

pub fn themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("boksldrop").join("themes"))
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
