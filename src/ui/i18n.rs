use crate::models::DuplicateReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Korean,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "ko" => Language::Korean,
            _ => Language::English,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Korean => "한국어",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Korean,
            Language::Korean => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Ok,
    Cancel,
    AppTitle,
    SelectionTitle,
    SelectionEmpty,
    SingleEmpty,
    DialogTitle,
    DropHint,
    DropHintActive,
    DropHintDisabled,
    AcceptAll,
    AcceptPrefix,
    Enabled,
    Disabled,
    ModeSingle,
    ModeMulti,
    PickTitle,
    PickPrompt,
    DismissHint,
    WarnTooSmall,
    ListHeaderName,
    ListHeaderSize,
    ListHeaderModified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    FilesAdded,
    NothingAccepted,
    PathNotFound,
    Removed,
    RemovedAll,
    TargetEnabled,
    TargetDisabled,
    ThemeChanged,
    LanguageChanged,
}

#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(self) -> Language {
        self.language
    }

    pub fn tr(self, key: TextKey) -> &'static str {
        match (self.language, key) {
            (Language::English, TextKey::Ok) => "OK",
            (Language::Korean, TextKey::Ok) => "확인",
            (Language::English, TextKey::Cancel) => "Cancel",
            (Language::Korean, TextKey::Cancel) => "취소",
            (Language::English, TextKey::AppTitle) => "BokslDrop",
            (Language::Korean, TextKey::AppTitle) => "복슬Drop",
            (Language::English, TextKey::SelectionTitle) => " Selected files ",
            (Language::Korean, TextKey::SelectionTitle) => " 선택한 파일 ",
            (Language::English, TextKey::SelectionEmpty) => "No files selected. Press o to add files.",
            (Language::Korean, TextKey::SelectionEmpty) => {
                "선택한 파일이 없습니다. o 키로 파일을 추가하세요."
            }
            (Language::English, TextKey::SingleEmpty) => "No file selected",
            (Language::Korean, TextKey::SingleEmpty) => "선택한 파일 없음",
            (Language::English, TextKey::DialogTitle) => " Add files ",
            (Language::Korean, TextKey::DialogTitle) => " 파일 추가 ",
            (Language::English, TextKey::DropHint) => "Drop files here or press a to enter a path",
            (Language::Korean, TextKey::DropHint) => {
                "여기에 파일을 끌어다 놓거나 a 키로 경로를 입력하세요"
            }
            (Language::English, TextKey::DropHintActive) => "Release to drop",
            (Language::Korean, TextKey::DropHintActive) => "놓으면 추가됩니다",
            (Language::English, TextKey::DropHintDisabled) => "Drop target is disabled",
            (Language::Korean, TextKey::DropHintDisabled) => "드롭 영역이 비활성 상태입니다",
            (Language::English, TextKey::AcceptAll) => "all files",
            (Language::Korean, TextKey::AcceptAll) => "모든 파일",
            (Language::English, TextKey::AcceptPrefix) => "Accept",
            (Language::Korean, TextKey::AcceptPrefix) => "허용",
            (Language::English, TextKey::Enabled) => "ON",
            (Language::Korean, TextKey::Enabled) => "활성",
            (Language::English, TextKey::Disabled) => "OFF",
            (Language::Korean, TextKey::Disabled) => "비활성",
            (Language::English, TextKey::ModeSingle) => "SINGLE",
            (Language::Korean, TextKey::ModeSingle) => "단일",
            (Language::English, TextKey::ModeMulti) => "MULTI",
            (Language::Korean, TextKey::ModeMulti) => "다중",
            (Language::English, TextKey::PickTitle) => "Pick files",
            (Language::Korean, TextKey::PickTitle) => "파일 선택",
            (Language::English, TextKey::PickPrompt) => "Path(s):",
            (Language::Korean, TextKey::PickPrompt) => "경로:",
            (Language::English, TextKey::DismissHint) => "x:Dismiss",
            (Language::Korean, TextKey::DismissHint) => "x:닫기",
            (Language::English, TextKey::WarnTooSmall) => "Terminal too small, please resize",
            (Language::Korean, TextKey::WarnTooSmall) => "터미널 크기를 늘려주세요",
            (Language::English, TextKey::ListHeaderName) => "Name",
            (Language::Korean, TextKey::ListHeaderName) => "이름",
            (Language::English, TextKey::ListHeaderSize) => "Size",
            (Language::Korean, TextKey::ListHeaderSize) => "크기",
            (Language::English, TextKey::ListHeaderModified) => "Modified",
            (Language::Korean, TextKey::ListHeaderModified) => "수정일",
        }
    }

    pub fn msg(self, key: MessageKey) -> &'static str {
        match (self.language, key) {
            (Language::English, MessageKey::FilesAdded) => "Added {count} file(s)",
            (Language::Korean, MessageKey::FilesAdded) => "파일 {count}개를 추가했습니다",
            (Language::English, MessageKey::NothingAccepted) => "No file matches {accept}",
            (Language::Korean, MessageKey::NothingAccepted) => "{accept}에 맞는 파일이 없습니다",
            (Language::English, MessageKey::PathNotFound) => "Not a file: {path}",
            (Language::Korean, MessageKey::PathNotFound) => "파일이 아닙니다: {path}",
            (Language::English, MessageKey::Removed) => "Removed {name}",
            (Language::Korean, MessageKey::Removed) => "{name} 제거",
            (Language::English, MessageKey::RemovedAll) => "Selection cleared",
            (Language::Korean, MessageKey::RemovedAll) => "선택을 모두 비웠습니다",
            (Language::English, MessageKey::TargetEnabled) => "Drop target enabled",
            (Language::Korean, MessageKey::TargetEnabled) => "드롭 영역 활성화",
            (Language::English, MessageKey::TargetDisabled) => "Drop target disabled",
            (Language::Korean, MessageKey::TargetDisabled) => "드롭 영역 비활성화",
            (Language::English, MessageKey::ThemeChanged) => "Theme: {name}",
            (Language::Korean, MessageKey::ThemeChanged) => "테마: {name}",
            (Language::English, MessageKey::LanguageChanged) => "Language: English",
            (Language::Korean, MessageKey::LanguageChanged) => "언어: 한국어",
        }
    }

    /// `{name}` 형식의 자리표시자 치환
    pub fn fmt(self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let mut text = self.msg(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// 중복 보고서 문구
    pub fn duplicate_report(self, report: &DuplicateReport) -> String {
        match self.language {
            Language::English => report.to_string(),
            Language::Korean => format!(
                "중복 파일 {}개를 건너뛰었습니다: {}",
                report.count(),
                report.joined_names()
            ),
        }
    }

    pub fn action_label(self, id: &str, fallback: &'static str) -> &'static str {
        match (self.language, id) {
            (Language::English, _) => fallback,
            (Language::Korean, "open_dialog") => "추가",
            (Language::Korean, "close_dialog") => "닫기",
            (Language::Korean, "pick") => "경로",
            (Language::Korean, "remove") => "제거",
            (Language::Korean, "remove_all") => "모두 제거",
            (Language::Korean, "dismiss") => "경고 닫기",
            (Language::Korean, "toggle_enabled") => "활성",
            (Language::Korean, "move_up") => "위",
            (Language::Korean, "move_down") => "아래",
            (Language::Korean, "language") => "언어",
            (Language::Korean, "theme") => "테마",
            (Language::Korean, "confirm") => "완료",
            (Language::Korean, "quit") => "종료",
            _ => fallback,
        }
    }
}
