//! 확장자 기반 허용 패턴 (`.png, .csv` 형식)
//!
//! 콤마로 구분된 패턴에서 `.`으로 시작하는 토큰만 확장자로 사용한다.
//! MIME 타입 등 나머지 토큰은 무시하며, 남는 확장자가 없으면 모두 허용한다.
//! 대소문자 무시.

use crate::models::FileHandle;

/// 파싱된 허용 패턴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptPattern {
    /// 소문자, `.` 접두 확장자 목록 (입력 순서 유지, 중복 제거)
    extensions: Vec<String>,
}

impl AcceptPattern {
    /// 패턴 문자열 파싱 (없거나 비어 있으면 전체 허용)
    pub fn parse(pattern: Option<&str>) -> Self {
        let mut extensions: Vec<String> = Vec::new();

        for token in pattern.unwrap_or_default().split(',') {
            let token = token.trim().to_lowercase();
            if token.is_empty() || !token.starts_with('.') {
                continue;
            }
            if !extensions.contains(&token) {
                extensions.push(token);
            }
        }

        Self { extensions }
    }

    /// 확장자 제한이 없는지 확인
    pub fn is_accept_all(&self) -> bool {
        self.extensions.is_empty()
    }

    /// 허용 확장자 목록
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// 파일 이름이 패턴에 맞는지 확인
    pub fn matches_name(&self, name: &str) -> bool {
        if self.is_accept_all() {
            return true;
        }
        let name = name.to_lowercase();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// 파일 핸들이 패턴에 맞는지 확인
    pub fn matches(&self, handle: &FileHandle) -> bool {
        self.matches_name(&handle.name)
    }

    /// 패턴에 맞는 핸들만 순서대로 남김
    pub fn filter(&self, incoming: Vec<FileHandle>) -> Vec<FileHandle> {
        if self.is_accept_all() {
            return incoming;
        }
        incoming.into_iter().filter(|h| self.matches(h)).collect()
    }

    /// 사람이 읽는 형태 (`.csv, .png`), 전체 허용이면 `None`
    pub fn describe(&self) -> Option<String> {
        if self.is_accept_all() {
            None
        } else {
            Some(self.extensions.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str) -> FileHandle {
        FileHandle::new(name, 1, 0)
    }

    #[test]
    fn test_absent_or_empty_pattern_accepts_all() {
        assert!(AcceptPattern::parse(None).is_accept_all());
        assert!(AcceptPattern::parse(Some("")).is_accept_all());
        assert!(AcceptPattern::parse(Some(" , ,")).is_accept_all());
        assert!(AcceptPattern::parse(None).matches(&handle("anything.bin")));
    }

    #[test]
    fn test_mime_only_pattern_accepts_all() {
        let pattern = AcceptPattern::parse(Some("image/*, application/pdf"));
        assert!(pattern.is_accept_all());
        assert!(pattern.matches(&handle("notes.txt")));
    }

    #[test]
    fn test_mixed_tokens_keep_extensions_only() {
        let pattern = AcceptPattern::parse(Some("image/png, .PNG , .csv,,"));
        assert_eq!(pattern.extensions(), &[".png".to_string(), ".csv".to_string()]);
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = AcceptPattern::parse(Some(".CSV"));
        assert!(pattern.matches(&handle("report.csv")));
        assert!(pattern.matches(&handle("REPORT.CSV")));
        assert!(!pattern.matches(&handle("report.tsv")));
    }

    #[test]
    fn test_suffix_match_only() {
        let pattern = AcceptPattern::parse(Some(".tar.gz"));
        assert!(pattern.matches(&handle("backup.tar.gz")));
        assert!(!pattern.matches(&handle("backup.tar")));
        // 확장자가 이름 중간에 있는 경우는 불일치
        assert!(!AcceptPattern::parse(Some(".csv")).matches(&handle("a.csv.bak")));
    }

    #[test]
    fn test_filter_keeps_order() {
        let pattern = AcceptPattern::parse(Some(".csv"));
        let kept = pattern.filter(vec![handle("a.csv"), handle("b.txt"), handle("A.CSV")]);
        let names: Vec<&str> = kept.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "A.CSV"]);
    }

    #[test]
    fn test_korean_filenames() {
        let pattern = AcceptPattern::parse(Some(".txt"));
        assert!(pattern.matches(&handle("한글파일.txt")));
        assert!(!pattern.matches(&handle("한글파일.hwp")));
    }

    #[test]
    fn test_describe() {
        assert_eq!(AcceptPattern::parse(None).describe(), None);
        assert_eq!(
            AcceptPattern::parse(Some(".png,.jpg")).describe().as_deref(),
            Some(".png, .jpg")
        );
    }
}
