use crate::models::FileHandle;
use crate::utils::formatter::pluralize;
use std::fmt;

/// 최근 병합에서 중복으로 제외된 파일 요약
///
/// 핸들이 아니라 표시 이름만 담으며, 같은 이름은 한 번만 나타난다.
/// 다이얼로그가 다시 열리거나 사용자가 닫으면 사라진다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    names: Vec<String>,
}

impl DuplicateReport {
    /// 제외된 핸들에서 보고서 생성 (제외된 항목이 없으면 `None`)
    ///
    /// 이름 기준으로 중복을 제거하고 처음 나온 순서를 유지한다.
    pub fn from_rejected(rejected: &[FileHandle]) -> Option<Self> {
        let mut names: Vec<String> = Vec::new();
        for handle in rejected {
            if !names.iter().any(|n| n == &handle.name) {
                names.push(handle.name.clone());
            }
        }

        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    /// 제외된 고유 이름 수
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// 제외된 이름 목록
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 콤마로 이은 이름 목록
    pub fn joined_names(&self) -> String {
        self.names.join(", ")
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} skipped: {}",
            pluralize(self.count(), "duplicate file", "duplicate files"),
            self.joined_names()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rejections_no_report() {
        assert!(DuplicateReport::from_rejected(&[]).is_none());
    }

    #[test]
    fn test_distinct_display_names() {
        let rejected = vec![
            FileHandle::new("A.CSV", 1, 0),
            FileHandle::new("b.csv", 2, 0),
            FileHandle::new("A.CSV", 3, 9),
        ];
        let report = DuplicateReport::from_rejected(&rejected).unwrap();
        assert_eq!(report.count(), 2);
        assert_eq!(report.names(), &["A.CSV".to_string(), "b.csv".to_string()]);
    }

    #[test]
    fn test_names_differing_by_case_stay_separate() {
        // 식별 키가 아니라 표시 이름 기준
        let rejected = vec![FileHandle::new("x.pdf", 1, 0), FileHandle::new("X.PDF", 1, 0)];
        let report = DuplicateReport::from_rejected(&rejected).unwrap();
        assert_eq!(report.count(), 2);
    }

    #[test]
    fn test_display_message() {
        let one = DuplicateReport::from_rejected(&[FileHandle::new("a.csv", 1, 0)]).unwrap();
        assert_eq!(one.to_string(), "1 duplicate file skipped: a.csv");

        let two = DuplicateReport::from_rejected(&[
            FileHandle::new("a.csv", 1, 0),
            FileHandle::new("b.csv", 1, 0),
        ])
        .unwrap();
        assert_eq!(two.to_string(), "2 duplicate files skipped: a.csv, b.csv");
    }
}
