/// 경로 입력 편집 (커서는 바이트 오프셋, 항상 문자 경계)
pub(super) struct TextBufferEdit;

impl TextBufferEdit {
    pub(super) fn insert_char(value: &mut String, cursor_pos: &mut usize, c: char) {
        value.insert(*cursor_pos, c);
        *cursor_pos += c.len_utf8();
    }

    /// 붙여넣은 문자열 삽입 (줄바꿈은 공백으로)
    pub(super) fn insert_str(value: &mut String, cursor_pos: &mut usize, text: &str) {
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        value.insert_str(*cursor_pos, &cleaned);
        *cursor_pos += cleaned.len();
    }

    pub(super) fn backspace(value: &mut String, cursor_pos: &mut usize) {
        if let Some(prev) = Self::prev_boundary(value, *cursor_pos) {
            value.remove(prev);
            *cursor_pos = prev;
        }
    }

    pub(super) fn delete(value: &mut String, cursor_pos: &mut usize) {
        if *cursor_pos < value.len() {
            value.remove(*cursor_pos);
        }
    }

    pub(super) fn left(value: &str, cursor_pos: &mut usize) {
        if let Some(prev) = Self::prev_boundary(value, *cursor_pos) {
            *cursor_pos = prev;
        }
    }

    pub(super) fn right(value: &str, cursor_pos: &mut usize) {
        if let Some(c) = value[*cursor_pos..].chars().next() {
            *cursor_pos += c.len_utf8();
        }
    }

    pub(super) fn home(cursor_pos: &mut usize) {
        *cursor_pos = 0;
    }

    pub(super) fn end(value: &str, cursor_pos: &mut usize) {
        *cursor_pos = value.len();
    }

    /// 이전 경로 조각 삭제 (Ctrl+W)
    ///
    /// 커서 왼쪽의 구분자를 건너뛴 뒤 다음 구분자까지 지운다.
    pub(super) fn delete_prev_segment(value: &mut String, cursor_pos: &mut usize) {
        let head = &value[..*cursor_pos];
        let trimmed = head.trim_end_matches(Self::is_separator);
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| Self::is_separator(*c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        value.replace_range(start..*cursor_pos, "");
        *cursor_pos = start;
    }

    fn prev_boundary(value: &str, cursor_pos: usize) -> Option<usize> {
        value[..cursor_pos].char_indices().next_back().map(|(i, _)| i)
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || c == '/' || c == '\\'
    }
}

#[cfg(test)]
mod tests {
    use super::TextBufferEdit;

    #[test]
    fn test_insert_and_backspace_keep_char_boundary() {
        let mut value = "보고서.csv".to_string();
        let mut cursor = "보고".len();

        TextBufferEdit::insert_char(&mut value, &mut cursor, '서');
        assert_eq!(value, "보고서서.csv");
        assert_eq!(cursor, "보고서".len());

        TextBufferEdit::backspace(&mut value, &mut cursor);
        TextBufferEdit::backspace(&mut value, &mut cursor);
        assert_eq!(value, "보서.csv");
        assert_eq!(cursor, "보".len());

        TextBufferEdit::home(&mut cursor);
        TextBufferEdit::backspace(&mut value, &mut cursor);
        assert_eq!(value, "보서.csv");
        TextBufferEdit::delete(&mut value, &mut cursor);
        assert_eq!(value, "서.csv");
    }

    #[test]
    fn test_cursor_movement() {
        let value = "a한b".to_string();
        let mut cursor = value.len();

        TextBufferEdit::left(&value, &mut cursor);
        assert_eq!(cursor, "a한".len());
        TextBufferEdit::left(&value, &mut cursor);
        assert_eq!(cursor, 1);
        TextBufferEdit::right(&value, &mut cursor);
        assert_eq!(cursor, "a한".len());

        TextBufferEdit::end(&value, &mut cursor);
        TextBufferEdit::right(&value, &mut cursor);
        assert_eq!(cursor, value.len());
    }

    #[test]
    fn test_insert_str_flattens_newlines() {
        let mut value = String::new();
        let mut cursor = 0;
        TextBufferEdit::insert_str(&mut value, &mut cursor, "/tmp/a.csv\n/tmp/b.csv\n");
        assert_eq!(value, "/tmp/a.csv /tmp/b.csv ");
        assert_eq!(cursor, value.len());
    }

    #[test]
    fn test_delete_prev_segment() {
        let mut value = "/tmp/data/report.csv".to_string();
        let mut cursor = value.len();

        TextBufferEdit::delete_prev_segment(&mut value, &mut cursor);
        assert_eq!(value, "/tmp/data/");

        TextBufferEdit::delete_prev_segment(&mut value, &mut cursor);
        assert_eq!(value, "/tmp/");
        assert_eq!(cursor, value.len());

        let mut value = "a.csv b.csv".to_string();
        let mut cursor = value.len();
        TextBufferEdit::delete_prev_segment(&mut value, &mut cursor);
        assert_eq!(value, "a.csv ");
    }
}
