use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 파일 이름을 최대 너비에 맞춰 축약한다.
/// 규칙: 확장자는 최대한 유지하고 본문 뒤쪽을 `...`로 생략한다.
pub fn truncate_file_name(name: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if name.width() <= max_width {
        return name.to_string();
    }

    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    };

    // 확장자를 붙일 공간이 없으면 앞부분만 남김
    let reserved = ext.width() + ELLIPSIS.width();
    if ext.is_empty() || reserved >= max_width {
        if max_width <= ELLIPSIS.width() {
            return take_prefix_by_width(name, max_width);
        }
        let prefix = take_prefix_by_width(name, max_width - ELLIPSIS.width());
        return format!("{}{}", prefix, ELLIPSIS);
    }

    let prefix = take_prefix_by_width(stem, max_width - reserved);
    format!("{}{}{}", prefix, ELLIPSIS, ext)
}

/// 경로를 최대 너비에 맞춰 축약한다.
/// 규칙: HOME 경로는 `~`로 표시하고, 길면 앞쪽을 `...`로 생략한다.
pub fn truncate_path(path: &Path, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let path = shorten_home(&path.to_string_lossy());
    if path.width() <= max_width {
        return path;
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(&path, max_width);
    }

    let suffix_width = max_width - ELLIPSIS.width();
    format!("{}{}", ELLIPSIS, take_suffix_by_width(&path, suffix_width))
}

fn shorten_home(path: &str) -> String {
    let home_dir = dirs::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    if home_dir.is_empty() {
        return path.to_string();
    }

    if path == home_dir {
        "~".to_string()
    } else if let Some(rest) = path.strip_prefix(&home_dir) {
        if rest.starts_with('/') {
            format!("~{}", rest)
        } else {
            path.to_string()
        }
    } else {
        path.to_string()
    }
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.reverse();
    rev_chars.into_iter().collect()
}
