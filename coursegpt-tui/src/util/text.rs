//! 按终端显示宽度处理文本（CJK 字符占两列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 字符串在终端中占用的列数
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// 截断到最多 `max` 列，被截断时以 `…` 结尾
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// 保留末尾最多 `max` 列（输入框里光标总在末尾）
pub fn tail(s: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > max {
            return &s[idx + ch.len_utf8()..];
        }
    }
    s
}
