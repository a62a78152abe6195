//! 单行输入框

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::view::theme::Styles;

/// 光标字符
const CURSOR: &str = "▎";

/// 渲染一行输入框内容：`  text▎suffix`
///
/// 文本过长时只显示末尾，保证光标所在位置可见。
pub fn input_line<'a>(
    text: &'a str,
    suffix: &'a str,
    placeholder: &'a str,
    focused: bool,
    editable: bool,
    max_width: usize,
) -> Line<'a> {
    let text_style = if editable {
        Style::default()
    } else {
        Styles::disabled()
    };

    let mut spans = vec![Span::raw("  ")];
    if text.is_empty() && !focused {
        spans.push(Span::styled(placeholder, Styles::label()));
        return Line::from(spans);
    }

    let budget = max_width.saturating_sub(2 + CURSOR.width() + suffix.width());
    spans.push(Span::styled(visible_tail(text, budget), text_style));
    if focused && editable {
        spans.push(Span::styled(CURSOR, Styles::hint_key()));
    }
    if !suffix.is_empty() {
        spans.push(Span::styled(suffix, Styles::label()));
    }
    Line::from(spans)
}

/// 截取显示宽度不超过 `max_width` 的末尾部分
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
