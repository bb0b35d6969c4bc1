use crate::font::StandardFont;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Breaks `text` into lines no wider than `max_width` when set in `font` at `size`.
///
/// # Wrapping Behavior
///
/// Existing newlines (`\n`, `\r\n` or `\r`) always start a new line. Within a line, text
/// is broken at the last whitespace before the line would overflow, and the whitespace
/// at the break is dropped. If a single word is wider than the line on its own, it is
/// broken between characters instead so that no line ever overflows (a line always
/// holds at least one character).
///
/// Tabs are expanded to four spaces.
pub fn wrap_text(text: &str, font: StandardFont, size: Pt, max_width: Pt) -> Vec<String> {
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, font, size, max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    font: StandardFont,
    size: Pt,
    max_width: Pt,
    lines: &mut Vec<String>,
) {
    let chars: Vec<char> = paragraph.chars().collect();
    if chars.is_empty() {
        lines.push(String::new());
        return;
    }

    let width_of = |range: &[char]| -> Pt {
        let s: String = range.iter().collect();
        font.width_of_text(&s, size)
    };

    let mut start = 0usize;
    while start < chars.len() {
        // greedily take as many characters as fit
        let mut end = start;
        while end < chars.len() && width_of(&chars[start..=end]) <= max_width {
            end += 1;
        }

        if end == chars.len() {
            lines.push(chars[start..].iter().collect());
            break;
        }

        // break on the overflowing whitespace, or rewind to the most recent one
        let break_at = if chars[end].is_whitespace() && end > start {
            Some(end)
        } else {
            chars[start..end]
                .iter()
                .rposition(|c| c.is_whitespace())
                .map(|i| start + i)
                .filter(|&i| i > start)
        };

        let (line_end, next_start) = match break_at {
            Some(i) => (i, i + 1),
            // no whitespace to break at: split the word, keeping at least one character
            None => {
                let end = end.max(start + 1);
                (end, end)
            }
        };

        let line: String = chars[start..line_end].iter().collect();
        lines.push(line.trim_end().to_string());

        start = next_start;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
    }
}
