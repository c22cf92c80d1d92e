//! Text escaping for row-oriented markup.
//!
//! Table rows must stay on a single line, so embedded line breaks are
//! rewritten into the target format's inline break token.

/// Inline line-break token for markdown tables.
pub const MARKDOWN_LINE_BREAK: &str = "<br>";

/// Rewrite every embedded line break in `text` into `line_break`.
///
/// `\r\n`, lone `\r` and `\n` are all treated as a single break. Sanitizing
/// already-sanitized text is a no-op as long as `line_break` itself contains
/// no line break.
#[must_use]
pub fn sanitize(text: &str, line_break: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(line_break);
            }
            '\n' => out.push_str(line_break),
            other => out.push(other),
        }
    }
    out
}

/// Returns `true` if `text` contains a raw line break.
#[must_use]
pub fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// Derive a stable anchor identifier from a dotted key.
///
/// Each `.` becomes `_`, so `table.split.threshold` anchors as
/// `table_split_threshold`. No other character is rewritten.
#[must_use]
pub fn anchor_id(key: &str) -> String {
    key.replace('.', "_")
}
