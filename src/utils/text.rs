// src/utils/text.rs

pub const ELLIPSIS: &str = "...";

/// First line of `text`, up to (not including) the first `\n`.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}

/// First line of `message`, cut to `max_chars` characters with an ellipsis
/// appended when anything was cut.
pub fn truncate_first_line(message: &str, max_chars: usize) -> String {
    let line = first_line(message);
    match line.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &line[..cut], ELLIPSIS),
        None => line.to_string(),
    }
}
