// src/templates/mod.rs
pub mod activity;
pub mod code_block;
pub mod index;

mod layout;

pub use layout::render_page;

// Helper function for HTML escaping. `\r` becomes a character reference so
// the parser's newline normalization keeps CRLF intact.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\r', "&#13;")
}

#[cfg(test)]
pub(crate) fn html_unescape(s: &str) -> String {
    s.replace("&#13;", "\r")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}
