// src/templates/code_block.rs
use std::time::{Duration, Instant};
use tracing::error;

use super::html_escape;
use crate::error::ClipboardError;
use crate::models::CodeListing;

pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

/// Destination for the copy action.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A rendered code listing with its copy and collapse state.
///
/// Lines are counted on the trimmed text, split on `\n` only, so CRLF
/// endings and tabs survive byte for byte.
pub struct CodeBlock {
    listing: CodeListing,
    expanded: bool,
    copied_until: Option<Instant>,
}

impl CodeBlock {
    pub fn new(listing: CodeListing) -> Self {
        Self {
            listing,
            expanded: false,
            copied_until: None,
        }
    }

    pub fn code(&self) -> &str {
        self.listing.source_text.trim()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.code().split('\n').collect()
    }

    pub fn should_collapse(&self) -> bool {
        match self.listing.collapse_threshold_lines {
            Some(threshold) => self.lines().len() > threshold,
            None => false,
        }
    }

    pub fn hidden_line_count(&self) -> usize {
        match self.listing.collapse_threshold_lines {
            Some(threshold) => self.lines().len().saturating_sub(threshold),
            None => 0,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        if self.should_collapse() {
            self.expanded = !self.expanded;
        }
    }

    /// Text currently on screen.
    pub fn displayed_text(&self) -> String {
        match self.listing.collapse_threshold_lines {
            Some(threshold) if self.should_collapse() && !self.expanded => {
                self.lines()[..threshold].join("\n")
            }
            _ => self.code().to_string(),
        }
    }

    pub fn toggle_label(&self) -> Option<String> {
        if !self.should_collapse() {
            return None;
        }
        Some(toggle_label(self.expanded, self.hidden_line_count()))
    }

    pub fn header_label(&self) -> String {
        match &self.listing.filename_label {
            Some(filename) => filename.clone(),
            None => self.listing.language_tag.to_uppercase(),
        }
    }

    /// Copy the trimmed listing. A failed write is logged and leaves the
    /// indicator off.
    pub fn copy(&mut self, clipboard: &dyn Clipboard, now: Instant) -> bool {
        match clipboard.write_text(self.code()) {
            Ok(()) => {
                self.copied_until = Some(now + COPIED_INDICATOR);
                true
            }
            Err(e) => {
                error!("Failed to copy: {}", e);
                false
            }
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    pub fn render(&self, id: &str) -> String {
        let lines = self.lines();
        let split = match self.listing.collapse_threshold_lines {
            Some(threshold) if self.should_collapse() => threshold,
            _ => lines.len(),
        };

        let visible = self.render_lines(&lines[..split], 0);
        let rest = if split < lines.len() {
            format!(
                r#"<code class="code-rest"{}>{}{}</code>"#,
                if self.expanded { "" } else { " hidden" },
                "\n",
                self.render_lines(&lines[split..], split)
            )
        } else {
            String::new()
        };

        let toggle = if self.should_collapse() {
            let hidden = self.hidden_line_count();
            format!(
                r#"<div class="code-toggle-bar">
                <button type="button" class="code-toggle" data-target="{id}" data-expanded="{}" data-more="{}" data-less="{}">{}</button>
            </div>"#,
                self.expanded,
                html_escape(&toggle_label(false, hidden)),
                html_escape(&toggle_label(true, hidden)),
                html_escape(&toggle_label(self.expanded, hidden)),
                id = id,
            )
        } else {
            String::new()
        };

        format!(
            r#"<div class="code-block" id="{id}" data-language="{}">
            <div class="code-header">
                <span class="code-label">{}</span>
                <button type="button" class="code-copy" data-code="{}" aria-label="Copy code to clipboard">Copy</button>
            </div>
            <div class="code-body"{}>
                <pre><code>{}</code>{}</pre>
            </div>
            {}
        </div>"#,
            html_escape(&self.listing.language_tag),
            html_escape(&self.header_label()),
            html_escape(self.code()),
            self.body_style(),
            visible,
            rest,
            toggle,
            id = id,
        )
    }

    fn body_style(&self) -> String {
        match &self.listing.max_height {
            Some(height) => format!(r#" style="max-height: {}; overflow-y: auto;""#, html_escape(height)),
            None => String::new(),
        }
    }

    fn render_lines(&self, lines: &[&str], offset: usize) -> String {
        if !self.listing.show_line_numbers {
            return html_escape(&lines.join("\n"));
        }
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    r#"<span class="code-line"><span class="line-no">{}</span>{}</span>"#,
                    offset + i + 1,
                    html_escape(line)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn toggle_label(expanded: bool, hidden: usize) -> String {
    if expanded {
        format!("Show Less ({} lines hidden)", hidden)
    } else {
        format!("Show More ({} more lines)", hidden)
    }
}
