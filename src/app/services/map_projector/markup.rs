//! Escaped markup fragments for marker popups
//!
//! Every interpolated value passes through [`escape_html`]; the only raw
//! markup in a fragment is the fixed set of tags emitted by the builder.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Markup that is safe to embed in an HTML context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Builder for a line-oriented markup fragment
///
/// Lines are joined with `<br>` in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct MarkupFragment {
    lines: Vec<String>,
}

impl MarkupFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bold line
    pub fn strong(mut self, text: &str) -> Self {
        self.lines.push(format!("<b>{}</b>", escape_html(text)));
        self
    }

    /// Add an italic line
    pub fn emphasis(mut self, text: &str) -> Self {
        self.lines.push(format!("<i>{}</i>", escape_html(text)));
        self
    }

    /// Add a plain text line
    pub fn text(mut self, text: &str) -> Self {
        self.lines.push(escape_html(text).into_owned());
        self
    }

    /// Add a `label: value` line with the label in bold
    pub fn labeled(mut self, label: &str, value: &str) -> Self {
        self.lines.push(format!(
            "<b>{}:</b> {}",
            escape_html(label),
            escape_html(value)
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn build(self) -> SafeHtml {
        SafeHtml(self.lines.join("<br>"))
    }
}
