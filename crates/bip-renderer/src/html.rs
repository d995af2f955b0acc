//! Markup assembly for editable fields.

/// Escape text for HTML content and double-quoted attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builder for a single element with escaped attributes and text.
pub(crate) struct ElementBuilder {
    tag: &'static str,
    out: String,
}

impl ElementBuilder {
    pub(crate) fn new(tag: &'static str) -> Self {
        let mut out = String::with_capacity(256);
        out.push('<');
        out.push_str(tag);
        Self { tag, out }
    }

    pub(crate) fn attr(mut self, name: &str, value: &str) -> Self {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&escape_html(value));
        self.out.push('"');
        self
    }

    /// Add the attribute only when `value` is present.
    pub(crate) fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub(crate) fn finish(mut self, text: &str) -> String {
        self.out.push('>');
        self.out.push_str(&escape_html(text));
        self.out.push_str("</");
        self.out.push_str(self.tag);
        self.out.push('>');
        self.out
    }
}
