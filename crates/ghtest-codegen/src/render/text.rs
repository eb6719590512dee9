//! Indentation-aware line builder for generated source.

use ghtest_core::indent;

/// Accumulates generated source one indented line at a time.
#[derive(Debug, Default)]
pub struct TextBuilder {
    out: String,
}

impl TextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` at indentation `level`, followed by a newline.
    pub fn line(&mut self, level: usize, text: &str) -> &mut Self {
        self.out.push_str(&indent(text, level));
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
