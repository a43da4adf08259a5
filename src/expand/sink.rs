//! Append-only output buffer.

/// Ordered, append-only sequence of output lines.
///
/// Each write appends the given text followed by a single `\n`. The text may
/// itself span several lines (verbatim source spans usually do).
#[derive(Debug, Default)]
pub struct OutputSink {
    buf: String,
    writes: usize,
}

impl OutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and a line terminator.
    pub fn write_line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
        self.writes += 1;
    }

    /// Number of writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sink() {
        let sink = OutputSink::new();
        assert_eq!(sink.writes(), 0);
        assert_eq!(sink.into_string(), "");
    }

    #[test]
    fn test_every_write_is_terminated() {
        let mut sink = OutputSink::new();
        sink.write_line("a");
        sink.write_line("");
        sink.write_line("b\nc");
        assert_eq!(sink.writes(), 3);
        assert_eq!(sink.into_string(), "a\n\nb\nc\n");
    }
}
