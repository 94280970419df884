//! Output writer with indentation tracking
//!
//! Every emission unit renders into its own `EmitWriter` starting at the depth its parent handed it, and splices
//! already-rendered child fragments in with [`EmitWriter::raw`].

/// Writer that tracks indentation (in columns) and builds one text fragment
pub struct EmitWriter {
    /// The output buffer
    output: String,
    /// Current indentation, in columns
    depth: usize,
    /// Columns added by one `indent()`
    step: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl EmitWriter {
    /// Create a writer whose lines start at `depth` columns
    pub fn new(depth: usize, step: usize) -> Self {
        Self {
            output: String::new(),
            depth,
            step,
            at_line_start: true,
        }
    }

    /// Get the rendered fragment
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation by one step
    pub fn indent(&mut self) {
        self.depth += self.step;
    }

    /// Decrease indentation by one step
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(self.step);
    }

    /// Current indentation, in columns
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Depth that nested units should render at
    pub fn child_depth(&self) -> usize {
        self.depth + self.step
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            self.output.push_str(&" ".repeat(self.depth));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    /// Write `count` spaces (used for column alignment inside a line)
    pub fn pad(&mut self, count: usize) {
        self.write(&" ".repeat(count));
    }

    /// Append an already-rendered fragment verbatim (no indentation is added)
    pub fn raw(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.output.push_str(fragment);
        self.at_line_start = fragment.ends_with('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> EmitWriter {
        EmitWriter::new(0, 4)
    }

    #[test]
    fn test_new_writer_empty_output() {
        let writer = default_writer();
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_simple() {
        let mut writer = default_writer();
        writer.write("hello");
        assert_eq!(writer.finish(), "hello");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = EmitWriter::new(8, 4);
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_writeln_empty_string_has_no_trailing_spaces() {
        let mut writer = EmitWriter::new(8, 4);
        writer.writeln("");
        assert_eq!(writer.finish(), "\n");
    }

    #[test]
    fn test_initial_depth_applies() {
        let mut writer = EmitWriter::new(4, 4);
        writer.writeln("a");
        writer.write("b");
        assert_eq!(writer.finish(), "    a\n    b");
    }

    #[test]
    fn test_indent_affects_output() {
        let mut writer = default_writer();
        writer.indent();
        writer.writeln("indented");
        writer.dedent();
        writer.writeln("not indented");
        assert_eq!(writer.finish(), "    indented\nnot indented\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_child_depth() {
        let mut writer = EmitWriter::new(2, 2);
        assert_eq!(writer.child_depth(), 4);
        writer.indent();
        assert_eq!(writer.child_depth(), 6);
    }

    #[test]
    fn test_blank_lines_between_content() {
        let mut writer = default_writer();
        writer.writeln("line1");
        writer.blank_lines(2);
        writer.writeln("line2");
        assert_eq!(writer.finish(), "line1\n\n\nline2\n");
    }

    #[test]
    fn test_pad_aligns_inside_line() {
        let mut writer = default_writer();
        writer.write("a");
        writer.pad(3);
        writer.write("=");
        assert_eq!(writer.finish(), "a   =");
    }

    #[test]
    fn test_raw_is_not_indented() {
        let mut writer = EmitWriter::new(4, 4);
        writer.raw("  child\n");
        writer.write("after");
        assert_eq!(writer.finish(), "  child\n    after");
    }

    #[test]
    fn test_raw_without_newline_continues_line() {
        let mut writer = EmitWriter::new(4, 4);
        writer.write("start");
        writer.raw(" middle");
        writer.write(" end");
        assert_eq!(writer.finish(), "    start middle end");
    }
}
