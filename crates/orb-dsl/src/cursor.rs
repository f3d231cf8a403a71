use std::fmt;
use std::io::{self, BufRead};

/// Line-oriented reader with forward advance and a single line of pushback.
///
/// All lines are buffered at construction. Position `0` is before the first
/// line, `1..=len` points at a line, and `len + 1` is end of input. Grammar
/// rules look at most one line ahead before deciding whether to consume it,
/// so one `backtrack` is always enough to hand a line back to the caller.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    lines: Vec<String>,
    pos: usize,
}

impl Cursor {
    /// Buffers the lines of `source`. Both `\n` and `\r\n` end a line.
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(str::to_owned).collect(),
            pos: 0,
        }
    }

    /// Drains `reader` into a new cursor. The reader is not kept.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a line cannot be read or is not
    /// valid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self { lines, pos: 0 })
    }

    /// Moves to the next line. Returns true if there is a current line.
    pub fn advance(&mut self) -> bool {
        if self.pos <= self.lines.len() {
            self.pos += 1;
        }
        self.pos <= self.lines.len()
    }

    /// Moves back one line. Returns true if there is still a current line.
    pub fn backtrack(&mut self) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
        }
        self.pos > 0
    }

    /// The current line, or `""` before the first line and past the last.
    pub fn current(&self) -> &str {
        if self.pos == 0 || self.at_end() {
            return "";
        }
        &self.lines[self.pos - 1]
    }

    pub fn at_end(&self) -> bool {
        self.pos > self.lines.len()
    }

    /// The 1-based number of the current line.
    pub fn line_number(&self) -> usize {
        self.pos
    }

    /// Number of buffered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let marker = if i + 1 == self.pos { "* " } else { "  " };
            write!(f, "{marker}{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_before_first_line() {
        let cursor = Cursor::new("a\nb");
        assert_eq!(cursor.line_number(), 0);
        assert_eq!(cursor.current(), "");
        assert!(!cursor.at_end());
        assert_eq!(cursor.len(), 2);
    }

    #[test]
    fn advance_walks_lines_then_reports_end() {
        let mut cursor = Cursor::new("a\nb");
        assert!(cursor.advance());
        assert_eq!(cursor.current(), "a");
        assert!(cursor.advance());
        assert_eq!(cursor.current(), "b");
        assert_eq!(cursor.line_number(), 2);
        assert!(!cursor.advance());
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), "");
        // Advancing past the end is a no-op.
        assert!(!cursor.advance());
        assert_eq!(cursor.line_number(), 3);
    }

    #[test]
    fn backtrack_returns_the_line() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert!(cursor.backtrack());
        assert_eq!(cursor.current(), "a");
        assert!(cursor.advance());
        assert_eq!(cursor.current(), "b");
    }

    #[test]
    fn backtrack_from_end_restores_last_line() {
        let mut cursor = Cursor::new("only");
        cursor.advance();
        assert!(!cursor.advance());
        assert!(cursor.backtrack());
        assert_eq!(cursor.current(), "only");
    }

    #[test]
    fn backtrack_stops_at_start() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.backtrack());
        assert_eq!(cursor.line_number(), 0);
        cursor.advance();
        assert!(!cursor.backtrack());
        assert_eq!(cursor.line_number(), 0);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_empty());
        assert!(!cursor.advance());
        assert!(cursor.at_end());
    }

    #[test]
    fn crlf_line_endings() {
        let mut cursor = Cursor::new("a\r\nb\r\n");
        assert_eq!(cursor.len(), 2);
        cursor.advance();
        assert_eq!(cursor.current(), "a");
    }

    #[test]
    fn from_reader_buffers_everything() {
        let mut cursor = Cursor::from_reader("[t]\r\nx int\n".as_bytes()).unwrap();
        assert_eq!(cursor.len(), 2);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), "x int");
    }

    #[test]
    fn from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x66, 0xff, 0x0a];
        assert!(Cursor::from_reader(bytes).is_err());
    }

    #[test]
    fn display_marks_current_line() {
        let mut cursor = Cursor::new("a\nb\nc");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.to_string(), "  a\n* b\n  c");
    }
}
