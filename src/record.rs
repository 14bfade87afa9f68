//! One raw input line and fixed-width field access.
//!
//! Positions and lengths are counted in characters from the start of the
//! line, so `field(3, 10)` covers columns 3..13. Access never fails: a field
//! that starts past the end of the line is empty and a field that runs past
//! the end is truncated to what is present.

/// A single line of the order file, kept as read (minus the line ending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    text: String,
}

impl Record {
    /// Wraps a line, dropping a trailing carriage return from CRLF input.
    pub fn from_line(line: &str) -> Self {
        Self {
            text: line.strip_suffix('\r').unwrap_or(line).to_string(),
        }
    }

    /// The raw line.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the line in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True for lines that carry no record at all: empty, whitespace only,
    /// or too short to hold a type code.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() || self.len() < 3
    }

    /// The 3-character line type code, if the line is long enough.
    pub fn type_code(&self) -> Option<&str> {
        let end = self.byte_offset(3)?;
        Some(&self.text[..end])
    }

    /// Extract `len` characters starting at `pos`, trimmed of surrounding
    /// whitespace.
    pub fn field(&self, pos: usize, len: usize) -> &str {
        let Some(start) = self.byte_offset(pos) else {
            return "";
        };
        let end = self
            .byte_offset(pos.saturating_add(len))
            .unwrap_or(self.text.len());
        self.text[start..end].trim()
    }

    /// Byte index of character `pos`, or `None` when `pos` is past the end.
    /// `pos == len()` maps to the end of the string.
    fn byte_offset(&self, pos: usize) -> Option<usize> {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .nth(pos)
    }
}

impl From<&str> for Record {
    fn from(line: &str) -> Self {
        Self::from_line(line)
    }
}
