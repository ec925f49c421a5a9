/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// The line is empty or only contains whitespace.
    Blank,
    /// The line has content. The first `strip_len` bytes are structural
    /// indentation and marker, everything after them is retained.
    Content { strip_len: usize },
}

impl Line {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// The retained part of `line`, or `None` for blank lines.
    ///
    /// `line` must be the same line that was classified.
    pub fn content<'a>(&self, line: &'a str) -> Option<&'a str> {
        match *self {
            Self::Blank => None,
            Self::Content { strip_len } => line.get(strip_len..),
        }
    }
}

/// Classify `line` against the marker `prefix`.
///
/// A line is content with a non-zero strip length only when `prefix` follows
/// directly after the leading whitespace. A single space after the marker is
/// part of the marker. Content lines without the marker have a strip length
/// of zero and are kept verbatim.
///
/// # Examples
///
/// ```rust
/// use cleanstring::{classify, Line};
/// assert_eq!(classify("  \t ", "|"), Line::Blank);
/// assert_eq!(classify("    |abc", "|"), Line::Content { strip_len: 5 });
/// assert_eq!(classify("    > abc", ">"), Line::Content { strip_len: 6 });
/// assert_eq!(classify("    abc", "|"), Line::Content { strip_len: 0 });
/// ```
pub fn classify(line: &str, prefix: &str) -> Line {
    let indent = leading_whitespace_len(line);
    if indent == line.len() {
        return Line::Blank;
    }
    let Some(rest) = line[indent..].strip_prefix(prefix) else {
        return Line::Content { strip_len: 0 };
    };
    let gap = usize::from(rest.starts_with(' '));
    Line::Content { strip_len: indent + prefix.len() + gap }
}

pub(crate) fn leading_whitespace_len(line: &str) -> usize {
    line.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(index, _)| index)
        .unwrap_or(line.len())
}
