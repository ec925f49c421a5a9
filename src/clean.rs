use std::convert::Infallible;

use crate::{classify, CleanError, Line, LineLocation, Options};
use crate::classify::leading_whitespace_len;
use tracing::{debug, trace};


/// Clean `input` using the default `|` prefix.
///
/// Leading and trailing blank lines are removed. On every other line, leading
/// whitespace followed by the prefix is stripped. Lines without the prefix are
/// kept as they are, and blank lines between content lines are kept verbatim.
///
/// # Examples
///
/// ```rust
/// use cleanstring::clean;
/// assert_eq!(
///     clean("
///         |Any literal
///         |which needs to be split
///         |
///         |on multiple lines.
///     "),
///     "Any literal\nwhich needs to be split\n\non multiple lines."
/// );
/// ```
pub fn clean(input: &str) -> String {
    Cleaner::default().clean(input)
}

/// Clean `input` with the given options. `None` behaves like default options.
///
/// ```rust
/// use cleanstring::{clean_with, Options};
/// let options = Options::new().with_prefix(">");
/// assert_eq!(
///     clean_with("
///         > quoted
///         > text
///     ", Some(&options)),
///     "quoted\ntext"
/// );
/// ```
pub fn clean_with(input: &str, options: Option<&Options>) -> String {
    Cleaner::new(options).clean(input)
}

/// Like [`clean`], but every content line must carry the `|` prefix.
pub fn try_clean(input: &str) -> Result<String, CleanError> {
    Cleaner::default().try_clean(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SeekingStart,
    Body,
}

/// Reusable cleaner with a resolved prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    prefix: Box<str>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Cleaner {
    pub fn new(options: Option<&Options>) -> Self {
        let prefix = options.map_or(crate::DEFAULT_PREFIX, Options::prefix);
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn clean(&self, input: &str) -> String {
        match self.run(input, |_, _, _| Ok::<_, Infallible>(())) {
            Ok(cleaned) => cleaned,
            Err(never) => match never {},
        }
    }

    /// Strict variant of [`Cleaner::clean`].
    ///
    /// Fails on the first content line that does not start with the prefix
    /// after its leading whitespace. An empty prefix matches every line.
    pub fn try_clean(&self, input: &str) -> Result<String, CleanError> {
        self.run(input, |index, line, class| {
            if class != (Line::Content { strip_len: 0 }) || self.prefix.is_empty() {
                return Ok(());
            }
            let indent = leading_whitespace_len(line);
            let column = line[..indent].chars().count() + 1;
            let location = LineLocation::new(line, index + 1, column);
            debug!(
                line_number = index + 1,
                prefix = %self.prefix,
                "rejecting content line without prefix"
            );
            Err(CleanError::missing_prefix(&self.prefix, location))
        })
    }

    fn run<E, F>(&self, input: &str, mut check: F) -> Result<String, E>
    where
        F: FnMut(usize, &str, Line) -> Result<(), E>,
    {
        if input.is_empty() {
            return Ok(String::new());
        }

        let mut phase = Phase::SeekingStart;
        let mut pending = Vec::new();
        let mut output = Vec::new();
        for (index, line) in input.split('\n').enumerate() {
            let class = classify(line, &self.prefix);
            let Some(content) = class.content(line) else {
                if phase == Phase::Body {
                    pending.push(line);
                }
                continue;
            };
            check(index, line, class)?;
            match phase {
                Phase::SeekingStart => {
                    trace!(line_number = index + 1, "first content line");
                    phase = Phase::Body;
                },
                Phase::Body => output.append(&mut pending),
            }
            output.push(content);
        }
        if !pending.is_empty() {
            trace!(count = pending.len(), "discarding trailing blank lines");
        }
        Ok(output.join("\n"))
    }
}
