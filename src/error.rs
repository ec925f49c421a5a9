use std::fmt::{self, Write};
use std::sync::Arc;


/// Failure of strict cleaning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CleanError {
    #[error(
        "content line is missing the `{prefix}` prefix at line {}, column {}",
        .location.line_number, .location.column_number
    )]
    MissingPrefix {
        prefix: Arc<str>,
        location: LineLocation,
    },
}

impl CleanError {
    pub(crate) fn missing_prefix(prefix: &str, location: LineLocation) -> Self {
        Self::MissingPrefix { prefix: prefix.into(), location }
    }

    pub fn location(&self) -> &LineLocation {
        match self {
            Self::MissingPrefix { location, .. } => location,
        }
    }

    /// Multi-line diagnostic showing the offending line with a caret under
    /// the first character that should have been the prefix.
    pub fn display_with_context(&self) -> impl fmt::Display + '_ {
        display_fn(move |f| match self {
            Self::MissingPrefix { prefix, location } => {
                writeln!(f, "error: content line is missing the `{prefix}` prefix")?;
                write!(f, "{}", location.display_marked(prefix))
            },
        })
    }
}

/// Position of a line inside the cleaned input. Numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLocation {
    line_number: usize,
    column_number: usize,
    line: Arc<str>,
}

impl LineLocation {
    pub(crate) fn new(line: &str, line_number: usize, column_number: usize) -> Self {
        Self { line: line.into(), line_number, column_number }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn column_number(&self) -> usize {
        self.column_number
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    fn display_marked<'a>(&'a self, expected: &'a str) -> impl fmt::Display + 'a {
        display_fn(move |f| {
            let width = gutter_width(self.line_number);
            writeln!(f, "--> line {}, column {}", self.line_number, self.column_number)?;
            writeln!(f, " {:width$} | {}", self.line_number, self.line)?;
            write!(f, " {:width$} | ", "")?;
            for c in self.line.chars().take(self.column_number.saturating_sub(1)) {
                f.write_char(if c == '\t' { '\t' } else { ' ' })?;
            }
            writeln!(f, "^ expected `{expected}`")
        })
    }
}

struct DisplayFn<F>(F);

fn display_fn<'a, F>(body: F) -> impl fmt::Display + 'a
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result + 'a,
{
    DisplayFn(body)
}

impl<F> fmt::Display for DisplayFn<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0(f)
    }
}

fn gutter_width(line_number: usize) -> usize {
    line_number.checked_ilog10().map_or(1, |log| log as usize + 1)
}
