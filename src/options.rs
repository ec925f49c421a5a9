/// Marker used when no prefix is configured.
pub const DEFAULT_PREFIX: &str = "|";

/// Configuration for [`Cleaner`](crate::Cleaner).
///
/// An unset prefix falls back to [`DEFAULT_PREFIX`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Options {
    pub prefix: Option<Box<str>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix<P>(mut self, prefix: P) -> Self
    where
        P: AsRef<str>,
    {
        self.prefix = Some(prefix.as_ref().into());
        self
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_resolution() {
        assert_eq!(Options::new().prefix(), DEFAULT_PREFIX);
        assert_eq!(Options { prefix: None }.prefix(), "|");
        assert_eq!(Options::new().with_prefix(">").prefix(), ">");
        assert_eq!(Options::new().with_prefix(String::from("//")).prefix(), "//");
        assert_eq!(Options::new().with_prefix("").prefix(), "");
        assert_eq!(Options::new(), Options::default());
    }
}
