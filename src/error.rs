//! Error types for display_props.

use std::fmt;
use std::ops::Range;

/// Result type alias for display_props operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for display_props operations.
///
/// None of these are fatal to a host: the public entry points recover from
/// every variant by leaving the original text visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The front-matter block exists but is not valid YAML.
    FrontMatter(String),
    /// A source path does not name a readable file.
    NotAFile(String),
    /// A decoration with an empty range was added to a set.
    EmptyDecoration { at: usize },
    /// Decorations were not sorted by start offset.
    UnsortedDecorations { previous: usize, next: usize },
    /// Two decorations cover a common offset.
    OverlappingDecorations {
        first: Range<usize>,
        second: Range<usize>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontMatter(msg) => write!(f, "invalid front matter: {msg}"),
            Self::NotAFile(path) => write!(f, "not a file: {path}"),
            Self::EmptyDecoration { at } => write!(f, "empty decoration at offset {at}"),
            Self::UnsortedDecorations { previous, next } => {
                write!(
                    f,
                    "decorations out of order: start {next} follows start {previous}"
                )
            }
            Self::OverlappingDecorations { first, second } => {
                write!(
                    f,
                    "decorations overlap: {}..{} and {}..{}",
                    first.start, first.end, second.start, second.end
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FrontMatter("bad indent".to_string());
        assert!(err.to_string().contains("invalid front matter"));

        let err = Error::NotAFile("notes/".to_string());
        assert_eq!(err.to_string(), "not a file: notes/");

        let err = Error::OverlappingDecorations {
            first: 0..9,
            second: 5..12,
        };
        assert!(err.to_string().contains("0..9 and 5..12"));

        let err = Error::UnsortedDecorations {
            previous: 10,
            next: 4,
        };
        assert!(err.to_string().contains("start 4 follows start 10"));
    }
}
