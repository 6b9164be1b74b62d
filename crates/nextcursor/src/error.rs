use std::{fmt, result};

use crate::End;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for nextcursor operations.
///
/// Exhaustion is an ordinary outcome of [`Cursor::next`](crate::Cursor::next) and is reported
/// there as [`Step::End`](crate::Step::End). These variants only show up when a caller opts into
/// `?` propagation through [`Cursor::try_next`](crate::Cursor::try_next), or when a [`Mode`](crate::Mode)
/// fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SourceEmpty,
    Exhausted,
    UnknownMode(String),
}

impl From<End> for Error {
    fn from(value: End) -> Self {
        match value {
            End::SourceEmpty => Self::SourceEmpty,
            End::Exhausted => Self::Exhausted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::SourceEmpty => write!(f, "Source is empty"),
            Error::Exhausted => write!(f, "Filtered view is exhausted"),
            Error::UnknownMode(s) => write!(
                f,
                "Unknown mode \"{s}\", expected \"stop_at_end\" or \"repeat\""
            ),
        }
    }
}

impl std::error::Error for Error {}
