use crate::{Error, Result};

/// Why a step produced no element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    /// The raw source yielded nothing at call time.
    SourceEmpty,
    /// The source has elements but the filtered view has none left at the cursor position.
    Exhausted,
}

/// Outcome of a single [`Cursor::next`](crate::Cursor::next) call.
///
/// Kept distinct from `Option` so the reason for the end travels with it, and so a zero-valued
/// element is never mistaken for the end of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Step<T> {
    Item(T),
    End(End),
}

impl<T> Step<T> {
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End(_))
    }

    #[inline]
    pub fn end(&self) -> Option<End> {
        match self {
            Self::Item(_) => None,
            Self::End(end) => Some(*end),
        }
    }

    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::End(_) => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Step<&T> {
        match self {
            Self::Item(item) => Step::Item(item),
            Self::End(end) => Step::End(*end),
        }
    }

    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Item(item) => Step::Item(f(item)),
            Self::End(end) => Step::End(end),
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Item(item) => Ok(item),
            Self::End(end) => Err(Error::from(end)),
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    #[inline]
    fn from(value: Step<T>) -> Self {
        value.item()
    }
}
