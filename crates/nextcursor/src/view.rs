//! Stateless building blocks of a cursor step.
//!
//! A step is split into deriving the filtered view from the source, deciding what the cursor
//! does at its position, and reading the view at that position. [`Cursor::next`](crate::Cursor::next)
//! chains all three on every call; callers who want to reuse one derived view across several
//! steps can hand it to [`Cursor::next_in`](crate::Cursor::next_in) instead.

use crate::{Mode, Source};

/// Where a cursor stands relative to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The next read happens at this index.
    Active(usize),
    /// The position is at or past the end of the view.
    Exhausted,
}

/// What a single step does, given the position, the view length and the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Read the view at this index and advance.
    Read(usize),
    /// Rewind to index 0, then read.
    Wrap,
    /// Stay put and report the end.
    Stop,
}

/// Filtered view of `source` at call time, in source order.
///
/// Without a predicate every element passes.
pub fn derive<S, P>(source: &S, predicate: Option<&P>) -> Vec<S::Item>
where
    S: Source + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    match predicate {
        Some(predicate) => source.collect_where(|item| predicate(item)),
        None => source.collect_all(),
    }
}

/// Element of `view` at `position`, if any.
#[inline]
pub fn index<T>(view: &[T], position: usize) -> Option<T>
where
    T: Clone,
{
    view.get(position).cloned()
}

#[inline]
pub fn state(position: usize, len: usize) -> State {
    if position < len {
        State::Active(position)
    } else {
        State::Exhausted
    }
}

pub fn plan(position: usize, len: usize, mode: Mode) -> Transition {
    match (state(position, len), mode) {
        (State::Active(position), _) => Transition::Read(position),
        (State::Exhausted, Mode::Repeat) => Transition::Wrap,
        (State::Exhausted, Mode::StopAtEnd) => Transition::Stop,
    }
}
