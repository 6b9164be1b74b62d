use std::fmt;

use log::{debug, trace};

use crate::{
    End, Mode, Result, Source, Step,
    view::{self, State, Transition},
};

/// Predicate type of a cursor built without one.
pub type Unfiltered<T> = fn(&T) -> bool;

/// Pull-based cursor over a borrowed [`Source`], optionally filtered by a predicate.
///
/// Every call to [`next`](Self::next) derives the filtered view from the source's current
/// contents, then reads it at the cursor position. What happens once the view is exhausted
/// depends on the [`Mode`]: [`Mode::StopAtEnd`] keeps reporting [`End::Exhausted`], while
/// [`Mode::Repeat`] rewinds to the first element of the view.
///
/// The position is the only state that changes over the cursor's lifetime.
pub struct Cursor<'a, S, P = Unfiltered<<S as Source>::Item>>
where
    S: Source + ?Sized,
{
    source: &'a S,
    predicate: Option<P>,
    mode: Mode,
    position: usize,
}

impl<'a, S> Cursor<'a, S>
where
    S: Source + ?Sized,
{
    pub fn new(source: &'a S, mode: Mode) -> Self {
        Self {
            source,
            predicate: None,
            mode,
            position: 0,
        }
    }
}

impl<'a, S, P> Cursor<'a, S, P>
where
    S: Source + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    pub fn with_predicate(source: &'a S, predicate: P, mode: Mode) -> Self {
        Self {
            source,
            predicate: Some(predicate),
            mode,
            position: 0,
        }
    }

    /// Whether the raw source holds at least one element.
    ///
    /// Ignores both the predicate and the position: it can return true while
    /// [`next`](Self::next) reports [`End::Exhausted`].
    #[inline]
    pub fn can_continue(&self) -> bool {
        self.source.any()
    }

    /// Reads the next element of the freshly derived filtered view.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Step<S::Item> {
        let view = self.view();
        self.next_in(&view)
    }

    /// Same as [`next`](Self::next), against a view the caller already derived, typically with
    /// [`view`](Self::view) or [`view::derive`].
    ///
    /// The emptiness check still reads the source itself.
    pub fn next_in(&mut self, view: &[S::Item]) -> Step<S::Item> {
        if !self.can_continue() {
            trace!("Source empty at position {}", self.position);
            return Step::End(End::SourceEmpty);
        }

        let position = match view::plan(self.position, view.len(), self.mode) {
            Transition::Read(position) => position,
            Transition::Wrap => {
                debug!(
                    "Wrapping from position {} over a view of {} elements",
                    self.position,
                    view.len()
                );
                self.position = 0;
                0
            }
            Transition::Stop => {
                debug!(
                    "Exhausted at position {} over a view of {} elements",
                    self.position,
                    view.len()
                );
                return Step::End(End::Exhausted);
            }
        };

        // Repeat over a view the predicate emptied
        let Some(item) = view::index(view, position) else {
            return Step::End(End::Exhausted);
        };

        trace!("Read position {position}");
        self.position = position + 1;

        Step::Item(item)
    }

    /// [`next`](Self::next), with the end of the sequence turned into an [`Error`](crate::Error).
    #[inline]
    pub fn try_next(&mut self) -> Result<S::Item> {
        self.next().into_result()
    }

    /// Filtered view of the source as it is now.
    #[inline]
    pub fn view(&self) -> Vec<S::Item> {
        view::derive(self.source, self.predicate.as_ref())
    }

    #[inline]
    pub fn state(&self) -> State {
        view::state(self.position, self.view().len())
    }

    /// Borrows the cursor as an iterator, which stops at the first [`Step::End`].
    ///
    /// Under [`Mode::Repeat`] with a non-empty view it never stops.
    pub fn iter(&mut self) -> Iter<'_, 'a, S, P> {
        Iter { cursor: self }
    }
}

impl<'a, S, P> Cursor<'a, S, P>
where
    S: Source + ?Sized,
{
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    #[inline]
    pub fn source(&self) -> &'a S {
        self.source
    }
}

impl<'a, S> From<&'a S> for Cursor<'a, S>
where
    S: Source + ?Sized,
{
    fn from(source: &'a S) -> Self {
        Self::new(source, Mode::default())
    }
}

impl<'a, S> From<(&'a S, Mode)> for Cursor<'a, S>
where
    S: Source + ?Sized,
{
    fn from((source, mode): (&'a S, Mode)) -> Self {
        Self::new(source, mode)
    }
}

impl<S, P> Clone for Cursor<'_, S, P>
where
    S: Source + ?Sized,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            predicate: self.predicate.clone(),
            mode: self.mode,
            position: self.position,
        }
    }
}

impl<S, P> fmt::Debug for Cursor<'_, S, P>
where
    S: Source + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("mode", &self.mode)
            .field("position", &self.position)
            .field("has_predicate", &self.has_predicate())
            .finish_non_exhaustive()
    }
}

/// Iterator over a borrowed [`Cursor`], see [`Cursor::iter`].
pub struct Iter<'c, 'a, S, P>
where
    S: Source + ?Sized,
{
    cursor: &'c mut Cursor<'a, S, P>,
}

impl<S, P> Iterator for Iter<'_, '_, S, P>
where
    S: Source + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().item()
    }
}
