use std::{collections::VecDeque, fmt, rc::Rc, sync::Arc};

use parking_lot::{Mutex, RwLock};

/// A sequence a [`Cursor`](crate::Cursor) can read from.
///
/// Implementations are re-enumerated on every cursor step, so they always expose their current
/// contents. Nothing here promises that those contents are stable between two steps.
pub trait Source {
    type Item: Clone;

    /// Whether the raw sequence yields at least one element right now.
    fn any(&self) -> bool;

    /// Clones, in source order, every element for which `keep` returns true.
    fn collect_where<F>(&self, keep: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool;

    #[inline]
    fn collect_all(&self) -> Vec<Self::Item> {
        self.collect_where(|_| true)
    }
}

impl<T> Source for [T]
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn any(&self) -> bool {
        !self.is_empty()
    }

    fn collect_where<F>(&self, mut keep: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&item| keep(item)).cloned().collect()
    }
}

impl<T, const N: usize> Source for [T; N]
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn any(&self) -> bool {
        N > 0
    }

    #[inline]
    fn collect_where<F>(&self, keep: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().collect_where(keep)
    }
}

impl<T> Source for Vec<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn any(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    fn collect_where<F>(&self, keep: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.as_slice().collect_where(keep)
    }
}

impl<T> Source for VecDeque<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn any(&self) -> bool {
        !self.is_empty()
    }

    fn collect_where<F>(&self, mut keep: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&item| keep(item)).cloned().collect()
    }
}

/// Live collection shared with writers. Each call holds the read lock only for its own duration.
impl<S> Source for RwLock<S>
where
    S: Source + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn any(&self) -> bool {
        self.read().any()
    }

    #[inline]
    fn collect_where<F>(&self, keep: F) -> Vec<S::Item>
    where
        F: FnMut(&S::Item) -> bool,
    {
        self.read().collect_where(keep)
    }
}

impl<S> Source for Mutex<S>
where
    S: Source + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn any(&self) -> bool {
        self.lock().any()
    }

    #[inline]
    fn collect_where<F>(&self, keep: F) -> Vec<S::Item>
    where
        F: FnMut(&S::Item) -> bool,
    {
        self.lock().collect_where(keep)
    }
}

macro_rules! impl_source_for_pointer {
    ($($ptr:ty),*) => {
        $(
            impl<S> Source for $ptr
            where
                S: Source + ?Sized,
            {
                type Item = S::Item;

                #[inline]
                fn any(&self) -> bool {
                    (**self).any()
                }

                #[inline]
                fn collect_where<F>(&self, keep: F) -> Vec<S::Item>
                where
                    F: FnMut(&S::Item) -> bool,
                {
                    (**self).collect_where(keep)
                }
            }
        )*
    };
}

impl_source_for_pointer!(&S, Box<S>, Rc<S>, Arc<S>);

/// Lazily evaluated sequence, produced anew by calling `F` every time it is read.
///
/// ```
/// use nextcursor::{Query, Source};
///
/// let evens = Query::new(|| (0..10).filter(|n| n % 2 == 0));
/// assert!(evens.any());
/// assert_eq!(evens.collect_where(|n| *n > 4), vec![6, 8]);
/// ```
#[derive(Clone, Copy)]
pub struct Query<F>(F);

impl<F> Query<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for Query<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Query").finish_non_exhaustive()
    }
}

impl<F, I> Source for Query<F>
where
    F: Fn() -> I,
    I: IntoIterator,
    I::Item: Clone,
{
    type Item = I::Item;

    /// Only pulls the first element.
    #[inline]
    fn any(&self) -> bool {
        (self.0)().into_iter().next().is_some()
    }

    fn collect_where<P>(&self, mut keep: P) -> Vec<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        (self.0)().into_iter().filter(|item| keep(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_slice_keeps_order() {
        let source = [5, 1, 4, 2, 3];
        assert_eq!(source.collect_where(|n| *n > 2), vec![5, 4, 3]);
        assert_eq!(source.collect_all(), vec![5, 1, 4, 2, 3]);
    }

    #[test]
    fn test_empty_sources() {
        let empty: [u8; 0] = [];
        assert!(!empty.any());
        assert!(!Vec::<u8>::new().any());
        assert!(!VecDeque::<u8>::new().any());
        assert!(!RwLock::new(Vec::<u8>::new()).any());
        assert!(!Mutex::new(Vec::<u8>::new()).any());
        assert!(!Query::new(std::iter::empty::<u8>).any());
    }

    #[test]
    fn test_lock_sees_writes() {
        let source = RwLock::new(vec![1, 2]);
        assert_eq!(source.collect_all(), vec![1, 2]);
        source.write().push(3);
        assert_eq!(source.collect_all(), vec![1, 2, 3]);
        source.write().clear();
        assert!(!source.any());
    }

    #[test]
    fn test_query_reenumerates() {
        let calls = Cell::new(0);
        let source = Query::new(|| {
            calls.set(calls.get() + 1);
            vec!['a', 'b']
        });
        assert!(source.any());
        assert_eq!(source.collect_all(), vec!['a', 'b']);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_pointers_delegate() {
        let shared: Arc<[u8]> = Arc::from(vec![7, 8, 9]);
        assert_eq!(shared.collect_where(|n| n % 2 == 1), vec![7, 9]);
        let boxed: Box<Vec<u8>> = Box::default();
        assert!(!boxed.any());
    }
}
