use crate::Queue;
use std::iter::*;

/// Creates a new `IntoIter` which pops values off `queue`.
#[inline]
pub fn new_into_iter<T,>(queue: Queue<T,>,) -> IntoIter<T,> {
    IntoIter { queue, }
}

/// An owning iterator which pops the values of a `Queue` in FIFO order.
///
/// Values which are not yielded are dropped with the iterator.
pub struct IntoIter<T,> {
    queue: Queue<T,>,
}

impl<T,> Iterator for IntoIter<T,> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item,> { self.queue.pop_front().ok() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.queue.len(), Some(self.queue.len()),) }
}

impl<T,> ExactSizeIterator for IntoIter<T,> {}

impl<T,> FusedIterator for IntoIter<T,> {}
