use crate::node::Node;
use std::{iter::*, marker::PhantomData, ptr::NonNull,};

/// Creates a new `IterMut` from parts.
///
/// # Params
///
/// head --- The first `Node` to yield.  
/// len --- The number of `Node`s in the chain starting at `head`.
///
/// # Unsafe
///
/// The chain starting at `head` must be exclusively borrowed for `'t`.
#[inline]
pub unsafe fn new_iter_mut<'t, T: 't,>(head: Option<NonNull<Node<T,>>>, len: usize,) -> IterMut<'t, T,> {
    IterMut { next: head, len, marker: PhantomData, }
}

/// A mutable iterator over the values of a `Queue`, front to back.
pub struct IterMut<'t, T: 't,> {
    /// The next `Node` to yield.
    next: Option<NonNull<Node<T,>>>,
    /// The number of values left.
    len: usize,
    marker: PhantomData<&'t mut Node<T,>>,
}

impl<'t, T: 't,> Iterator for IterMut<'t, T,> {
    type Item = &'t mut T;

    fn next(&mut self) -> Option<Self::Item,> {
        self.next.map(|node| {
            let node = unsafe { &mut *node.as_ptr() };

            //Advance past the `Node` before handing out its value.
            self.next = node.next;
            self.len -= 1;

            &mut node.data
        })
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> ExactSizeIterator for IterMut<'t, T,> {}

impl<'t, T: 't,> FusedIterator for IterMut<'t, T,> {}
