use crate::node::Node;
use std::{iter::*, marker::PhantomData, ptr::NonNull,};

/// Creates a new `Iter` from parts.
///
/// # Params
///
/// head --- The first `Node` to yield.  
/// len --- The number of `Node`s in the chain starting at `head`.
///
/// # Unsafe
///
/// The chain starting at `head` must stay alive and unmodified for `'t`.
#[inline]
pub unsafe fn new_iter<'t, T: 't,>(head: Option<NonNull<Node<T,>>>, len: usize,) -> Iter<'t, T,> {
    Iter { next: head, len, marker: PhantomData, }
}

/// An iterator over the values of a `Queue`, front to back.
pub struct Iter<'t, T: 't,> {
    /// The next `Node` to yield.
    next: Option<NonNull<Node<T,>>>,
    /// The number of values left.
    len: usize,
    marker: PhantomData<&'t Node<T,>>,
}

impl<'t, T: 't,> Clone for Iter<'t, T,> {
    #[inline]
    fn clone(&self) -> Self { Self { next: self.next, len: self.len, marker: PhantomData, } }
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item,> {
        self.next.map(|node| {
            let node = unsafe { &*node.as_ptr() };

            self.next = node.next;
            self.len -= 1;

            &node.data
        })
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> ExactSizeIterator for Iter<'t, T,> {}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}
