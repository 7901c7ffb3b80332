//! [`node-queue`] is an implementation of a singly-linked FIFO [`Queue`] with
//! position based [cursors](cursors) and copy operations which never leave a queue
//! half replaced.
//!
//! Author --- daniel.bechaz@gmail.com
//! Last Moddified --- 2026-10-19

use std::{
    fmt::{self, Debug,},
    iter::{Extend, FromIterator,},
    marker::PhantomData,
    ptr::NonNull,
};

mod node;
mod error;
mod iters;
pub mod cursors;
pub mod algorithm;
#[cfg(feature = "vital")]
pub mod vital;

use self::node::Node;
pub use self::error::{Error, Result,};
pub use self::iters::{Iter, IterMut, IntoIter,};
pub use self::cursors::{Position, Cursor, CursorMut,};
pub use self::algorithm::{filter, transform,};
#[cfg(feature = "vital")]
pub use self::vital::VitalValue;

/// A first-in-first-out queue of individually allocated [`Node`]s.
///
/// Values are appended at the tail and removed from the head.
pub struct Queue<T,> {
    /// The first [`Node`] of the chain, which owns the rest of the chain.
    head: Option<NonNull<Node<T,>>>,
    /// The last [`Node`] of the chain.
    ///
    /// Only used to append in constant time, never to free.
    tail: Option<NonNull<Node<T,>>>,
    /// The number of [`Node`]s reachable from `head`.
    len: usize,
    /// The [`Queue`] owns its [`Node`]s.
    marker: PhantomData<Box<Node<T,>>>,
}

impl<T,> Queue<T,> {
    /// Links `node` after the current tail.
    ///
    /// # Params
    ///
    /// node --- The unlinked [`Node`] to append.
    fn link_back(&mut self, node: NonNull<Node<T,>>,) {
        match self.tail {
            None => self.head = Some(node),
            //`tail` always points at the last `Node` of the chain owned by `head`.
            Some(tail) => unsafe {
                debug_assert!((*tail.as_ptr()).next.is_none(), "`tail` has `next`",);

                (*tail.as_ptr()).next = Some(node);
            },
        }

        self.tail = Some(node);
        self.len += 1;
    }
    /// Returns the [`Node`] at a 1-based `position` by walking from the head.
    ///
    /// # Params
    ///
    /// position --- The position of the [`Node`] to find.
    fn node(&self, position: usize,) -> Option<&Node<T,>> {
        if position == 0 || position > self.len { return None }

        let mut node = self.head?;
        for _ in 1..position {
            node = unsafe { (*node.as_ptr()).next }?;
        }

        Some(unsafe { &*node.as_ptr() })
    }
    /// Returns the [`Node`] at a 1-based `position` by walking from the head.
    ///
    /// # Params
    ///
    /// position --- The position of the [`Node`] to find.
    fn node_mut(&mut self, position: usize,) -> Option<&mut Node<T,>> {
        if position == 0 || position > self.len { return None }

        let mut node = self.head?;
        for _ in 1..position {
            node = unsafe { (*node.as_ptr()).next }?;
        }

        Some(unsafe { &mut *node.as_ptr() })
    }
}

impl<T,> Queue<T,> {
    /// Returns a new empty [`Queue`].
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, tail: None, len: 0, marker: PhantomData, }
    }
    /// Returns the number of values in this [`Queue`].
    #[inline]
    #[doc(alias = "size")]
    pub const fn len(&self) -> usize { self.len }
    /// `true` if this [`Queue`] is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }
    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyQueue`] if the [`Queue`] is empty.
    #[inline]
    pub fn front(&self) -> Result<&T,> {
        self.head.map(|head| unsafe { &(*head.as_ptr()).data }).ok_or(Error::EmptyQueue,)
    }
    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyQueue`] if the [`Queue`] is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T,> {
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).data }).ok_or(Error::EmptyQueue,)
    }
    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyQueue`] if the [`Queue`] is empty.
    #[inline]
    pub fn back(&self) -> Result<&T,> {
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).data }).ok_or(Error::EmptyQueue,)
    }
    /// Pushes a value onto the back of the [`Queue`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Panics
    ///
    /// * Aborts if the [`Node`] could not be allocated.
    #[inline]
    pub fn push_back(&mut self, value: T,) {
        self.link_back(Node::alloc(value,),)
    }
    /// Pushes a value onto the back of the [`Queue`].
    ///
    /// If the [`Node`] could not be allocated the [`Queue`] is left unchanged.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Errors
    ///
    /// * [`Error::AllocationFailed`] if the [`Node`] could not be allocated.
    pub fn try_push_back(&mut self, value: T,) -> Result<(),> {
        let node = Node::try_alloc(value,)?;

        self.link_back(node,); Ok(())
    }
    /// Pops the first value off the front of the [`Queue`].
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyQueue`] if the [`Queue`] is empty.
    pub fn pop_front(&mut self,) -> Result<T,> {
        let head = self.head.ok_or(Error::EmptyQueue,)?;
        //`head` is owned by this `Queue` and is unlinked below.
        let (data, next,) = unsafe { Node::free(head,) };

        self.head = next;
        //Popping the last `Node` empties both ends.
        if self.head.is_none() { self.tail = None }
        self.len -= 1;

        Ok(data)
    }
    /// Drops every value in the [`Queue`].
    ///
    /// The chain is released one [`Node`] at a time so long chains cannot overflow the stack.
    pub fn clear(&mut self,) {
        let mut next = self.head.take();

        self.tail = None;
        self.len = 0;
        while let Some(node) = next {
            next = unsafe { Node::free(node,) }.1;
        }
    }
    /// Returns a read only [`Cursor`] at the first position of the [`Queue`].
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T,> {
        cursors::new_position(self, 1,)
    }
    /// Returns a read only [`Cursor`] at the end position of the [`Queue`].
    ///
    /// The end position never holds a value.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T,> {
        cursors::new_position(self, self.end_position(),)
    }
    /// Returns a [`CursorMut`] at the first position of the [`Queue`].
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T,> {
        cursors::new_position(self, 1,)
    }
    /// Returns the 1-based position one past the last value.
    #[inline]
    pub const fn end_position(&self) -> usize { self.len + 1 }
    /// Returns an iterator over all values in the [`Queue`].
    #[inline]
    pub fn iter(&self) -> Iter<'_, T,> {
        //The chain is borrowed with `self`.
        unsafe { iters::new_iter(self.head, self.len,) }
    }
    /// Returns a mutable iterator over all values in the [`Queue`].
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T,> {
        unsafe { iters::new_iter_mut(self.head, self.len,) }
    }
}

impl<T: Clone,> Queue<T,> {
    /// Returns a deep copy of this [`Queue`].
    ///
    /// The copy is built completely before it is returned; if a value fails to clone or a
    /// [`Node`] fails to allocate every copied [`Node`] is released before the error or
    /// panic propagates.
    ///
    /// # Errors
    ///
    /// * [`Error::AllocationFailed`] if a [`Node`] could not be allocated.
    pub fn try_clone(&self) -> Result<Self,> {
        let mut chain = Queue::new();

        for value in self {
            if let Err(e) = chain.try_push_back(value.clone(),) {
                tracing::debug!(copied = chain.len(), len = self.len(), "queue copy rolled back");

                return Err(e)
            }
        }

        Ok(chain)
    }
    /// Replaces the values of this [`Queue`] with copies of the values in `source`.
    ///
    /// The replacement chain is built before the current chain is touched, so on failure
    /// this [`Queue`] keeps its previous values.
    ///
    /// # Params
    ///
    /// source --- The [`Queue`] to copy.
    ///
    /// # Errors
    ///
    /// * [`Error::AllocationFailed`] if a [`Node`] could not be allocated.
    pub fn try_clone_from(&mut self, source: &Self,) -> Result<(),> {
        let chain = source.try_clone()?;

        tracing::trace!(old = self.len(), new = chain.len(), "replacing queue chain");
        //Dropping the previous value releases the old chain.
        *self = chain; Ok(())
    }
}

impl<T: Clone,> Clone for Queue<T,> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
    fn clone_from(&mut self, source: &Self,) {
        let chain = source.clone();

        tracing::trace!(old = self.len(), new = chain.len(), "replacing queue chain");
        *self = chain;
    }
}

impl<T,> Default for Queue<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T,> Extend<T,> for Queue<T,> {
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = T>, {
        iter.into_iter().for_each(|item| self.push_back(item,))
    }
}

impl<'t, T: 't + Copy,> Extend<&'t T,> for Queue<T,> {
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = &'t T>, {
        self.extend(iter.into_iter().copied(),)
    }
}

impl<T,> FromIterator<T,> for Queue<T,> {
    fn from_iter<I,>(iter: I) -> Self
        where I: IntoIterator<Item = T>, {
        let mut queue = Queue::new();

        queue.extend(iter,); queue
    }
}

impl<T,> IntoIterator for Queue<T,> {
    type Item = T;
    type IntoIter = IntoIter<T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { iters::new_into_iter(self,) }
}

impl<'t, T,> IntoIterator for &'t Queue<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'t, T,> IntoIterator for &'t mut Queue<T,> {
    type Item = &'t mut T;
    type IntoIter = IterMut<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T: PartialEq,> PartialEq for Queue<T,> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter(),)
    }
}

impl<T: Eq,> Eq for Queue<T,> {}

impl<T: Debug,> Debug for Queue<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T,> Drop for Queue<T,> {
    #[inline]
    fn drop(&mut self,) { self.clear() }
}
