//! Position handles into a [`Queue`].
//!
//! A [`Position`] records a 1-based position and the [`Queue`] it was taken from. It
//! never holds a node; every dereference walks the chain from the
//! head of the [`Queue`] again, so dereferencing near the back of a long [`Queue`] costs
//! time linear in the position.
//!
//! The position one past the last value is the end position. Dereferencing or advancing a
//! [`Position`] at or past the end position fails with [`Error::InvalidOperation`]; the
//! check is made against the length of the [`Queue`] at the time of the call.

use crate::{Queue, Error, Result,};
use std::{
    fmt::{self, Debug,},
    ops::{Deref, DerefMut,},
    ptr,
};

/// A read only [`Position`].
pub type Cursor<'q, T,> = Position<&'q Queue<T,>>;
/// A [`Position`] which can mutate the values it points at.
pub type CursorMut<'q, T,> = Position<&'q mut Queue<T,>>;

/// Creates a new [`Position`] from parts.
///
/// # Params
///
/// queue --- The borrow of the [`Queue`] to point into.
/// position --- The 1-based position to start at.
#[inline]
pub(crate) fn new_position<Q,>(queue: Q, position: usize,) -> Position<Q,> {
    Position { queue, position, }
}

/// A position in a [`Queue`], generic over the borrow of the [`Queue`].
#[derive(Clone, Copy,)]
pub struct Position<Q,> {
    /// The [`Queue`] this [`Position`] points into.
    queue: Q,
    /// The 1-based position in `queue`.
    position: usize,
}

impl<T, Q,> Position<Q,>
    where Q: Deref<Target = Queue<T,>>, {
    /// Fails if this [`Position`] is at or past the end position.
    fn check(&self,) -> Result<(),> {
        if self.position > self.queue.len() {
            Err(Error::InvalidOperation { position: self.position, len: self.queue.len(), })
        } else { Ok(()) }
    }
    /// Returns the 1-based position.
    #[inline]
    pub fn position(&self,) -> usize { self.position }
    /// `true` if this [`Position`] is at or past the end position of its [`Queue`].
    #[inline]
    pub fn is_end(&self,) -> bool { self.position > self.queue.len() }
    /// Returns the [`Queue`] this [`Position`] points into.
    #[inline]
    pub fn queue(&self,) -> &Queue<T,> { &self.queue }
    /// Moves to the next position.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperation`] if this [`Position`] is already at the end.
    pub fn advance(&mut self,) -> Result<&mut Self,> {
        self.check()?;
        self.position += 1;

        Ok(self)
    }
    /// Returns the value at this [`Position`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperation`] if this [`Position`] is at or past the end.
    pub fn get(&self,) -> Result<&T,> {
        self.check()?;

        self.queue.node(self.position,)
            .map(|node| &node.data)
            .ok_or(Error::InvalidOperation { position: self.position, len: self.queue.len(), },)
    }
}

impl<'q, T,> Position<&'q Queue<T,>> {
    /// Returns the value at this [`Cursor`], borrowed for as long as the [`Queue`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperation`] if this [`Cursor`] is at or past the end.
    pub fn value(&self,) -> Result<&'q T,> {
        let queue = self.queue;

        self.check()?;
        queue.node(self.position,)
            .map(|node| &node.data)
            .ok_or(Error::InvalidOperation { position: self.position, len: queue.len(), },)
    }
    /// Moves to the next position and returns a copy of this [`Cursor`] from before the move.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperation`] if this [`Cursor`] is already at the end.
    pub fn post_advance(&mut self,) -> Result<Self,> {
        let prev = *self;

        self.advance()?;
        Ok(prev)
    }
}

impl<'q, T,> Position<&'q mut Queue<T,>> {
    /// Moves to the next position and returns a read only snapshot of this [`CursorMut`]
    /// from before the move.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperation`] if this [`CursorMut`] is already at the end.
    pub fn post_advance(&mut self,) -> Result<Cursor<'_, T,>,> {
        let prev = self.position;

        self.advance()?;
        Ok(new_position(&*self.queue, prev,))
    }
}

impl<T, Q,> Position<Q,>
    where Q: DerefMut<Target = Queue<T,>>, {
    /// Returns the value at this [`Position`] mutably.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperation`] if this [`Position`] is at or past the end.
    pub fn get_mut(&mut self,) -> Result<&mut T,> {
        self.check()?;

        let (position, len,) = (self.position, self.queue.len(),);
        self.queue.node_mut(position,)
            .map(|node| &mut node.data)
            .ok_or(Error::InvalidOperation { position, len, },)
    }
}

impl<T, Q, R,> PartialEq<Position<R,>> for Position<Q,>
    where Q: Deref<Target = Queue<T,>>, R: Deref<Target = Queue<T,>>, {
    /// Two [`Position`]s are equal if they point into the same [`Queue`] at the same
    /// position.
    #[inline]
    fn eq(&self, rhs: &Position<R,>) -> bool {
        ptr::eq(&*self.queue, &*rhs.queue,) && self.position == rhs.position
    }
}

impl<T, Q,> Eq for Position<Q,>
    where Q: Deref<Target = Queue<T,>>, {}

impl<T, Q,> Debug for Position<Q,>
    where Q: Deref<Target = Queue<T,>>, {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_struct("Position",)
            .field("position", &self.position,)
            .field("len", &self.queue.len(),)
            .finish()
    }
}
