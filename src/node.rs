use crate::{Error, Result,};
use std::{
    alloc::{self, Layout,},
    ptr::NonNull,
};

/// A link in a singly linked chain.
///
/// A [`Node`] logically owns the rest of the chain through `next`; the chain is freed one
/// [`Node`] at a time with [`Node::free`].
pub struct Node<T,> {
    /// The value inside this [`Node`].
    pub data: T,
    /// The next [`Node`] of the chain.
    pub next: Option<NonNull<Node<T,>>>,
}

impl<T,> Node<T,> {
    /// The memory layout of a [`Node`].
    ///
    /// A [`Node`] is never zero sized because of its `next` link.
    pub const LAYOUT: Layout = Layout::new::<Self>();

    /// Allocates a new, unlinked [`Node`] and returns the owning pointer to it.
    ///
    /// If the allocation fails `data` is dropped and nothing else is touched.
    ///
    /// # Params
    ///
    /// data --- The value to populate the [`Node`] with.
    pub fn try_alloc(data: T,) -> Result<NonNull<Self,>> {
        let ptr = unsafe { alloc::alloc(Self::LAYOUT,) } as *mut Self;

        match NonNull::new(ptr,) {
            None => {
                tracing::debug!(size = Self::LAYOUT.size(), "node allocation failed");

                Err(Error::AllocationFailed { size: Self::LAYOUT.size(), align: Self::LAYOUT.align(), })
            },
            Some(ptr) => {
                unsafe { ptr.as_ptr().write(Node { data, next: None, },) }

                Ok(ptr)
            },
        }
    }
    /// Allocates a new, unlinked [`Node`] and returns the owning pointer to it.
    ///
    /// # Params
    ///
    /// data --- The value to populate the [`Node`] with.
    ///
    /// # Panics
    ///
    /// * Aborts through [`alloc::handle_alloc_error`] if the allocation fails.
    #[inline]
    pub fn alloc(data: T,) -> NonNull<Self,> {
        match Self::try_alloc(data,) {
            Ok(node) => node,
            Err(_) => alloc::handle_alloc_error(Self::LAYOUT,),
        }
    }
    /// Frees a [`Node`] and returns its value and its `next` link.
    ///
    /// # Unsafe
    ///
    /// `node` must come from [`Node::try_alloc`] or [`Node::alloc`], must not have been
    /// freed already and must not be used afterwards.
    pub unsafe fn free(node: NonNull<Self,>,) -> (T, Option<NonNull<Self,>>,) {
        //The memory came from the global allocator with `Box`s layout.
        let Node { data, next, } = *Box::from_raw(node.as_ptr(),);

        (data, next,)
    }
}
