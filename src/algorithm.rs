//! Generic algorithms over a [`Queue`], written only in terms of its cursors.

use crate::{Queue, Result,};

/// Returns a new [`Queue`] holding copies of the values which pass `predicate`, in their
/// original order.
///
/// `queue` is not modified.
///
/// # Params
///
/// queue --- The [`Queue`] to filter.
/// predicate --- The filter function values need to pass to be copied.
///
/// # Errors
///
/// * [`Error::AllocationFailed`](crate::Error::AllocationFailed) if a node for the new
///   [`Queue`] could not be allocated. The partial result is dropped.
pub fn filter<T, P,>(queue: &Queue<T,>, mut predicate: P,) -> Result<Queue<T,>>
    where T: Clone, P: FnMut(&T,) -> bool, {
    let mut filtered = Queue::new();
    if queue.is_empty() { return Ok(filtered) }

    let end = queue.end();
    let mut it = queue.begin();
    while it != end {
        let value = it.value()?;
        if predicate(value,) { filtered.try_push_back(value.clone(),)? }

        it.advance()?;
    }

    Ok(filtered)
}

/// Applies `operation` to every value of `queue` in place, front to back.
///
/// # Params
///
/// queue --- The [`Queue`] to transform.
/// operation --- The function applied to each value.
pub fn transform<T, F,>(queue: &mut Queue<T,>, mut operation: F,) -> Result<(),>
    where F: FnMut(&mut T,), {
    if queue.is_empty() { return Ok(()) }

    let mut it = queue.begin_mut();
    while !it.is_end() {
        operation(it.get_mut()?,);
        it.advance()?;
    }

    Ok(())
}
