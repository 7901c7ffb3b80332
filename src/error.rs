use thiserror::Error;

/// The errors a [`Queue`](crate::Queue) and its cursors can report.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy,)]
#[non_exhaustive]
pub enum Error {
    /// The front of an empty queue was requested.
    #[error("the queue is empty")]
    EmptyQueue,
    /// A cursor was dereferenced or advanced at or past the end of its queue.
    #[error("invalid cursor operation at position {position} of a queue with {len} values")]
    InvalidOperation {
        /// The 1-based position of the cursor.
        position: usize,
        /// The length of the queue at the time of the call.
        len: usize,
    },
    /// The allocator could not provide memory for a new node.
    #[error("failed to allocate a node of {size} bytes (align {align})")]
    AllocationFailed {
        size: usize,
        align: usize,
    },
    /// A bounded value was created with a non-positive maximum.
    #[error("the maximum of a bounded value must be positive, got {max}")]
    InvalidArgument {
        max: i32,
    },
}

pub type Result<T,> = std::result::Result<T, Error,>;
