/// Errors produced by [`List`](crate::List) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The operation needs an element, but the list (or the cursor position)
    /// has none.
    #[error("`{operation}` is out of range on an empty list")]
    OutOfRange {
        /// Name of the failing operation.
        operation: &'static str,
    },
}

impl ListError {
    pub(crate) fn out_of_range(operation: &'static str) -> Self {
        debug!(operation, "out of range");
        ListError::OutOfRange { operation }
    }
}

/// A `Result` alias whose error is [`ListError`].
pub type Result<T> = core::result::Result<T, ListError>;
