//! Markup error types.

/// Error returned when a markup call sequence breaks the writer's contract.
///
/// These are programmer errors: the page being generated is malformed and
/// should be abandoned rather than written out.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// `close_tag` was called with no open tag on the stack.
    #[error("Tag stack underflow: no open tag to close")]
    StackUnderflow,
    /// Output was finished while tags were still open.
    #[error("Unclosed tags at end of output: {0}")]
    UnclosedTags(String),
    /// A table row does not have one value per column.
    #[error("Table row has {actual} values but the table has {expected} columns")]
    ColumnMismatch {
        /// Number of columns in the table.
        expected: usize,
        /// Number of values supplied for the row.
        actual: usize,
    },
}
