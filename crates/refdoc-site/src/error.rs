//! Error types for page paths and page rendering.

use refdoc_markup::MarkupError;

/// Error computing a page path.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Pages and symbols must have a non-empty title to be named on disk.
    #[error("Page title should not be empty")]
    InvalidTitle,
}

/// Error rendering a single page.
///
/// A page failing with this error is skipped; the rest of the run continues.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("{0}")]
    Path(#[from] PathError),
    #[error("Malformed markup: {0}")]
    Markup(#[from] MarkupError),
}
