//! Error types for FITS table writing.

use thiserror::Error;

/// Errors that can occur when building or writing a FITS table.
#[derive(Debug, Error)]
pub enum FitsError {
    /// Column length disagrees with the row count fixed by the first column.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    RowCountMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Header line does not fit in an 80-byte card.
    #[error("card line is {len} bytes, must be shorter than 80")]
    CardTooLong { len: usize },

    /// Header line contains bytes outside printable ASCII.
    #[error("card line contains non-printable or non-ASCII text: {text:?}")]
    InvalidCardText { text: String },

    /// Label exceeds the 8 character token width.
    #[error("label '{label}' is {len} characters, limit is 8")]
    LabelTooLong { label: String, len: usize },

    /// Label contains a quote or non-printable character.
    #[error("label {label:?} contains a quote or non-printable character")]
    InvalidLabel { label: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for FITS operations.
pub type Result<T> = std::result::Result<T, FitsError>;

/// Coarse classification of [`FitsError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Column shapes disagree.
    Shape,
    /// A card or label cannot be rendered into its fixed width.
    Layout,
    /// The output stream failed.
    Io,
}

impl FitsError {
    /// Create a RowCountMismatch error.
    pub fn row_count_mismatch(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::RowCountMismatch {
            column: column.into(),
            expected,
            actual,
        }
    }

    /// Create an InvalidCardText error.
    pub fn invalid_card_text(text: impl Into<String>) -> Self {
        Self::InvalidCardText { text: text.into() }
    }

    /// Create a LabelTooLong error.
    pub fn label_too_long(label: impl Into<String>, len: usize) -> Self {
        Self::LabelTooLong {
            label: label.into(),
            len,
        }
    }

    /// Create an InvalidLabel error.
    pub fn invalid_label(label: impl Into<String>) -> Self {
        Self::InvalidLabel {
            label: label.into(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RowCountMismatch { .. } => ErrorKind::Shape,
            Self::CardTooLong { .. }
            | Self::InvalidCardText { .. }
            | Self::LabelTooLong { .. }
            | Self::InvalidLabel { .. } => ErrorKind::Layout,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
