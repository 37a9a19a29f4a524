//! Core types for FITS table writing.

mod column;
mod options;

pub use column::{Column, ColumnType};
pub use options::{DEFAULT_BUFFER_CAPACITY, WriterOptions};
