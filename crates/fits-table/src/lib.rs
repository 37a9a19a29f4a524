//! FITS binary table writer.
//!
//! This crate serializes a set of equal-length numeric columns into a FITS file
//! made of two header-data units: an empty primary unit and one `BINTABLE`
//! extension holding the data.
//!
//! # Features
//!
//! - 32-bit signed integer (`J`) and 32-bit IEEE float (`E`) columns
//! - Free-text `COMMENT` cards and a UTC timestamp card
//! - Big-endian payload regardless of host byte order
//! - Row-major output transposed from column-major input, written through a
//!   fixed-capacity buffer
//! - Every header and data section padded to the 2880-byte FITS block
//!
//! # Example
//!
//! ```no_run
//! use fits_table::FitsTableWriter;
//!
//! let mut writer = FitsTableWriter::new();
//! writer.add_comment("Hi there");
//! writer.add_float_column("HALF", &[333.0; 5]).unwrap();
//! writer.add_int_column("EVIL", &[666; 5]).unwrap();
//!
//! let bytes = writer.write("example.fits").unwrap();
//! assert_eq!(bytes % 2880, 0);
//! ```
//!
//! # Layout
//!
//! ```text
//! [primary header][bintable header][row 0][row 1]...[row n-1][zero pad]
//! ```
//!
//! Integer columns always precede float columns within a row, whatever order
//! they were registered in.

pub mod data;
pub mod endian;
mod error;
pub mod header;
pub mod stream;
mod types;
mod writer;

// Re-export error types
pub use error::{ErrorKind, FitsError, Result};

// Re-export core types
pub use types::{Column, ColumnType, DEFAULT_BUFFER_CAPACITY, WriterOptions};

// Re-export writer functionality
pub use writer::{FitsTableWriter, TableLayout, TableState};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
