//! FITS table writer.
//!
//! Collects columns and comments, then serializes them as a primary HDU
//! followed by one binary table HDU.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, info_span};

use crate::data::write_data;
use crate::endian::WORD_LEN;
use crate::error::{FitsError, Result};
use crate::header::{
    BintableHeader, CARD_LEN, FieldDef, PRIMARY_CARD_COUNT, bintable_card_count,
    build_bintable_header, build_primary_header,
};
use crate::stream::{BlockStream, padded_len};
use crate::types::{Column, WriterOptions};

/// Registration state of a [`FitsTableWriter`].
///
/// A write in progress borrows the writer, so registration cannot overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Nothing registered yet.
    Empty,
    /// Columns or comments registered.
    Populated,
}

/// Planned byte layout of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Rows in the table (`NAXIS2`).
    pub row_count: usize,
    /// Fields per row (`TFIELDS`).
    pub field_count: usize,
    /// Bytes per row (`NAXIS1`).
    pub row_bytes: usize,
    /// Cards in both headers, `END` included.
    pub header_cards: usize,
    /// Bytes of both headers after block padding.
    pub header_bytes: u64,
    /// Payload bytes before padding.
    pub data_bytes: u64,
    /// Payload bytes after block padding.
    pub data_padded_bytes: u64,
    /// Total file size.
    pub file_bytes: u64,
}

/// Writer for a FITS file holding one binary table of equal-length columns.
#[derive(Debug, Clone, Default)]
pub struct FitsTableWriter {
    ints: Vec<Column>,
    floats: Vec<Column>,
    comments: Vec<String>,
    row_count: Option<usize>,
    options: WriterOptions,
}

impl FitsTableWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with options.
    #[must_use]
    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Writer options.
    #[must_use]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Add a 32-bit integer column.
    ///
    /// Fails without modifying the table if `values` does not match the row
    /// count fixed by the first column.
    pub fn add_int_column(&mut self, name: impl Into<String>, values: &[i32]) -> Result<()> {
        let name = name.into();
        self.check_rows(&name, values.len())?;
        self.ints.push(Column::int32(name, values));
        self.row_count = Some(values.len());
        Ok(())
    }

    /// Add a 32-bit float column.
    ///
    /// Fails without modifying the table if `values` does not match the row
    /// count fixed by the first column.
    pub fn add_float_column(&mut self, name: impl Into<String>, values: &[f32]) -> Result<()> {
        let name = name.into();
        self.check_rows(&name, values.len())?;
        self.floats.push(Column::float32(name, values));
        self.row_count = Some(values.len());
        Ok(())
    }

    /// Add a free-text comment card.
    ///
    /// Text that does not fit in a card is reported when writing.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    fn check_rows(&self, name: &str, len: usize) -> Result<()> {
        match self.row_count {
            Some(expected) if expected != len => {
                Err(FitsError::row_count_mismatch(name, expected, len))
            }
            _ => Ok(()),
        }
    }

    /// Current registration state.
    #[must_use]
    pub fn state(&self) -> TableState {
        if self.column_count() == 0 && self.comments.is_empty() {
            TableState::Empty
        } else {
            TableState::Populated
        }
    }

    /// Rows per column, or 0 before any column is added.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count.unwrap_or(0)
    }

    /// Number of registered columns of both types.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.ints.len() + self.floats.len()
    }

    /// Columns in output order: integers, then floats.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.ints.iter().chain(&self.floats)
    }

    /// Registered comments.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Compute the file layout without writing anything.
    #[must_use]
    pub fn layout(&self) -> TableLayout {
        let row_count = self.row_count();
        let field_count = self.column_count();
        let row_bytes = field_count * WORD_LEN;
        let bintable_cards = bintable_card_count(field_count, self.comments.len());
        let header_bytes = padded_len((PRIMARY_CARD_COUNT * CARD_LEN) as u64)
            + padded_len((bintable_cards * CARD_LEN) as u64);
        let data_bytes = (row_bytes * row_count) as u64;
        let data_padded_bytes = padded_len(data_bytes);

        TableLayout {
            row_count,
            field_count,
            row_bytes,
            header_cards: PRIMARY_CARD_COUNT + bintable_cards,
            header_bytes,
            data_bytes,
            data_padded_bytes,
            file_bytes: header_bytes + data_padded_bytes,
        }
    }

    /// Write the table to a file, replacing any existing file.
    ///
    /// Returns the number of bytes written. On error the file is left
    /// incomplete.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let span = info_span!("write_fits", path = %path.display());
        let _guard = span.enter();

        let file = File::create(path)?;
        let (writer, bytes) = self.write_stream(BufWriter::new(file))?;
        writer
            .into_inner()
            .map_err(std::io::IntoInnerError::into_error)?;

        info!(
            bytes,
            rows = self.row_count(),
            fields = self.column_count(),
            "FITS table written"
        );
        Ok(bytes)
    }

    /// Write the table to any sink. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<u64> {
        self.write_stream(sink).map(|(_, bytes)| bytes)
    }

    fn write_stream<W: Write>(&self, sink: W) -> Result<(W, u64)> {
        let layout = self.layout();
        debug!(?layout, "planned layout");

        let mut stream = BlockStream::new(sink);
        self.write_primary_hdu(&mut stream)?;
        self.write_bintable_hdu(&mut stream)?;

        let data_bytes = write_data(
            &mut stream,
            &self.ints,
            &self.floats,
            self.row_count(),
            self.options.effective_buffer_capacity(),
        )?;
        let pad = stream.pad_with_zeros()?;
        debug!(data_bytes, pad, "data region written");

        let (sink, bytes) = stream.finish()?;
        debug_assert_eq!(bytes, layout.file_bytes);
        Ok((sink, bytes))
    }

    fn write_primary_hdu<W: Write>(&self, stream: &mut BlockStream<W>) -> Result<()> {
        stream.write_cards(&build_primary_header()?)?;
        let pad = stream.pad_with_spaces()?;
        debug!(pad, "primary header written");
        Ok(())
    }

    fn write_bintable_hdu<W: Write>(&self, stream: &mut BlockStream<W>) -> Result<()> {
        let header = BintableHeader {
            fields: self
                .columns()
                .map(|column| FieldDef {
                    name: &column.name,
                    data_type: column.data_type,
                })
                .collect(),
            row_count: self.row_count(),
            comments: &self.comments,
            timestamp: self.options.get_timestamp(),
        };
        let cards = build_bintable_header(&header)?;
        stream.write_cards(&cards)?;
        let pad = stream.pad_with_spaces()?;
        debug!(cards = cards.len(), pad, "binary table header written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::stream::BLOCK_LEN;
    use chrono::NaiveDate;

    fn fixed_options() -> WriterOptions {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 45)
            .unwrap();
        WriterOptions::new().with_timestamp(dt)
    }

    #[test]
    fn test_state_transitions() {
        let mut writer = FitsTableWriter::new();
        assert_eq!(writer.state(), TableState::Empty);
        writer.add_comment("note");
        assert_eq!(writer.state(), TableState::Populated);
    }

    #[test]
    fn test_row_count_mismatch() {
        let mut writer = FitsTableWriter::new();
        writer.add_int_column("A", &[1, 2, 3]).unwrap();
        let err = writer.add_float_column("B", &[1.0, 2.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert!(matches!(
            err,
            FitsError::RowCountMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
        assert_eq!(writer.column_count(), 1);
        assert_eq!(writer.row_count(), 3);
    }

    #[test]
    fn test_empty_first_column_fixes_rows() {
        let mut writer = FitsTableWriter::new();
        writer.add_int_column("A", &[]).unwrap();
        assert!(writer.add_int_column("B", &[1]).is_err());
        assert!(writer.add_float_column("C", &[]).is_ok());
    }

    #[test]
    fn test_columns_integers_first() {
        let mut writer = FitsTableWriter::new();
        writer.add_float_column("F1", &[0.0]).unwrap();
        writer.add_int_column("I1", &[0]).unwrap();
        writer.add_float_column("F2", &[0.0]).unwrap();
        writer.add_int_column("I2", &[0]).unwrap();
        let names: Vec<&str> = writer.columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["I1", "I2", "F1", "F2"]);
    }

    #[test]
    fn test_layout_matches_output() {
        let mut writer = FitsTableWriter::with_options(fixed_options());
        writer.add_int_column("A", &[1; 1000]).unwrap();
        writer.add_float_column("B", &[2.0; 1000]).unwrap();
        writer.add_comment("layout");

        let layout = writer.layout();
        assert_eq!(layout.row_bytes, 8);
        assert_eq!(layout.data_bytes, 8000);
        assert_eq!(layout.data_padded_bytes, 8640);
        assert_eq!(layout.header_bytes, 2 * BLOCK_LEN as u64);

        let mut out = Vec::new();
        let bytes = writer.write_to(&mut out).unwrap();
        assert_eq!(bytes, layout.file_bytes);
        assert_eq!(out.len() as u64, bytes);
    }

    #[test]
    fn test_full_header_block_gets_filler_block() {
        // 10 fixed cards + 2 comments + 12 fields * 2 = 36 cards = one full block
        let mut writer = FitsTableWriter::with_options(fixed_options());
        for i in 0..12 {
            writer.add_int_column(format!("C{i}"), &[i]).unwrap();
        }
        writer.add_comment("one");
        writer.add_comment("two");

        let layout = writer.layout();
        assert_eq!(layout.header_cards, 5 + 36);
        assert_eq!(layout.header_bytes, 3 * BLOCK_LEN as u64);

        let mut out = Vec::new();
        writer.write_to(&mut out).unwrap();
        let filler = &out[2 * BLOCK_LEN..3 * BLOCK_LEN];
        assert!(filler.iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_empty_table_writes() {
        let writer = FitsTableWriter::with_options(fixed_options());
        let mut out = Vec::new();
        let bytes = writer.write_to(&mut out).unwrap();
        assert_eq!(bytes, 3 * BLOCK_LEN as u64);
        assert!(out[2 * BLOCK_LEN..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_long_comment_is_layout_error() {
        let mut writer = FitsTableWriter::new();
        writer.add_int_column("A", &[1]).unwrap();
        writer.add_comment("x".repeat(69));
        let err = writer.write_to(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Layout);
    }

    #[test]
    fn test_long_name_is_layout_error() {
        let mut writer = FitsTableWriter::new();
        writer.add_float_column("TEMPERATURE", &[1.0]).unwrap();
        let err = writer.write_to(Vec::new()).unwrap_err();
        assert!(matches!(err, FitsError::LabelTooLong { .. }));
    }
}
