//! Binary table payload.
//!
//! Columns are stored column-major; the table is written row-major, so the
//! payload is a transposition: for each row, one value from every integer
//! column followed by one value from every float column.

use std::io::Write;

use tracing::trace;

use crate::endian::WORD_LEN;
use crate::error::Result;
use crate::stream::BlockStream;
use crate::types::Column;

/// Fixed-capacity staging buffer in front of a [`BlockStream`].
///
/// The buffer is flushed whenever the next value would not fit, and once more
/// by [`DataBuffer::finish`].
pub struct DataBuffer<'a, W: Write> {
    stream: &'a mut BlockStream<W>,
    buf: Vec<u8>,
    capacity: usize,
    flushes: usize,
}

impl<'a, W: Write> DataBuffer<'a, W> {
    /// Create a buffer of `capacity` bytes over `stream`.
    pub fn new(stream: &'a mut BlockStream<W>, capacity: usize) -> Self {
        let capacity = capacity.max(WORD_LEN);
        Self {
            stream,
            buf: Vec::with_capacity(capacity),
            capacity,
            flushes: 0,
        }
    }

    /// Append one value.
    pub fn push(&mut self, word: &[u8]) -> Result<()> {
        if self.buf.len() + word.len() > self.capacity {
            self.flush()?;
        }
        self.buf.extend_from_slice(word);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        trace!(bytes = self.buf.len(), "flushing data buffer");
        self.stream.write_raw(&self.buf)?;
        self.buf.clear();
        self.flushes += 1;
        Ok(())
    }

    /// Flush what is left. Returns the number of flushes performed.
    pub fn finish(mut self) -> Result<usize> {
        self.flush()?;
        Ok(self.flushes)
    }
}

/// Write `row_count` rows, integers first within each row.
///
/// Returns the number of payload bytes written.
pub fn write_data<W: Write>(
    stream: &mut BlockStream<W>,
    ints: &[Column],
    floats: &[Column],
    row_count: usize,
    capacity: usize,
) -> Result<u64> {
    let start = stream.bytes_written();
    let mut buffer = DataBuffer::new(stream, capacity);

    for row in 0..row_count {
        for column in ints.iter().chain(floats) {
            if let Some(word) = column.word(row) {
                buffer.push(word)?;
            }
        }
    }

    let flushes = buffer.finish()?;
    let written = stream.bytes_written() - start;
    trace!(bytes = written, flushes, "data region written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ints: &[Column], floats: &[Column], rows: usize, capacity: usize) -> Vec<u8> {
        let mut stream = BlockStream::new(Vec::new());
        let written = write_data(&mut stream, ints, floats, rows, capacity).unwrap();
        let (out, total) = stream.finish().unwrap();
        assert_eq!(written, total);
        out
    }

    #[test]
    fn test_transposed_order() {
        let ints = vec![Column::int32("A", &[1, 2]), Column::int32("B", &[3, 4])];
        let floats = vec![Column::float32("C", &[1.0, 2.0])];
        let out = run(&ints, &floats, 2, 1024);

        assert_eq!(out.len(), 2 * 3 * WORD_LEN);
        assert_eq!(&out[0..4], &1i32.to_be_bytes());
        assert_eq!(&out[4..8], &3i32.to_be_bytes());
        assert_eq!(&out[8..12], &1.0f32.to_be_bytes());
        assert_eq!(&out[12..16], &2i32.to_be_bytes());
        assert_eq!(&out[16..20], &4i32.to_be_bytes());
        assert_eq!(&out[20..24], &2.0f32.to_be_bytes());
    }

    #[test]
    fn test_small_buffer_matches_large() {
        let values: Vec<i32> = (0..100).collect();
        let floats: Vec<f32> = values.iter().map(|&v| v as f32 * 0.5).collect();
        let ints = vec![Column::int32("I", &values)];
        let floats = vec![Column::float32("F", &floats)];

        let large = run(&ints, &floats, 100, 1 << 18);
        let tiny = run(&ints, &floats, 100, 4);
        let odd = run(&ints, &floats, 100, 10);
        assert_eq!(large, tiny);
        assert_eq!(large, odd);
    }

    #[test]
    fn test_buffer_flushes_on_overflow() {
        let mut stream = BlockStream::new(Vec::new());
        let mut buffer = DataBuffer::new(&mut stream, 8);
        for _ in 0..5 {
            buffer.push(&[1, 2, 3, 4]).unwrap();
        }
        // 8 + 8 on overflow, 4 on finish
        assert_eq!(buffer.finish().unwrap(), 3);
        assert_eq!(stream.bytes_written(), 20);
    }

    #[test]
    fn test_no_rows() {
        let ints = vec![Column::int32("A", &[])];
        assert!(run(&ints, &[], 0, 16).is_empty());
    }
}
