//! Output stream context with FITS block accounting.
//!
//! [`BlockStream`] wraps the sink of one write pass and counts every byte that
//! passes through it, so the padders know how far the stream is from the next
//! 2880-byte boundary.

use std::io::Write;

use crate::error::Result;
use crate::header::Card;

/// FITS logical record (block) length in bytes.
pub const BLOCK_LEN: usize = 2880;

/// Number of filler bytes needed after `bytes_written` bytes.
///
/// Always in `1..=BLOCK_LEN`: an aligned stream still gets a full block.
#[must_use]
pub const fn pad_len(bytes_written: u64) -> usize {
    BLOCK_LEN - (bytes_written % BLOCK_LEN as u64) as usize
}

/// Size of a section of `len` bytes once padded with [`pad_len`].
#[must_use]
pub const fn padded_len(len: u64) -> u64 {
    len + pad_len(len) as u64
}

/// Sink plus running byte counter for a single write pass.
pub struct BlockStream<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> BlockStream<W> {
    /// Start a pass at byte zero.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Bytes emitted so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Emit one header card.
    pub fn write_card(&mut self, card: &Card) -> Result<()> {
        self.write_raw(card)
    }

    /// Emit a sequence of header cards.
    pub fn write_cards(&mut self, cards: &[Card]) -> Result<()> {
        for card in cards {
            self.write_card(card)?;
        }
        Ok(())
    }

    /// Emit raw payload bytes.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Fill with spaces up to the next block boundary. Used after headers.
    pub fn pad_with_spaces(&mut self) -> Result<usize> {
        self.pad_with(b' ')
    }

    /// Fill with NUL bytes up to the next block boundary. Used after data.
    pub fn pad_with_zeros(&mut self) -> Result<usize> {
        self.pad_with(0)
    }

    fn pad_with(&mut self, fill: u8) -> Result<usize> {
        let pad = pad_len(self.bytes_written);
        self.write_raw(&vec![fill; pad])?;
        Ok(pad)
    }

    /// Flush the sink and hand it back.
    pub fn finish(mut self) -> Result<(W, u64)> {
        self.inner.flush()?;
        Ok((self.inner, self.bytes_written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::card;

    #[test]
    fn test_pad_len() {
        assert_eq!(pad_len(0), BLOCK_LEN);
        assert_eq!(pad_len(400), 2480);
        assert_eq!(pad_len(2879), 1);
        assert_eq!(pad_len(2880), BLOCK_LEN);
        assert_eq!(pad_len(2881), 2879);
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 2880);
        assert_eq!(padded_len(40), 2880);
        assert_eq!(padded_len(2880), 5760);
    }

    #[test]
    fn test_card_advances_counter() {
        let mut stream = BlockStream::new(Vec::new());
        stream.write_card(&card("END").unwrap()).unwrap();
        assert_eq!(stream.bytes_written(), 80);
        stream
            .write_cards(&[card("A").unwrap(), card("B").unwrap()])
            .unwrap();
        assert_eq!(stream.bytes_written(), 240);
    }

    #[test]
    fn test_pad_with_spaces() {
        let mut stream = BlockStream::new(Vec::new());
        stream.write_card(&card("END").unwrap()).unwrap();
        let pad = stream.pad_with_spaces().unwrap();
        assert_eq!(pad, 2800);
        let (out, total) = stream.finish().unwrap();
        assert_eq!(total, 2880);
        assert_eq!(out.len(), 2880);
        assert!(out[3..].iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_pad_with_zeros_on_aligned_stream() {
        let mut stream = BlockStream::new(Vec::new());
        stream.write_raw(&[1u8; BLOCK_LEN]).unwrap();
        let pad = stream.pad_with_zeros().unwrap();
        assert_eq!(pad, BLOCK_LEN);
        let (out, total) = stream.finish().unwrap();
        assert_eq!(total, 5760);
        assert!(out[BLOCK_LEN..].iter().all(|&b| b == 0));
    }
}
