//! Primary header record handling.
//!
//! The primary HDU carries no data; it only announces that extensions follow.
//!
//! # Structure
//!
//! 1. `SIMPLE  = T` (conforming file)
//! 2. `BITPIX  = 8`
//! 3. `NAXIS   = 0` (no data array)
//! 4. `EXTEND  = T` (extensions may follow)
//! 5. `END`

use crate::error::Result;

use super::card::{Card, end_card, keyword_card, logical_card};

/// Number of cards in the primary header.
pub const PRIMARY_CARD_COUNT: usize = 5;

/// Build the cards of the empty primary header.
pub fn build_primary_header() -> Result<Vec<Card>> {
    Ok(vec![
        logical_card("SIMPLE", true)?,
        keyword_card("BITPIX", 8)?,
        keyword_card("NAXIS", 0)?,
        logical_card("EXTEND", true)?,
        end_card(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_header() {
        let cards = build_primary_header().unwrap();
        assert_eq!(cards.len(), PRIMARY_CARD_COUNT);

        let lines: Vec<String> = cards
            .iter()
            .map(|c| String::from_utf8_lossy(c).trim_end().to_string())
            .collect();
        assert_eq!(
            lines,
            vec![
                "SIMPLE  =                    T",
                "BITPIX  =                    8",
                "NAXIS   =                    0",
                "EXTEND  =                    T",
                "END",
            ]
        );
    }
}
