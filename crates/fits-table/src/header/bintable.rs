//! Binary table extension header.
//!
//! # Structure
//!
//! | Order | Card        | Value                         |
//! |-------|-------------|-------------------------------|
//! | 1     | `XTENSION`  | `'BINTABLE'`                  |
//! | 2     | `BITPIX`    | 8                             |
//! | 3     | `NAXIS`     | 2                             |
//! | 4     | `NAXIS1`    | bytes per row                 |
//! | 5     | `NAXIS2`    | row count                     |
//! | 6     | `PCOUNT`    | 0                             |
//! | 7     | `GCOUNT`    | 1                             |
//! | 8     | `TFIELDS`   | field count                   |
//! | 9     | `COMMENT`   | `UTC=YYYY-MM-DD.HH:MM:SS`     |
//! | 10    | `COMMENT`   | one per user comment          |
//! | 11    | `TTYPEn`/`TFORMn` | one pair per field      |
//! | 12    | `END`       |                               |

use chrono::NaiveDateTime;

use crate::endian::WORD_LEN;
use crate::error::Result;
use crate::types::ColumnType;

use super::card::{Card, comment_card, end_card, keyword_card, string_card};
use super::datetime::format_utc_stamp;

/// Cards that do not depend on fields or comments: eight mandatory
/// keywords, the timestamp and `END`.
const FIXED_CARD_COUNT: usize = 10;

/// One `TTYPEn`/`TFORMn` pair.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef<'a> {
    pub name: &'a str,
    pub data_type: ColumnType,
}

/// Everything the extension header describes.
#[derive(Debug, Clone)]
pub struct BintableHeader<'a> {
    /// Fields in output order (integers first).
    pub fields: Vec<FieldDef<'a>>,
    pub row_count: usize,
    pub comments: &'a [String],
    pub timestamp: NaiveDateTime,
}

impl BintableHeader<'_> {
    /// Bytes per row (`NAXIS1`).
    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.fields.len() * WORD_LEN
    }
}

/// Cards in a binary table header with `fields` fields and `comments` comments.
#[must_use]
pub const fn bintable_card_count(fields: usize, comments: usize) -> usize {
    FIXED_CARD_COUNT + comments + 2 * fields
}

/// Build the cards of the binary table header.
pub fn build_bintable_header(header: &BintableHeader<'_>) -> Result<Vec<Card>> {
    let mut cards = Vec::with_capacity(bintable_card_count(
        header.fields.len(),
        header.comments.len(),
    ));

    cards.push(string_card("XTENSION", "BINTABLE")?);
    cards.push(keyword_card("BITPIX", 8)?);
    cards.push(keyword_card("NAXIS", 2)?);
    cards.push(keyword_card("NAXIS1", header.row_bytes())?);
    cards.push(keyword_card("NAXIS2", header.row_count)?);
    // No variable length arrays.
    cards.push(keyword_card("PCOUNT", 0)?);
    cards.push(keyword_card("GCOUNT", 1)?);
    cards.push(keyword_card("TFIELDS", header.fields.len())?);

    cards.push(comment_card(&format_utc_stamp(header.timestamp))?);
    for comment in header.comments {
        cards.push(comment_card(comment)?);
    }

    for (idx, field) in header.fields.iter().enumerate() {
        let n = idx + 1;
        cards.push(string_card(&format!("TTYPE{n}"), field.name)?);
        cards.push(string_card(
            &format!("TFORM{n}"),
            field.data_type.tform_code(),
        )?);
    }

    cards.push(end_card());
    Ok(cards)
}
