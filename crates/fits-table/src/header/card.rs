//! Card image rendering.
//!
//! A card is one 80-byte ASCII header record, space padded, with no line
//! terminator. Value cards use the FITS fixed format:
//!
//! | Columns | Content                                  |
//! |---------|------------------------------------------|
//! | 1-8     | Keyword, left justified                  |
//! | 9-10    | `= `                                     |
//! | 11-30   | Numeric or logical value, right justified|
//! | 11-20   | Quoted string value (labels)             |

use std::fmt::Display;

use crate::error::{FitsError, Result};

/// Card length in bytes.
pub const CARD_LEN: usize = 80;

/// Width of a label token between its quotes.
pub const LABEL_LEN: usize = 8;

/// Width of the keyword field.
pub const KEYWORD_LEN: usize = 8;

/// Width of the right-justified value field in fixed format.
const VALUE_WIDTH: usize = 20;

/// Prefix of a commentary card.
pub const COMMENT_PREFIX: &str = "COMMENT    ";

/// One header record.
pub type Card = [u8; CARD_LEN];

/// Render `text` as a quoted, uppercased, space-padded 8-character token.
///
/// `"half"` becomes `'HALF    '`. Labels longer than 8 characters are rejected
/// rather than truncated.
pub fn label(text: &str) -> Result<String> {
    let len = text.chars().count();
    if len > LABEL_LEN {
        return Err(FitsError::label_too_long(text, len));
    }
    if !text.bytes().all(|b| is_printable(b) && b != b'\'') {
        return Err(FitsError::invalid_label(text));
    }
    Ok(format!("'{:<width$}'", text.to_ascii_uppercase(), width = LABEL_LEN))
}

/// Pad `line` with spaces to a full card.
///
/// The line must be shorter than 80 bytes and printable ASCII.
pub fn card(line: &str) -> Result<Card> {
    let bytes = line.as_bytes();
    if bytes.len() >= CARD_LEN {
        return Err(FitsError::CardTooLong { len: bytes.len() });
    }
    if !bytes.iter().copied().all(is_printable) {
        return Err(FitsError::invalid_card_text(line));
    }
    let mut record = [b' '; CARD_LEN];
    record[..bytes.len()].copy_from_slice(bytes);
    Ok(record)
}

/// `KEYWORD =                value` with the value ending in column 30.
pub fn keyword_card(keyword: &str, value: impl Display) -> Result<Card> {
    card(&format!(
        "{keyword:<kw$}= {value:>vw$}",
        kw = KEYWORD_LEN,
        vw = VALUE_WIDTH
    ))
}

/// Logical value card (`T` or `F`).
pub fn logical_card(keyword: &str, value: bool) -> Result<Card> {
    keyword_card(keyword, if value { "T" } else { "F" })
}

/// `KEYWORD = 'LABEL   '`.
pub fn string_card(keyword: &str, text: &str) -> Result<Card> {
    card(&format!("{keyword:<kw$}= {}", label(text)?, kw = KEYWORD_LEN))
}

/// Commentary card carrying `text` verbatim.
pub fn comment_card(text: &str) -> Result<Card> {
    card(&format!("{COMMENT_PREFIX}{text}"))
}

/// End-of-header sentinel.
pub fn end_card() -> Card {
    let mut record = [b' '; CARD_LEN];
    record[..3].copy_from_slice(b"END");
    record
}

fn is_printable(b: u8) -> bool {
    (b' '..=b'~').contains(&b)
}
