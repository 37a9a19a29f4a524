//! FITS header card rendering and building.
//!
//! This module handles the header records of the two HDUs written:
//! - Card images and label tokens
//! - The empty primary header
//! - The binary table extension header

pub mod bintable;
pub mod card;
pub mod datetime;
pub mod primary;

// Re-export commonly used items
pub use bintable::{BintableHeader, FieldDef, bintable_card_count, build_bintable_header};
pub use card::{
    CARD_LEN, COMMENT_PREFIX, Card, KEYWORD_LEN, LABEL_LEN, card, comment_card, end_card,
    keyword_card, label, logical_card, string_card,
};
pub use datetime::{format_utc_stamp, utc_now};
pub use primary::{PRIMARY_CARD_COUNT, build_primary_header};
