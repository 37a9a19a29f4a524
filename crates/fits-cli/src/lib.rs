//! CLI library components for the FITS table writer.

pub mod input;
pub mod logging;
