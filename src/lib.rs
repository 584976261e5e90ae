//! Normalization of numbers dialled inside a private numbering plan into
//! canonical international form (`+<international prefix><number>`).
//!
//! The country table is supplied by the caller as a slice of
//! [`CountryEntry`] and borrowed by [`DialNumberUtil`] for its whole life.

mod interfaces;
mod dialnumberutil;
mod prefix_matcher;

#[cfg(test)]
mod tests;

pub use dialnumberutil::{
    CountryEntry, DialNumberUtil, DialledNumberFormat, InvalidNumberError, InvalidNumberErrorKind,
    MatchStrategy, is_valid_format,
};
