//! # Whitespace Handling
//!
//! Whitespace only separates fields on a command line. It is consumed and
//! never recorded in the resulting [`Line`](super::line::Line).
//!
//! The predicate is [`char::is_whitespace`], so tabs, carriage returns and
//! the Unicode space characters all count as separators.

use nom::{bytes::complete::take_while1, combinator::map, error::context};

use super::token::{Fragment, ParserResult};

/// Returns true for characters that end a field.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
}

/// Parses a run of whitespace from the input string.
///
/// # Examples
///
/// ```
/// # use gcode_scan::tokenizer::whitespace::parse_whitespace;
/// # use gcode_scan::tokenizer::token::Fragment;
/// let (rest, fragment) = parse_whitespace(" \t G1").unwrap();
/// assert_eq!(fragment, Fragment::Whitespace);
/// assert_eq!(rest, "G1");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<Fragment> {
    context(
        "whitespace",
        map(take_while1(is_separator), |_| Fragment::Whitespace),
    )(input)
}
