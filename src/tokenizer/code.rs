//! # Command Words and Line Numbers
//!
//! A command word starts with any character in the inclusive range `A..=z`
//! and runs to the next whitespace or the end of the line. That range also
//! admits `[`, `\`, `]`, `^`, `_` and the backtick, which start words too.
//!
//! `N`/`n` words are line numbers. They are recognized and skipped without
//! being validated, so `N10`, `n` and `Nfoo` all vanish from the result.

use nom::{
    bytes::complete::take_till,
    character::complete::{one_of, satisfy},
    combinator::{map, recognize},
    error::context,
    sequence::pair,
};

use super::{
    token::{Fragment, ParserResult},
    whitespace::is_separator,
};

pub fn is_code_start(c: char) -> bool {
    ('A'..='z').contains(&c)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_line_number(input: &str) -> ParserResult<Fragment> {
    context(
        "line number",
        map(
            recognize(pair(one_of("Nn"), take_till(is_separator))),
            Fragment::LineNumber,
        ),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_code(input: &str) -> ParserResult<Fragment> {
    context(
        "code",
        map(
            recognize(pair(satisfy(is_code_start), take_till(is_separator))),
            Fragment::Code,
        ),
    )(input)
}
