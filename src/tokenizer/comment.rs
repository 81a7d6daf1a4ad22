use nom::{
    branch::alt,
    bytes::complete::take_until,
    character::complete::{char, one_of},
    combinator::{map, recognize, rest},
    error::context,
    sequence::{delimited, preceded},
};

use super::token::{Fragment, ParserResult};

/// `;` and `#` comments run to the end of the line and are discarded.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<Fragment> {
    context(
        "line comment",
        map(recognize(preceded(one_of(";#"), rest)), Fragment::Terminator),
    )(input)
}

/// `( ... )` comments end at the first `)`. Without one, the rest of the
/// line is swallowed.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_paren_comment(input: &str) -> ParserResult<Fragment> {
    context(
        "parenthesized comment",
        alt((
            map(
                recognize(delimited(char('('), take_until(")"), char(')'))),
                Fragment::Comment,
            ),
            map(recognize(preceded(char('('), rest)), Fragment::Unterminated),
        )),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<Fragment> {
    context("comment", alt((parse_line_comment, parse_paren_comment)))(input)
}
