use nom::{error::VerboseError, IResult};
use serde::Serialize;

/// A single command word copied verbatim from a line, e.g. `G1` or `X10.5`.
///
/// No structure is imposed on the text after the leading letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The character that introduced this code.
    pub fn letter(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One classified run of characters, as produced by the fragment parsers.
#[derive(Debug, Clone, PartialEq, Eq, strum::AsRefStr)]
pub enum Fragment<'a> {
    Whitespace,
    // ; and # comments, the rest of the line is dropped
    Terminator(&'a str),
    // ( ... ) including both parentheses
    Comment(&'a str),
    Unterminated(&'a str),
    LineNumber(&'a str),
    Code(&'a str),
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
