use std::str::FromStr;

use nom::branch::alt;
use serde::Serialize;
use thiserror::Error;

use super::{
    code::{parse_code, parse_line_number},
    comment::parse_comment,
    token::{Code, Fragment},
    whitespace::parse_whitespace,
};

/// The scanned form of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    codes: Vec<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    text: String,
}

impl Line {
    /// Command words in the order they appear.
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// The last `( ... )` comment on the line, parentheses included.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The line exactly as it was given to [`scan`].
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.comment.is_none()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for code in &self.codes {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", code)?;
            first = false;
        }
        if let Some(comment) = &self.comment {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(comment)?;
        }
        Ok(())
    }
}

impl FromStr for Line {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("couldn't parse line: unexpected {found:?} at position {position} (column {column}) in {text:?}")]
    UnexpectedChar {
        found: char,
        /// Byte offset into `text`.
        position: usize,
        /// 1-based character column.
        column: usize,
        text: String,
    },
}

/// Scans a single line of text into its command words and comment.
///
/// The line must not contain its terminator. Scanning is a single left to
/// right pass; `;` and `#` end it early, and any character that cannot start
/// a fragment fails the whole line.
#[tracing::instrument(level = "debug", skip(text))]
pub fn scan(text: &str) -> Result<Line, ScanError> {
    let mut line = Line {
        codes: Vec::new(),
        comment: None,
        text: text.to_string(),
    };
    let mut remaining = text;

    while let Some(found) = remaining.chars().next() {
        let result = alt((
            parse_whitespace,
            parse_comment,
            parse_line_number,
            parse_code,
        ))(remaining);

        let (new_remaining, fragment) = match result {
            Ok(parsed) => parsed,
            Err(_) => {
                let position = text.len() - remaining.len();
                let error = ScanError::UnexpectedChar {
                    found,
                    position,
                    column: text[..position].chars().count() + 1,
                    text: text.to_string(),
                };
                tracing::error!("{}", error);
                return Err(error);
            }
        };

        tracing::trace!(kind = fragment.as_ref(), "fragment");
        match fragment {
            Fragment::Whitespace | Fragment::Unterminated(_) | Fragment::LineNumber(_) => {}
            Fragment::Terminator(_) => break,
            Fragment::Comment(comment) => line.comment = Some(comment.to_string()),
            Fragment::Code(code) => line.codes.push(Code::new(code)),
        }
        remaining = new_remaining;
    }

    tracing::debug!(codes = line.codes.len(), "scanned line");
    Ok(line)
}
