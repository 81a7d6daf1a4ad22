//! # Tokenizer
//!
//! Turns one line of machine-control text into a [`Line`]: the command
//! words it contains, its last parenthesized comment, and the raw text.
//!
//! ## Component Structure
//!
//! * [`token`]: [`Code`], the [`Fragment`](token::Fragment) classes and the parser result type
//! * [`whitespace`]: field separators
//! * [`comment`]: `;`, `#` and `( ... )` comments
//! * [`code`]: command words and skipped `N` line numbers
//! * [`line`]: the [`scan`] loop and [`ScanError`]
//!
//! Scanning holds no state between lines, so [`scan`] may be called from
//! any number of threads at once.
//!
//! ## Usage Example
//!
//! ```rust
//! use gcode_scan::tokenizer::scan;
//!
//! let line = scan("N10 G1 X5 (move) ; fast").unwrap();
//! assert_eq!(line.codes(), ["G1", "X5"]);
//! assert_eq!(line.comment(), Some("(move)"));
//! ```

pub mod code;
pub mod comment;
pub mod line;
pub mod token;
pub mod whitespace;

pub use line::{scan, Line, ScanError};
pub use token::Code;
