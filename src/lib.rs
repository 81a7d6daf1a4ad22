//! # gcode-scan: a line scanner for G-code style machine-control text
//!
//! Each input line is split into its command words (`G1`, `X10`, ...), its
//! last parenthesized comment and its raw text. Nothing is interpreted:
//! numeric payloads, checksums and line numbers are left to the consumer.
//!
//! ## Pipeline
//!
//! ```text
//! BufRead → Line Supply ([`supply::Parser`]) → Tokenizer ([`tokenizer::scan`]) → Line
//! ```
//!
//! - The [`supply`] module owns the reader, strips terminators and reports
//!   end of stream and I/O failures.
//! - The [`tokenizer`] module is a pure function from one line of text to a
//!   [`Line`] or a [`ScanError`].
//!
//! ## Example
//!
//! ```rust
//! use gcode_scan::Parser;
//!
//! let input = "N10 G1 X5 ; feed\n(probe) G38.2 Z-5\n";
//! for line in Parser::new(input.as_bytes()) {
//!     let line = line?;
//!     println!("{:?} {:?}", line.codes(), line.comment());
//! }
//! # Ok::<(), gcode_scan::GcodeError>(())
//! ```

pub mod config;
pub mod error;
pub mod supply;
pub mod tokenizer;

// Re-exports
pub use config::ParserConfig;
pub use error::*;
pub use supply::Parser;
pub use tokenizer::{scan, Code, Line, ScanError};
