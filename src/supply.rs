//! # Line Supply
//!
//! [`Parser`] pulls lines out of any buffered reader, strips their
//! terminators and hands each one to [`scan`]. It is blocking and holds
//! nothing but the reader and a line counter.
//!
//! ## Termination
//!
//! * `Ok(None)` is end of stream. Every later call returns it again.
//! * I/O, encoding and over-long line errors are terminal: the error is
//!   returned once and the parser then reports end of stream.
//! * Scan errors only affect their own line. The caller decides whether to
//!   keep pulling.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    iter::FusedIterator,
    path::Path,
};

use crate::{
    config::ParserConfig,
    tokenizer::{scan, Line},
    GcodeError, GcodeResult,
};

pub struct Parser<R> {
    reader: R,
    config: ParserConfig,
    line_number: usize,
    buf: Vec<u8>,
    exhausted: bool,
}

impl Parser<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> GcodeResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ParserConfig::default())
    }

    pub fn with_config(reader: R, config: ParserConfig) -> Self {
        Self {
            reader,
            config,
            line_number: 0,
            buf: Vec::new(),
            exhausted: false,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// 1-based number of the last line read, 0 before the first.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads and scans the next line. `Ok(None)` marks the end of input.
    pub fn next_line(&mut self) -> GcodeResult<Option<Line>> {
        loop {
            if self.exhausted {
                return Ok(None);
            }
            match self.read_line() {
                Ok(Some(line)) if self.config.skip_empty && line.is_empty() => continue,
                Err(e) => {
                    if !e.is_recoverable() {
                        tracing::warn!(line_number = self.line_number, "{}", e);
                        self.exhausted = true;
                    }
                    return Err(e);
                }
                other => return other,
            }
        }
    }

    fn read_line(&mut self) -> GcodeResult<Option<Line>> {
        self.buf.clear();
        let limit = self.config.max_line_length;

        // Room for a CRLF after a line of exactly `limit` bytes.
        let read = (&mut self.reader)
            .take((limit as u64).saturating_add(2))
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        self.line_number += 1;
        let line_number = self.line_number;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > limit {
            return Err(GcodeError::LineTooLong { line_number, limit });
        }

        let text =
            std::str::from_utf8(&self.buf).map_err(|_| GcodeError::Encoding { line_number })?;
        tracing::debug!(line_number, "read line");

        scan(text)
            .map(Some)
            .map_err(|source| GcodeError::Scan {
                line_number,
                source,
            })
    }
}

impl<R: BufRead> Iterator for Parser<R> {
    type Item = GcodeResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

impl<R: BufRead> FusedIterator for Parser<R> {}
