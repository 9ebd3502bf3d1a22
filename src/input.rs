//! Reading whitespace-separated integers off a stream.
//!
//! The driver's input is a flat run of integers: record fields first, one
//! search key last, with line breaks carrying no meaning. [`TokenReader`]
//! buffers one line at a time and hands out tokens, so records may be
//! packed onto one line or spread over several.

use std::collections::VecDeque;
use std::io::BufRead;
use std::num::ParseIntError;

use thiserror::Error;

use crate::tree::Triple;

/// Errors produced while reading integers from the input stream.
///
/// All of these are fatal to the read; there is no recovery or resync.
#[derive(Debug, Error)]
pub enum InputError {
    /// The stream ended before every expected integer was read.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A token was not parseable as a 32-bit integer.
    #[error("invalid integer token {token:?}")]
    InvalidInteger {
        /// The offending token, verbatim.
        token: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Splits a [`BufRead`] source into whitespace-separated tokens and parses
/// them on demand.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader. Nothing is read until the first token is
    /// asked for.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Reads the next integer token.
    pub fn next_int(&mut self) -> Result<i32, InputError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|source| InputError::InvalidInteger { token, source })
    }

    /// Reads the next three integer tokens as one record.
    pub fn next_triple(&mut self) -> Result<Triple, InputError> {
        Ok(Triple::new(
            self.next_int()?,
            self.next_int()?,
            self.next_int()?,
        ))
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEnd);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
