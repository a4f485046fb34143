use core::num::ParseIntError;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StackError {
  #[error("stack underflow")]
  Underflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
  /// Gathering argument `index` of `arity` failed. Arguments popped before it
  /// stay popped.
  #[error("error on arg [{index}/{arity}]: {source}")]
  Arg {
    index: usize,
    arity: usize,
    source: StackError,
  },
  #[error("unable to write output: {0}")]
  Output(io::ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
  #[error("error running [{token}]: {source}")]
  Word { token: String, source: WordError },
  #[error("invalid numeric literal [{token}]: {source}")]
  InvalidLiteral {
    token: String,
    source: ParseIntError,
  },
}

impl TokenError {
  pub fn token(&self) -> &str {
    match self {
      Self::Word { token, .. } | Self::InvalidLiteral { token, .. } => token,
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Word {
        source: WordError::Arg { .. },
        ..
      } => ErrorKind::Underflow,
      Self::Word {
        source: WordError::Output(_),
        ..
      } => ErrorKind::Output,
      Self::InvalidLiteral { .. } => ErrorKind::InvalidLiteral,
    }
  }
}

/// The failure that aborted a run, with the zero-based position of the token
/// that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error running token [{token}] at position {position}: {source}")]
pub struct RunError {
  pub token: String,
  pub position: usize,
  pub source: TokenError,
}

impl RunError {
  #[inline]
  pub fn kind(&self) -> ErrorKind {
    self.source.kind()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  Underflow,
  InvalidLiteral,
  Output,
}
