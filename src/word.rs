use core::fmt;
use std::io::Write;

use crate::WordError;

/// The standard library. Every word pops its own operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
  // Arithmetic
  Add,
  Subtract,

  // IO
  Print,

  // Stack
  Dup,
}

impl Word {
  pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Print, Self::Dup];

  pub const fn as_str(self) -> &'static str {
    match self {
      // Arithmetic
      Self::Add => "+",
      Self::Subtract => "-",

      // IO
      Self::Print => ".",

      // Stack
      Self::Dup => "dup",
    }
  }

  /// The number of values the word pops before it runs.
  pub const fn arity(self) -> usize {
    match self {
      Self::Add | Self::Subtract => 2,
      Self::Print | Self::Dup => 1,
    }
  }

  /// Runs the word against its gathered arguments and pushes any results.
  ///
  /// `args[0]` is the value that was on top of the stack.
  pub(crate) fn apply<W, P>(
    self,
    args: &[i64],
    output: &mut W,
    mut push: P,
  ) -> Result<(), WordError>
  where
    W: Write,
    P: FnMut(i64),
  {
    match self {
      Self::Add => push(args[0].wrapping_add(args[1])),
      // The deeper operand minus the top one.
      Self::Subtract => push(args[1].wrapping_sub(args[0])),
      Self::Print => writeln!(output, "{}", args[0])
        .map_err(|err| WordError::Output(err.kind()))?,
      Self::Dup => {
        push(args[0]);
        push(args[0]);
      }
    }

    Ok(())
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
