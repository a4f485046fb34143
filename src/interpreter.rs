use std::{
  collections::HashMap,
  io::{self, Stdout, Write},
};

use tracing::{debug, trace};

use crate::{Config, RunError, Stack, StackError, TokenError, Word, WordError};

/// Runs programs against a single integer stack.
///
/// The stack persists across [`Interpreter::run`] calls, including the partial
/// state left behind by a failed run.
#[derive(Debug)]
pub struct Interpreter<W = Stdout> {
  stack: Stack<i64>,
  words: HashMap<String, Word>,
  output: W,
  config: Config,
}

impl Interpreter<Stdout> {
  #[inline]
  pub fn new() -> Self {
    Self::with_output(io::stdout())
  }
}

impl Default for Interpreter<Stdout> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<W> Interpreter<W>
where
  W: Write,
{
  /// Creates an interpreter whose print word writes to `output`.
  pub fn with_output(output: W) -> Self {
    Self {
      stack: Stack::new(),
      words: std_words(),
      output,
      config: Config::default(),
    }
  }

  #[inline]
  pub fn with_config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  #[inline]
  pub fn stack(&self) -> &Stack<i64> {
    &self.stack
  }

  #[inline]
  pub fn output(&self) -> &W {
    &self.output
  }

  #[inline]
  pub fn into_output(self) -> W {
    self.output
  }

  /// The names every word is registered under, in no particular order.
  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.words.keys().map(String::as_str)
  }

  #[inline]
  pub fn push(&mut self, value: i64) {
    self.stack.push(value);
  }

  #[inline]
  pub fn pop(&mut self) -> Result<i64, StackError> {
    self.stack.pop()
  }

  /// # Panics
  ///
  /// Panics if the stack is empty.
  #[inline]
  #[track_caller]
  pub fn must_pop(&mut self) -> i64 {
    self.stack.must_pop()
  }

  /// Runs every token of `program` in order, stopping at the first failure.
  pub fn run(&mut self, program: &str) -> Result<(), RunError> {
    for (position, token) in self.config.tokenize.split(program).enumerate() {
      debug!(token, position, "running token");

      if let Err(source) = self.run_token(token) {
        debug!(token, position, error = %source, "run aborted");

        return Err(RunError {
          token: token.to_string(),
          position,
          source,
        });
      }
    }

    Ok(())
  }

  /// Runs a word if `token` names one, otherwise pushes it as an integer.
  pub fn run_token(&mut self, token: &str) -> Result<(), TokenError> {
    if let Some(&word) = self.words.get(token) {
      return self.run_word(word).map_err(|source| TokenError::Word {
        token: token.to_string(),
        source,
      });
    }

    match token.parse::<i64>() {
      Ok(value) => {
        self.push(value);
        Ok(())
      }
      Err(source) => Err(TokenError::InvalidLiteral {
        token: token.to_string(),
        source,
      }),
    }
  }

  fn run_word(&mut self, word: Word) -> Result<(), WordError> {
    let arity = word.arity();
    let mut args = Vec::with_capacity(arity);

    for index in 0..arity {
      let arg = self
        .pop()
        .map_err(|source| WordError::Arg { index, arity, source })?;
      args.push(arg);
    }

    trace!(%word, ?args, "running word");

    let stack = &mut self.stack;
    word.apply(&args, &mut self.output, |value| stack.push(value))
  }

  /// Writes the stack, top first, as `[a, b, c]` followed by a newline.
  #[inline]
  pub fn dump_stack<D>(&self, mut writer: D) -> io::Result<()>
  where
    D: Write,
  {
    writeln!(writer, "{}", self.stack)
  }
}

fn std_words() -> HashMap<String, Word> {
  let mut words: HashMap<String, Word> = Word::ALL
    .into_iter()
    .map(|word| (word.as_str().to_string(), word))
    .collect();

  // Snapshot before adding the uppercase aliases.
  let names: Vec<String> = words.keys().cloned().collect();
  for name in names {
    let word = words[&name];
    words.insert(name.to_uppercase(), word);
  }

  words
}
