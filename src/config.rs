/// How a program is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tokenize {
  /// Split on every single space. Repeated, leading or trailing spaces yield
  /// empty tokens, which are rejected as invalid literals.
  #[default]
  Space,
  /// Split on runs of any whitespace, dropping empty tokens.
  Whitespace,
}

impl Tokenize {
  pub fn split<'a>(
    self,
    program: &'a str,
  ) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match self {
      Self::Space => Box::new(program.split(' ')),
      Self::Whitespace => Box::new(program.split_whitespace()),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
  pub tokenize: Tokenize,
}

impl Config {
  #[inline]
  pub const fn new() -> Self {
    Self {
      tokenize: Tokenize::Space,
    }
  }

  #[inline]
  pub const fn with_tokenize(mut self, tokenize: Tokenize) -> Self {
    self.tokenize = tokenize;
    self
  }
}
