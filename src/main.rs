use core::fmt;
use std::{
  io::{self, Read},
  path::PathBuf,
};

use clap::Parser;
use gof::{Config, Interpreter, Tokenize};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

const DEFAULT_PROGRAM: &str = "1 2 3 dup . 4 + DUP .";

fn main() {
  init_tracing();

  let cli = Cli::parse();
  let mut interpreter = Interpreter::new().with_config(cli.config());

  match cli.subcommand.unwrap_or_default() {
    Subcommand::Run { program } => {
      ok_or_exit(interpreter.run(&program));
    }
    Subcommand::Stdin => {
      let mut source = String::new();
      ok_or_exit(io::stdin().read_to_string(&mut source));

      ok_or_exit(interpreter.run(trim_line_ending(&source)));
    }
    Subcommand::File { input } => {
      let source = ok_or_exit(std::fs::read_to_string(input));

      ok_or_exit(interpreter.run(trim_line_ending(&source)));
    }
    Subcommand::Repl => {
      ok_or_exit(repl(&mut interpreter, cli.no_dump));
      return;
    }
  }

  if !cli.no_dump {
    ok_or_exit(interpreter.dump_stack(io::stdout()));
  }
}

fn repl(interpreter: &mut Interpreter, no_dump: bool) -> rustyline::Result<()> {
  let mut editor = DefaultEditor::new()?;

  loop {
    match editor.readline(">> ") {
      Ok(line) => {
        if line.trim().is_empty() {
          continue;
        }

        editor.add_history_entry(line.as_str())?;

        if let Err(err) = interpreter.run(&line) {
          eprintln!("error: {err}");
        }

        if !no_dump {
          interpreter.dump_stack(io::stdout())?;
        }
      }
      Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
        println!("aborted");
        break;
      }
      Err(err) => return Err(err),
    }
  }

  Ok(())
}

/// Strips a single trailing line ending, so files saved with one still split
/// cleanly on spaces.
fn trim_line_ending(source: &str) -> &str {
  source
    .strip_suffix('\n')
    .map(|s| s.strip_suffix('\r').unwrap_or(s))
    .unwrap_or(source)
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
  if std::env::var("RUST_LOG").is_ok() {
    tracing_subscriber::registry()
      .with(
        tracing_fmt::layer()
          .with_writer(io::stderr)
          .with_target(true)
          .with_level(true),
      )
      .with(EnvFilter::from_default_env())
      .init();
  }
}

fn ok_or_exit<T, E>(result: Result<T, E>) -> T
where
  E: fmt::Display,
{
  match result {
    Ok(x) => x,
    Err(e) => {
      eprintln!("error: {e}");
      std::process::exit(1);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, clap::Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  subcommand: Option<Subcommand>,

  /// Split programs on any whitespace instead of single spaces.
  #[arg(short, long, global = true)]
  whitespace: bool,

  /// Skip printing the stack once the program finishes.
  #[arg(long, global = true)]
  no_dump: bool,
}

impl Cli {
  fn config(&self) -> Config {
    let tokenize = if self.whitespace {
      Tokenize::Whitespace
    } else {
      Tokenize::Space
    };

    Config::new().with_tokenize(tokenize)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
enum Subcommand {
  /// Runs a program given as an argument.
  Run {
    /// The program text.
    #[arg(default_value = DEFAULT_PROGRAM, allow_hyphen_values = true)]
    program: String,
  },
  /// Runs the program supplied via STDIN [alias -].
  #[command(alias = "-")]
  Stdin,
  /// Runs the program from an input file path.
  File {
    /// The input file path.
    input: PathBuf,
  },
  /// Runs a REPL [alias >].
  #[command(alias = ">")]
  Repl,
}

impl Default for Subcommand {
  fn default() -> Self {
    Self::Run {
      program: DEFAULT_PROGRAM.into(),
    }
  }
}
