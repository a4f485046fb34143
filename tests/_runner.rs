use std::{fs, path::PathBuf};

use gof::{ErrorKind, Interpreter};
use test_case::case;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Outcome {
  printed: String,
  dump: String,
  error: Option<(ErrorKind, usize)>,
}

fn outcome(
  printed: &str,
  dump: &str,
  error: Option<(ErrorKind, usize)>,
) -> Outcome {
  Outcome {
    printed: printed.into(),
    dump: dump.into(),
    error,
  }
}

#[case("end_to_end.gof" => outcome("3\n7\n", "[7, 2, 1]\n", None) ; "end to end")]
#[case("arithmetic.gof" => outcome("", "[-4, 4, -7, 7]\n", None) ; "arithmetic")]
#[case("dup_print.gof" => outcome("5\n5\n5\n", "[]\n", None) ; "dup and print")]
#[case("underflow.gof" => outcome("", "[]\n", Some((ErrorKind::Underflow, 3))) ; "underflow")]
#[case("mixed_case.gof" => outcome("", "[2, 1]\n", Some((ErrorKind::InvalidLiteral, 2))) ; "mixed case")]
#[case("double_space.gof" => outcome("", "[1]\n", Some((ErrorKind::InvalidLiteral, 1))) ; "double space")]
fn integration(name: &str) -> Outcome {
  let mut path = PathBuf::from("tests/programs");
  path.push(name);

  let source = fs::read_to_string(&path).unwrap();
  let program = source.trim_end_matches('\n');

  let mut interpreter = Interpreter::with_output(Vec::new());
  let error = interpreter
    .run(program)
    .err()
    .map(|err| (err.kind(), err.position));

  let mut dump = Vec::new();
  interpreter.dump_stack(&mut dump).unwrap();

  Outcome {
    printed: String::from_utf8(interpreter.into_output()).unwrap(),
    dump: String::from_utf8(dump).unwrap(),
    error,
  }
}
