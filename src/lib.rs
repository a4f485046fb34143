//! A tiny stack language: space-separated integer literals and words run
//! against a single `i64` stack.

mod config;
mod error;
mod interpreter;
mod stack;
mod word;

pub use config::*;
pub use error::*;
pub use interpreter::*;
pub use stack::*;
pub use word::*;
