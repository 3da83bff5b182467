//! Line-oriented evaluation of boolean expressions over `0` and `1`.
//!
//! Each line is scanned once by a recursive-descent [`Evaluator`] that reduces
//! `!`, `&&`, `||` and parentheses straight to a `bool`. Malformed lines still
//! yield a value; [`evaluate_strict`] is the opt-in mode that rejects them.

#[macro_use]
extern crate log;

pub mod parser;
pub mod reader;
pub mod utils;

pub use parser::{evaluate, evaluate_strict, Evaluator, ParseError, MAX_DEPTH};
