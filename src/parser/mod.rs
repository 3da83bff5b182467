pub mod error;
pub mod eval;
pub mod strict;


pub use error::ParseError;
pub use eval::{evaluate, Evaluator, MAX_DEPTH};
pub use strict::evaluate_strict;
