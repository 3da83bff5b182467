use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    error: String,
    position: Option<usize>,
}

impl ParseError {
    pub fn new<S: ToString>(error: S) -> Self {
        Self {
            error: error.to_string(),
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Byte offset into the line where parsing gave up, if known.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "ParseError at column {}: {}", position + 1, self.error),
            None => write!(f, "ParseError: {}", self.error),
        }
    }
}

impl Error for ParseError {}
