use std::io::{self, BufRead};

/// One expression line handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

/// Splits input into expression lines, dropping blank ones.
///
/// A line is blank when it is empty or made only of spaces. Tabs do not
/// count, so a line of tabs is still handed to the evaluator.
#[must_use]
pub struct LineReader<R: BufRead> {
    reader: R,
    comment: Option<char>,
    number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            comment: None,
            number: 0,
        }
    }

    pub fn with_comment(mut self, comment: Option<char>) -> Self {
        self.comment = comment;
        self
    }

    pub fn next_expression(&mut self) -> io::Result<Option<Line>> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            self.number += 1;

            // invalid UTF-8 only ever lands in factor position, where it reads as 0
            let decoded = String::from_utf8_lossy(&buf);
            let text = strip_line_ending(&decoded);
            if is_blank(text) {
                trace!("line {}: blank", self.number);
                continue;
            }

            if let Some(comment) = self.comment {
                if text.starts_with(comment) {
                    trace!("line {}: comment", self.number);
                    continue;
                }
            }

            return Ok(Some(Line {
                number: self.number,
                text: text.to_string(),
            }));
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_expression().transpose()
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ')
}
