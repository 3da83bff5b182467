/// Deepest `!`/`(` nesting a single line may reach before factors degrade.
pub const MAX_DEPTH: usize = 256;

/// Scans one line and reduces it to a boolean in a single pass.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// expression := term ( '||' term )*
/// term       := factor ( '&&' factor )*
/// factor     := '!' factor | '(' expression ')' | '0' | '1'
/// ```
///
/// Anything else in factor position evaluates to `false` and leaves the
/// cursor where it is, so malformed lines still produce a value.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    line: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
    depth_exceeded: bool,
}

impl<'a> Evaluator<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            depth: 0,
            max_depth: MAX_DEPTH,
            depth_exceeded: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn evaluate(&mut self) -> bool {
        self.expression()
    }

    /// Byte offset of the first character not consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        self.line.get(self.pos..).unwrap_or("")
    }

    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    fn expression(&mut self) -> bool {
        let mut value = self.term();
        loop {
            self.skip_spaces();
            if !self.eat("||") {
                break;
            }
            // the right side must always be scanned to move the cursor past it
            let rhs = self.term();
            value = value || rhs;
        }
        value
    }

    fn term(&mut self) -> bool {
        let mut value = self.factor();
        loop {
            self.skip_spaces();
            if !self.eat("&&") {
                break;
            }
            let rhs = self.factor();
            value = value && rhs;
        }
        value
    }

    fn factor(&mut self) -> bool {
        self.skip_spaces();

        if self.depth > self.max_depth {
            self.depth_exceeded = true;
            return false;
        }

        match self.peek() {
            Some(b'!') => {
                self.pos += 1;
                !self.nested(Self::factor)
            }
            Some(b'(') => {
                self.pos += 1;
                let value = self.nested(Self::expression);
                if self.peek() == Some(b')') {
                    self.pos += 1;
                }
                value
            }
            Some(b'0') => {
                self.pos += 1;
                false
            }
            Some(b'1') => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn nested(&mut self, rule: fn(&mut Self) -> bool) -> bool {
        self.depth += 1;
        let value = rule(self);
        self.depth -= 1;
        value
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn eat(&mut self, op: &str) -> bool {
        if self.remainder().starts_with(op) {
            self.pos += op.len();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }
}

/// Evaluates one line with the default nesting limit.
pub fn evaluate(line: &str) -> bool {
    Evaluator::new(line).evaluate()
}
