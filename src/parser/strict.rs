//! Opt-in strict evaluation: the whole line must be a well-formed expression.
//!
//! The permissive [`Evaluator`] never fails and quietly stops at the first
//! character it does not understand. This mode rejects such lines instead,
//! reporting where the grammar stopped matching.

use pest::{
    error::{Error as PestError, ErrorVariant, InputLocation},
    iterators::Pair,
    Parser,
};
use pest_derive::Parser;

use super::error::ParseError;
use super::eval::Evaluator;

#[derive(Parser)]
#[grammar = "parser/boolean.pest"]
struct BooleanParser;

pub fn evaluate_strict(line: &str, max_depth: usize) -> Result<bool, ParseError> {
    // pest recurses once per nesting level too, so refuse deep lines up front
    let mut scan = Evaluator::new(line).with_max_depth(max_depth);
    scan.evaluate();
    if scan.depth_exceeded() {
        return Err(
            ParseError::new(format!("expression nested deeper than {}", max_depth))
                .at(scan.position()),
        );
    }

    let mut pairs = BooleanParser::parse(Rule::line, line)?;
    match pairs.next() {
        Some(pair) => reduce(pair),
        None => Err(ParseError::new("empty expression")),
    }
}

fn reduce(pair: Pair<Rule>) -> Result<bool, ParseError> {
    let position = pair.as_span().start();

    match pair.as_rule() {
        Rule::line | Rule::factor | Rule::group => reduce(first_inner(pair)?),
        Rule::negation => Ok(!reduce(first_inner(pair)?)?),
        Rule::expression => fold(pair, |lhs, rhs| lhs | rhs),
        Rule::term => fold(pair, |lhs, rhs| lhs & rhs),
        Rule::literal => Ok(pair.as_str() == "1"),
        rule => Err(ParseError::new(format!("unexpected {:?}", rule)).at(position)),
    }
}

fn fold(pair: Pair<Rule>, op: fn(bool, bool) -> bool) -> Result<bool, ParseError> {
    let position = pair.as_span().start();

    let mut value = None;
    for operand in pair.into_inner() {
        let rhs = reduce(operand)?;
        value = Some(match value {
            Some(lhs) => op(lhs, rhs),
            None => rhs,
        });
    }

    value.ok_or_else(|| ParseError::new("missing operand").at(position))
}

fn first_inner(pair: Pair<Rule>) -> Result<Pair<Rule>, ParseError> {
    let position = pair.as_span().start();
    pair.into_inner()
        .next()
        .ok_or_else(|| ParseError::new("missing operand").at(position))
}

fn describe(rule: &Rule) -> &'static str {
    match rule {
        Rule::literal => "`0` or `1`",
        Rule::factor | Rule::negation | Rule::group => "an operand",
        Rule::expression | Rule::term => "an expression",
        Rule::EOI => "`&&`, `||` or end of line",
        _ => "a boolean expression",
    }
}

impl From<PestError<Rule>> for ParseError {
    fn from(err: PestError<Rule>) -> Self {
        let position = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };

        let message = match &err.variant {
            ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
                let mut expected: Vec<&str> = positives.iter().map(describe).collect();
                expected.dedup();
                format!("expected {}", expected.join(" or "))
            }
            ErrorVariant::ParsingError { .. } => "unexpected input".to_string(),
            ErrorVariant::CustomError { message } => message.clone(),
        };

        ParseError::new(message).at(position)
    }
}

#[cfg(test)]
mod test_strict {
    use super::*;
    use crate::parser::{evaluate, MAX_DEPTH};

    fn strict(line: &str) -> Result<bool, ParseError> {
        evaluate_strict(line, MAX_DEPTH)
    }

    #[test]
    fn agrees_with_permissive_on_well_formed_lines() {
        let lines = [
            "1",
            "0",
            "0 || 1 && 0",
            "(0 || 1) && 0",
            "(0 || 1) && 1",
            "!0 && 1",
            "1&&0",
            "1   &&   0",
            " !(0 || (1 && 0)) ",
            "! ! 1",
            "0 && 1 || 1",
            "( 1 )",
        ];

        for line in lines.iter() {
            assert_eq!(strict(line).unwrap(), evaluate(line), "line: {:?}", line);
        }
    }

    #[test]
    fn rejects_adjacent_digits() {
        let err = strict("11").unwrap_err();
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = strict("x || 1").unwrap_err();
        assert_eq!(err.position(), Some(0));

        assert!(strict("1 && 2").is_err());
        assert!(strict("1 && é").is_err());
        assert!(strict("\t1").is_err());
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert!(strict("(1").is_err());
        assert!(strict("1)").is_err());
        assert!(strict("((1) || 0").is_err());
        assert!(strict("()").is_err());
    }

    #[test]
    fn rejects_dangling_and_single_operators() {
        assert!(strict("1 &&").is_err());
        assert!(strict("|| 1").is_err());
        assert!(strict("1 & 0").is_err());
        assert!(strict("1 ||| 0").is_err());
        assert!(strict("!").is_err());
    }

    #[test]
    fn rejects_blank_lines() {
        assert!(strict("").is_err());
        assert!(strict("   ").is_err());
    }

    #[test]
    fn rejects_lines_nested_too_deep() {
        let line = "!".repeat(9) + "1";
        let err = evaluate_strict(&line, 8).unwrap_err();
        assert!(err.to_string().contains("nested deeper than 8"));

        let line = "!".repeat(8) + "1";
        assert_eq!(evaluate_strict(&line, 8).unwrap(), evaluate(&line));

        let line = "(".repeat(8) + "0" + &")".repeat(8);
        assert!(!evaluate_strict(&line, 8).unwrap());
    }

    #[test]
    fn error_messages_are_readable() {
        let err = strict("1 &&").unwrap_err();
        assert!(err.to_string().starts_with("ParseError at column"));
    }
}
