#[macro_use]
extern crate log;

use std::io::{self, BufRead, BufWriter, Write};
use std::{env::set_var, error::Error};
use structopt::StructOpt;

mod opt;

use boolean_evaluator::reader::{Line, LineReader};
use boolean_evaluator::{evaluate_strict, utils, Evaluator, ParseError};

use crate::opt::{LogLevel, Mode, Opt, OutputFormat};

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    match &opt.log_level {
        Some(log_level) => match log_level {
            LogLevel::DEBUG => set_var("RUST_LOG", "debug"),
            LogLevel::INFO => set_var("RUST_LOG", "info"),
            LogLevel::WARN => set_var("RUST_LOG", "warn"),
            LogLevel::ERROR => set_var("RUST_LOG", "error"),
        },
        None => set_var("RUST_LOG", "warn"),
    };

    pretty_env_logger::init_timed();
    debug!("{:?}", opt);

    let bufreader: Box<dyn BufRead> = utils::read_with_gz(opt.input.as_ref())?;
    let lines = LineReader::new(bufreader).with_comment(opt.comment);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let rejected = run(
        lines,
        &mut out,
        opt.mode.unwrap_or(Mode::PERMISSIVE),
        opt.out_format.unwrap_or(OutputFormat::DIGIT),
        opt.max_depth,
    )?;

    if rejected > 0 {
        return Err(Box::new(ParseError::new(format!(
            "{} malformed line(s) rejected",
            rejected
        ))));
    }
    Ok(())
}

/// Evaluates every line and writes one result per line. Returns how many
/// lines strict mode refused to evaluate.
fn run<R: BufRead, W: Write>(
    lines: LineReader<R>,
    out: &mut W,
    mode: Mode,
    out_format: OutputFormat,
    max_depth: usize,
) -> Result<usize, Box<dyn Error>> {
    let mut evaluated = 0;
    let mut rejected = 0;

    for line in lines {
        let line = line?;

        let value = match mode {
            Mode::PERMISSIVE => evaluate_line(&line, max_depth),
            Mode::STRICT => match evaluate_strict(&line.text, max_depth) {
                Ok(value) => value,
                Err(err) => {
                    error!("line {}: {}", line.number, err);
                    rejected += 1;
                    continue;
                }
            },
        };

        match out_format {
            OutputFormat::DIGIT => writeln!(out, "{}", value as u8)?,
            OutputFormat::TSV => writeln!(out, "{}\t{}", line.text, value as u8)?,
        }
        evaluated += 1;
    }

    out.flush()?;
    info!("{} line(s) evaluated, {} rejected", evaluated, rejected);

    Ok(rejected)
}

fn evaluate_line(line: &Line, max_depth: usize) -> bool {
    let mut evaluator = Evaluator::new(&line.text).with_max_depth(max_depth);
    let value = evaluator.evaluate();

    if evaluator.depth_exceeded() {
        warn!(
            "line {}: nested deeper than {}, inner operands read as 0",
            line.number, max_depth
        );
    }

    let rest = evaluator.remainder();
    if !rest.trim_start_matches(' ').is_empty() {
        debug!(
            "line {}: stopped at column {}, ignoring {:?}",
            line.number,
            evaluator.position() + 1,
            rest
        );
    }

    value
}
