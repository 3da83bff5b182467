use std::path::PathBuf;
use structopt::{clap, clap::arg_enum, StructOpt};

/// Evaluates one boolean expression over 0/1 per input line.
#[derive(Debug, StructOpt)]
#[structopt(name = "beval")]
#[structopt(long_version(option_env!("LONG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))))]
#[structopt(setting(clap::AppSettings::ColoredHelp))]
pub struct Opt {
    #[structopt(long = "log-level", possible_values(&LogLevel::variants()), case_insensitive = true)]
    pub log_level: Option<LogLevel>,
    /// Input file, `.gz` allowed. Reads stdin when omitted or `-`
    #[structopt(long = "input", short = "i")]
    pub input: Option<PathBuf>,
    /// `strict` rejects malformed lines instead of evaluating them
    #[structopt(long = "mode", possible_values(&Mode::variants()), case_insensitive = true)]
    pub mode: Option<Mode>,
    #[structopt(long = "out-format", possible_values(&OutputFormat::variants()), case_insensitive = true)]
    pub out_format: Option<OutputFormat>,
    /// Skip lines starting with this character
    #[structopt(long = "comment")]
    pub comment: Option<char>,
    /// Deepest `!`/`(` nesting evaluated per line, at most 1024
    #[structopt(long = "max-depth", default_value = "256", parse(try_from_str = parse_max_depth))]
    pub max_depth: usize,
}

/// Ceiling for `--max-depth`; each nesting level costs a few stack frames.
pub const MAX_DEPTH_CEILING: usize = 1024;

fn parse_max_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s.parse().map_err(|e| format!("{}", e))?;
    if depth > MAX_DEPTH_CEILING {
        return Err(format!("must be at most {}", MAX_DEPTH_CEILING));
    }
    Ok(depth)
}

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        DEBUG,
        INFO,
        WARN,
        ERROR,
    }
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Mode {
        PERMISSIVE,
        STRICT,
    }
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OutputFormat {
        DIGIT,
        TSV,
    }
}
