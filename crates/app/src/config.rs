use std::fmt;
use std::path::PathBuf;

pub const CASES_ENV: &str = "LITTER_CASES_PATH";
pub const SAVE_ENV: &str = "LITTER_SAVE_PATH";

const DEFAULT_CASES_PATH: &str = "cases.json";
const DEFAULT_SAVE_PATH: &str = "save_data.json";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidPath { flag: &'static str, raw: String },
    TerminalTakesNoFlags(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
            ArgsError::TerminalTakesNoFlags(arg) => {
                write!(f, "terminal takes no arguments (got {arg}); set {CASES_ENV} instead")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

/// Where the dataset and the progress file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub cases: PathBuf,
    pub save: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Ui(Paths),
    Terminal(Paths),
    Seed { paths: Paths, force: bool },
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui]   [--cases <path>] [--save <path>]   # interactive, resumable");
    eprintln!("  app terminal                                  # scored run, no resume");
    eprintln!("  app seed   [--cases <path>] [--force]         # write the sample dataset");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --cases {DEFAULT_CASES_PATH}");
    eprintln!("  --save  {DEFAULT_SAVE_PATH}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {CASES_ENV}, {SAVE_ENV}, RUST_LOG");
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

fn default_paths(env: &impl Fn(&str) -> Option<String>) -> Paths {
    let from_env = |key: &str, fallback: &str| {
        env(key)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(fallback), PathBuf::from)
    };
    Paths {
        cases: from_env(CASES_ENV, DEFAULT_CASES_PATH),
        save: from_env(SAVE_ENV, DEFAULT_SAVE_PATH),
    }
}

/// Parse `argv` (without the program name). `env` looks up environment variables.
///
/// # Errors
///
/// Returns `ArgsError` for unknown subcommands or flags and missing flag values.
pub fn parse(
    argv: Vec<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Invocation, ArgsError> {
    let mut args = argv.into_iter().peekable();
    let mut paths = default_paths(&env);

    // Default behavior: launching the UI when no subcommand is provided.
    let command = match args.peek().map(String::as_str) {
        None => "ui".to_string(),
        Some("--help" | "-h") => return Ok(Invocation::Help),
        Some(first) if first.starts_with("--") => "ui".to_string(),
        Some(_) => args.next().unwrap_or_default(),
    };

    match command.as_str() {
        "ui" => {
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--cases" => paths.cases = require_path(&mut args, "--cases")?,
                    "--save" => paths.save = require_path(&mut args, "--save")?,
                    "--help" | "-h" => return Ok(Invocation::Help),
                    _ => return Err(ArgsError::UnknownArg(arg)),
                }
            }
            Ok(Invocation::Ui(paths))
        }
        "terminal" => match args.next() {
            None => Ok(Invocation::Terminal(paths)),
            Some(arg) => Err(ArgsError::TerminalTakesNoFlags(arg)),
        },
        "seed" => {
            let mut force = false;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--cases" => paths.cases = require_path(&mut args, "--cases")?,
                    "--force" => force = true,
                    "--help" | "-h" => return Ok(Invocation::Help),
                    _ => return Err(ArgsError::UnknownArg(arg)),
                }
            }
            Ok(Invocation::Seed { paths, force })
        }
        other => Err(ArgsError::UnknownCommand(other.to_string())),
    }
}
