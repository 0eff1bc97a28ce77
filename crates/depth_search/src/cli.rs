use std::str::FromStr;

use depth_search::{BuildConfig, LargeFileQuery};
use regex::Regex;

const ARG_DEPTH_KEY: &str = "-d";
const ARG_EXCLUDE_KEY: &str = "-e";
const ARG_MIN_SIZE_KEY: &str = "-s";
const ARG_MIN_DEPTH_KEY: &str = "-m";

pub const USAGE: &str = "usage:
  depth_search tree <path> [-d <max_depth>] [-e <exclude_regex>]
  depth_search large <path> [-d <max_depth>] [-e <exclude_regex>] [-s <min_size>] [-m <min_depth>]
  depth_search find <path> <name> [-d <max_depth>] [-e <exclude_regex>]
  depth_search demo";

#[derive(Debug, thiserror::Error)]
pub enum ArgError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("invalid arg `{0}`, each option must start with a hyphen")]
    NotAnOption(String),

    #[error("option `{0}` is not supported by this command")]
    UnsupportedOption(String),

    #[error("value `{value}` of `{key}` is not a number")]
    NotANumber { key: &'static str, value: String },

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// What the binary was asked to do.
#[derive(Debug)]
pub enum Command {
    /// Print the built tree as JSON.
    Tree(BuildConfig),
    /// Print the first large enough file.
    Large(BuildConfig, LargeFileQuery),
    /// Iterative deepening search by file name.
    Find(BuildConfig, String),
    /// Search the built-in in-memory tree.
    Demo,
}

fn number<T: FromStr>(key: &'static str, value: Option<String>) -> Result<T, ArgError> {
    let value = value.ok_or(ArgError::Missing(key))?;
    value
        .parse::<T>()
        .map_err(|_| ArgError::NotANumber { key, value })
}

pub fn build_from_args(mut args: impl Iterator<Item = String>) -> Result<Command, ArgError> {
    // Skip the process name arg.
    args.next();
    let command = args.next().ok_or(ArgError::Missing("command"))?;
    if command == "demo" {
        return match args.next() {
            Some(extra) => Err(ArgError::UnsupportedOption(extra)),
            None => Ok(Command::Demo),
        };
    }
    if !matches!(command.as_str(), "tree" | "large" | "find") {
        return Err(ArgError::UnknownCommand(command));
    }
    let mut config = BuildConfig::new(args.next().ok_or(ArgError::Missing("path"))?);
    let name = if command == "find" {
        Some(args.next().ok_or(ArgError::Missing("name"))?)
    } else {
        None
    };
    let mut query = LargeFileQuery::default();
    while let Some(item) = args.next() {
        if !item.starts_with('-') {
            return Err(ArgError::NotAnOption(item));
        }
        match item.as_str() {
            ARG_DEPTH_KEY => config.max_depth = number(ARG_DEPTH_KEY, args.next())?,
            ARG_EXCLUDE_KEY => {
                let pattern = args.next().ok_or(ArgError::Missing(ARG_EXCLUDE_KEY))?;
                config.exclude = Some(Regex::new(&pattern)?);
            }
            ARG_MIN_SIZE_KEY if command == "large" => {
                query.min_size = number(ARG_MIN_SIZE_KEY, args.next())?
            }
            ARG_MIN_DEPTH_KEY if command == "large" => {
                query.min_depth = number(ARG_MIN_DEPTH_KEY, args.next())?
            }
            _ => return Err(ArgError::UnsupportedOption(item)),
        }
    }
    Ok(match (command.as_str(), name) {
        ("large", _) => Command::Large(config, query),
        ("find", Some(name)) => Command::Find(config, name),
        _ => Command::Tree(config),
    })
}
