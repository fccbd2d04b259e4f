//! Argument parsing.

use std::ffi::{OsStr, OsString};

/// A single command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// (parsed_char, entire_match, index)
    Short(char, String, usize),
    /// (parsed_match, entire_match, index)
    Long(String, String, usize),
    /// Value given as `--name=value`: (value, index)
    Attached(String, usize),
    /// (positional_arg, index)
    Positional(OsString, usize),
}

/// A reference to [`Arg`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgRef<'a> {
    /// A single matched char.
    Short(char),
    /// A long option.
    Long(&'a str),
    /// A value attached to the preceding long option.
    Attached,
    /// Positional argument.
    Positional,
}

impl Arg {
    /// Convert into a [`ArgRef`].
    pub fn as_ref(&self) -> ArgRef<'_> {
        match self {
            Arg::Short(c, _, _) => ArgRef::Short(*c),
            Arg::Long(ref s, _, _) => ArgRef::Long(s),
            Arg::Attached(_, _) => ArgRef::Attached,
            Arg::Positional(_, _) => ArgRef::Positional,
        }
    }

    /// Get the entire argument (eg. --foo), or the value for attached values.
    pub fn entire_match(self) -> OsString {
        match self {
            Arg::Short(_, s, _) | Arg::Long(_, s, _) | Arg::Attached(s, _) => s.into(),
            Arg::Positional(s, _) => s,
        }
    }

    /// Get the index of this argument.
    pub fn index(&self) -> usize {
        match self {
            Arg::Short(_, _, i)
            | Arg::Long(_, _, i)
            | Arg::Attached(_, i)
            | Arg::Positional(_, i) => *i,
        }
    }
}

/// Parse arguments from `args`.
///
/// Short options may be clustered (`-xh`); every char of a cluster shares the
/// cluster's index. `--name=value` yields a `Long` and an `Attached` with the
/// same index. Everything after `--` is positional.
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Vec<Arg> {
    let mut result = Vec::new();
    let mut iter = args.iter().zip(1..);

    for (s, index) in iter.by_ref() {
        let s: &OsStr = s.as_ref();
        let lossy = s.to_string_lossy();
        if lossy == "-" {
            // This means 'stdin'
            result.push(Arg::Positional(s.to_os_string(), index));
        } else if lossy == "--" {
            // The rest of parameters are positionals
            break;
        } else if let Some(long) = lossy.strip_prefix("--") {
            match long.split_once('=') {
                Some((name, value)) => {
                    result.push(Arg::Long(name.to_string(), lossy.to_string(), index));
                    result.push(Arg::Attached(value.to_string(), index));
                }
                None => result.push(Arg::Long(long.to_string(), lossy.to_string(), index)),
            }
        } else if let Some(shorts) = lossy.strip_prefix('-') {
            for c in shorts.chars() {
                result.push(Arg::Short(c, lossy.to_string(), index));
            }
        } else {
            result.push(Arg::Positional(s.to_os_string(), index));
        }
    }

    for (s, index) in iter {
        let s: &OsStr = s.as_ref();
        result.push(Arg::Positional(s.to_os_string(), index));
    }

    result
}
