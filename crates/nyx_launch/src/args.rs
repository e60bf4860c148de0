//! Argument-vector tokenizer.
//!
//! Scans argv into discrete flag events plus the residual positionals.
//! Grouped short flags (`-OOv`) yield one event per letter, which keeps the
//! counting rule uniform for every countable flag. Value flags (`-W`, `-c`,
//! `-m`) consume the cluster remainder if non-empty, otherwise the next
//! token.
//!
//! Design: single linear pass over argv, no backtracking; the first token
//! that is `-` alone or does not start with `-` ends flag scanning.

use smallvec::SmallVec;

use crate::errors::LaunchError;

/// One occurrence of a recognized flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlagEvent {
    Debug,
    Inspect,
    Isolate,
    Optimize,
    DontWriteBytecode,
    NoUserSite,
    NoSite,
    IgnoreEnvironment,
    Verbose,
    Quiet,
    /// `-t`, accepted for compatibility; the resolver ignores it.
    TabCheck,
    WarnFilter(String),
    Command(String),
    Module(String),
    Version,
    Help,
}

/// Flag events fit inline for every realistic command line.
pub type FlagEvents = SmallVec<[FlagEvent; 8]>;

/// Tokenizer output: flag events in encounter order, then everything from
/// the first non-flag token on, verbatim.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub events: FlagEvents,
    pub positional: Vec<String>,
}

/// Split an argument vector into flag events and positionals.
pub fn scan_args(argv: &[String]) -> Result<ScanResult, LaunchError> {
    let mut events = FlagEvents::new();
    let mut i = 0;
    while i < argv.len() {
        let a = argv[i].as_str();
        if a == "--version" {
            events.push(FlagEvent::Version);
        } else if a == "--help" {
            events.push(FlagEvent::Help);
        } else if a.starts_with("--") {
            return Err(LaunchError::UnknownFlag(a.to_string()));
        } else if a.len() > 1 && a.starts_with('-') {
            scan_cluster(a, argv, &mut i, &mut events)?;
        } else {
            // Bare "-" (stdin) or a non-flag token: positionals from here on.
            break;
        }
        i += 1;
    }
    Ok(ScanResult {
        events,
        positional: argv[i..].to_vec(),
    })
}

/// Scan one `-xyz` token. `i` is advanced when a value flag consumes the
/// following token.
fn scan_cluster(
    token: &str,
    argv: &[String],
    i: &mut usize,
    events: &mut FlagEvents,
) -> Result<(), LaunchError> {
    let letters = &token[1..];
    for (pos, c) in letters.char_indices() {
        let event = match c {
            'd' => FlagEvent::Debug,
            'i' => FlagEvent::Inspect,
            'I' => FlagEvent::Isolate,
            'O' => FlagEvent::Optimize,
            'B' => FlagEvent::DontWriteBytecode,
            's' => FlagEvent::NoUserSite,
            'S' => FlagEvent::NoSite,
            'E' => FlagEvent::IgnoreEnvironment,
            'v' => FlagEvent::Verbose,
            'q' => FlagEvent::Quiet,
            't' => FlagEvent::TabCheck,
            'V' => FlagEvent::Version,
            'h' => FlagEvent::Help,
            'W' | 'c' | 'm' => {
                let rest = &letters[pos + 1..];
                let value = if !rest.is_empty() {
                    rest.to_string()
                } else {
                    *i += 1;
                    argv.get(*i)
                        .cloned()
                        .ok_or(LaunchError::MissingFlagValue(flag_name(c)))?
                };
                events.push(match c {
                    'W' => FlagEvent::WarnFilter(value),
                    'c' => FlagEvent::Command(value),
                    _ => FlagEvent::Module(value),
                });
                return Ok(());
            }
            _ => return Err(LaunchError::UnknownFlag(token.to_string())),
        };
        events.push(event);
    }
    Ok(())
}

fn flag_name(c: char) -> &'static str {
    match c {
        'W' => "-W",
        'c' => "-c",
        _ => "-m",
    }
}
