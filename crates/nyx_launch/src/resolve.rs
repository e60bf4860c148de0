//! Option/environment resolution.
//!
//! Merges tokenizer events and the environment contribution into one
//! [`RuntimeConfig`], applying the per-field precedence and implication
//! rules. Pure function of its inputs: single linear pass, no hidden
//! state, the first error encountered aborts the attempt.

use std::collections::HashMap;

use crate::args::{self, FlagEvent};
use crate::config::{HashSeed, RuntimeConfig, SourceMode};
use crate::env::{self, EnvConfig};
use crate::errors::LaunchError;

/// Resolution outcome. `-h` wins over `-V`; both short-circuit without a
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Help,
    Version,
    Run(RuntimeConfig),
}

enum Selector {
    Command(String),
    Module(String),
}

/// Resolve `argv` against `env_snapshot` with no tool-provided path
/// entries.
pub fn resolve(
    argv: &[String],
    env_snapshot: &HashMap<String, String>,
) -> Result<Resolution, LaunchError> {
    resolve_with_paths(argv, env_snapshot, &[])
}

/// Resolve `argv` against `env_snapshot`. `tool_paths` are appended to the
/// search path after the environment-derived entries; they are not
/// environment-derived, so isolated mode keeps them.
pub fn resolve_with_paths(
    argv: &[String],
    env_snapshot: &HashMap<String, String>,
    tool_paths: &[String],
) -> Result<Resolution, LaunchError> {
    let scan = args::scan_args(argv)?;

    let mut config = RuntimeConfig::default();
    let mut cli_warnings: Vec<String> = Vec::new();
    let mut selector: Option<Selector> = None;
    let mut help = false;
    let mut version = false;

    for event in scan.events {
        match event {
            FlagEvent::Debug => config.debug = true,
            FlagEvent::Inspect => {
                // Always a pair; neither is settable on its own.
                config.inspect = true;
                config.interactive = true;
            }
            FlagEvent::Isolate => config.isolated = true,
            FlagEvent::Optimize => config.optimize += 1,
            FlagEvent::DontWriteBytecode => config.dont_write_bytecode = true,
            FlagEvent::NoUserSite => config.no_user_site = true,
            FlagEvent::NoSite => config.no_site = true,
            FlagEvent::IgnoreEnvironment => config.ignore_environment = true,
            FlagEvent::Verbose => config.verbose += 1,
            FlagEvent::Quiet => config.quiet = true,
            FlagEvent::TabCheck => {}
            FlagEvent::WarnFilter(filter) => cli_warnings.push(filter),
            FlagEvent::Command(code) => {
                set_selector(&mut selector, Selector::Command(code))?;
            }
            FlagEvent::Module(name) => {
                set_selector(&mut selector, Selector::Module(name))?;
            }
            FlagEvent::Version => version = true,
            FlagEvent::Help => help = true,
        }
    }

    if help {
        return Ok(Resolution::Help);
    }
    if version {
        return Ok(Resolution::Version);
    }

    if config.isolated {
        config.ignore_environment = true;
        config.no_user_site = true;
    }

    let env_config = if config.ignore_environment {
        EnvConfig::default()
    } else {
        env::read_env(env_snapshot)?
    };

    config.hash_seed = env_config.hash_seed.unwrap_or(HashSeed::Random);

    // Environment entries first (already comma-split), then CLI `-W`
    // values unsplit.
    config.warn_options = env_config.warn_options;
    config.warn_options.extend(cli_warnings);

    config.search_path.extend(env_config.path);
    config.search_path.extend(tool_paths.iter().cloned());

    config.source = select_source(selector, scan.positional);

    Ok(Resolution::Run(config))
}

fn set_selector(slot: &mut Option<Selector>, selector: Selector) -> Result<(), LaunchError> {
    if slot.is_some() {
        return Err(LaunchError::ConflictingSourceSelection);
    }
    *slot = Some(selector);
    Ok(())
}

/// An explicit `-c`/`-m` wins over a bare filename positional, which then
/// stays in the program argument list.
fn select_source(selector: Option<Selector>, positional: Vec<String>) -> SourceMode {
    match selector {
        Some(Selector::Command(code)) => SourceMode::Command {
            code,
            args: designated("-c", positional),
        },
        Some(Selector::Module(name)) => SourceMode::Module {
            name,
            args: designated("-m", positional),
        },
        // Implied stdin keeps the empty designator; explicit "-" stays.
        None if positional.is_empty() => SourceMode::Stdin {
            args: vec![String::new()],
        },
        None if positional[0] == "-" => SourceMode::Stdin { args: positional },
        None => {
            let path = positional[0].clone();
            SourceMode::File {
                path,
                args: positional,
            }
        }
    }
}

fn designated(designator: &str, positional: Vec<String>) -> Vec<String> {
    let mut args = Vec::with_capacity(positional.len() + 1);
    args.push(designator.to_string());
    args.extend(positional);
    args
}
