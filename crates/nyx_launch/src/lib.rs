//! Nyx launcher front end.
//!
//! Turns an argument vector and an environment snapshot into the canonical
//! [`RuntimeConfig`] the interpreter core boots from. The library performs
//! no I/O of its own: callers pass argv and an environment snapshot in,
//! then decide what to do with the outcome (run, print the version text,
//! or report the error).

mod args;
mod config;
mod env;
mod errors;
mod hash;
mod resolve;

pub use args::{FlagEvent, FlagEvents, ScanResult, scan_args};
pub use config::{HashSeed, RuntimeConfig, SourceMode};
pub use env::{ENV_HASHSEED, ENV_PATH, ENV_WARNINGS, EnvConfig, read_env};
pub use errors::LaunchError;
pub use hash::{derive_secret, random_seed};
pub use resolve::{Resolution, resolve, resolve_with_paths};
