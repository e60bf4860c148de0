//! Resolved launcher configuration types.

use std::fmt;

use crate::hash;

/// How the process-wide hash perturbation seed is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashSeed {
    /// Explicit seed. `Fixed(0)` disables randomization entirely.
    Fixed(u32),
    /// A fresh seed is drawn per process.
    Random,
}

impl HashSeed {
    /// Whether string hashing is perturbed at all.
    pub fn randomized(self) -> bool {
        self != HashSeed::Fixed(0)
    }

    /// Materialize the 64-bit secret the interpreter core hashes with.
    pub fn secret(self) -> u64 {
        match self {
            HashSeed::Fixed(seed) => hash::derive_secret(seed),
            HashSeed::Random => hash::derive_secret(hash::random_seed()),
        }
    }
}

/// What the runtime will execute, with the program-visible argument list.
///
/// Exactly one variant is selected per invocation. The first `args` element
/// is the source designator (`path`, `-m`, `-c`, `-`, or `""` for implied
/// stdin); the rest are the residual positionals, verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceMode {
    File { path: String, args: Vec<String> },
    Module { name: String, args: Vec<String> },
    Command { code: String, args: Vec<String> },
    Stdin { args: Vec<String> },
}

impl SourceMode {
    /// Program argument list, designator first.
    pub fn args(&self) -> &[String] {
        match self {
            SourceMode::File { args, .. }
            | SourceMode::Module { args, .. }
            | SourceMode::Command { args, .. }
            | SourceMode::Stdin { args } => args,
        }
    }
}

/// Canonical runtime configuration handed to the interpreter core.
///
/// Built once per resolution pass, immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub debug: bool,
    pub inspect: bool,
    pub interactive: bool,
    pub optimize: u32,
    pub dont_write_bytecode: bool,
    pub no_user_site: bool,
    pub no_site: bool,
    pub ignore_environment: bool,
    pub verbose: u32,
    pub quiet: bool,
    pub isolated: bool,
    pub hash_seed: HashSeed,
    pub warn_options: Vec<String>,
    pub search_path: Vec<String>,
    pub source: SourceMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            debug: false,
            inspect: false,
            interactive: false,
            optimize: 0,
            dont_write_bytecode: false,
            no_user_site: false,
            no_site: false,
            ignore_environment: false,
            verbose: 0,
            quiet: false,
            isolated: false,
            hash_seed: HashSeed::Random,
            // The leading empty entry is the current-directory marker.
            search_path: vec![String::new()],
            warn_options: Vec::new(),
            source: SourceMode::Stdin {
                args: vec![String::new()],
            },
        }
    }
}

impl fmt::Display for RuntimeConfig {
    /// The one-line flags record the runtime exposes to programs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flags(debug={}, inspect={}, interactive={}, optimize={}, \
             dont_write_bytecode={}, no_user_site={}, no_site={}, \
             ignore_environment={}, verbose={}, quiet={}, \
             hash_randomization={}, isolated={})",
            self.debug as u8,
            self.inspect as u8,
            self.interactive as u8,
            self.optimize,
            self.dont_write_bytecode as u8,
            self.no_user_site as u8,
            self.no_site as u8,
            self.ignore_environment as u8,
            self.verbose,
            self.quiet as u8,
            self.hash_seed.randomized() as u8,
            self.isolated as u8,
        )
    }
}
