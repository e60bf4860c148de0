//! Environment-snapshot reader.
//!
//! Reads the fixed set of launcher variables out of an explicit snapshot;
//! the live process environment is never consulted from the library. The
//! reader is skipped entirely when the configuration ignores the
//! environment.

use std::collections::HashMap;

use crate::config::HashSeed;
use crate::errors::LaunchError;

/// Hash-seed variable: `"random"` or a decimal integer in [0, 2^32-1].
pub const ENV_HASHSEED: &str = "NYX_HASHSEED";
/// Colon-separated directories prefixed to the module search path.
pub const ENV_PATH: &str = "NYX_PATH";
/// Comma-separated warning filters, applied ahead of CLI `-W` filters.
pub const ENV_WARNINGS: &str = "NYX_WARNINGS";

/// Partial configuration contributed by the environment.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub hash_seed: Option<HashSeed>,
    pub path: Vec<String>,
    pub warn_options: Vec<String>,
}

/// Parse the launcher variables from `snapshot`.
///
/// A variable set to the empty string counts as absent, matching the
/// launcher convention for all three variables.
pub fn read_env(snapshot: &HashMap<String, String>) -> Result<EnvConfig, LaunchError> {
    let mut out = EnvConfig::default();
    if let Some(raw) = get_nonempty(snapshot, ENV_HASHSEED) {
        out.hash_seed = Some(parse_hash_seed(raw)?);
    }
    if let Some(raw) = get_nonempty(snapshot, ENV_PATH) {
        out.path = raw.split(':').map(str::to_string).collect();
    }
    if let Some(raw) = get_nonempty(snapshot, ENV_WARNINGS) {
        out.warn_options = raw.split(',').map(str::to_string).collect();
    }
    Ok(out)
}

fn get_nonempty<'a>(snapshot: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    match snapshot.get(name) {
        Some(v) if !v.is_empty() => Some(v),
        _ => None,
    }
}

fn parse_hash_seed(raw: &str) -> Result<HashSeed, LaunchError> {
    if raw == "random" {
        return Ok(HashSeed::Random);
    }
    // Digits only: no sign, no whitespace. Overflow past u32 is rejected.
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(seed) = raw.parse::<u32>() {
            return Ok(HashSeed::Fixed(seed));
        }
    }
    Err(LaunchError::InvalidEnvironmentValue {
        name: ENV_HASHSEED,
        value: raw.to_string(),
    })
}
