//! Ring description file parsing.
//!
//! The on-disk format is a whitespace-separated token stream: the first
//! token is the participant count, followed by exactly that many integer
//! identifiers in ring order. Distinctness is not checked here; the ring
//! topology is the single validation authority for that precondition.

use std::path::Path;

use tracing::debug;

use crate::InputError;
use crate::Result;

/// Reads and parses a ring description file into an ordered identifier
/// list.
pub fn load_ring_file(path: impl AsRef<Path>) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(InputError::Io)?;

    let mut tokens = contents.split_whitespace();
    let count_token = tokens
        .next()
        .ok_or_else(|| InputError::Malformed("missing participant count".to_string()))?;
    let expected: usize = count_token.parse().map_err(|_| {
        InputError::Malformed(format!("invalid participant count '{}'", count_token))
    })?;

    let identifiers = tokens
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| InputError::Malformed(format!("invalid identifier '{}'", token)))
        })
        .collect::<std::result::Result<Vec<u64>, InputError>>()?;

    if identifiers.len() != expected {
        return Err(InputError::CountMismatch {
            expected,
            actual: identifiers.len(),
        }
        .into());
    }

    debug!(
        "Loaded {} identifiers from {}",
        identifiers.len(),
        path.display()
    );
    Ok(identifiers)
}
