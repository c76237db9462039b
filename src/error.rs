//! Error taxonomy.
//!
//! Everything here is an input problem: wrong counts, a pool that does not
//! fill the teams exactly, or a roster that cannot be read. Once a pool has
//! been validated the optimizer itself cannot fail.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("team count must be at least 1")]
    NoTeams,

    #[error("players per team must be at least 1")]
    EmptyTeams,

    #[error("pool size mismatch: got {players} players, expected {expected}")]
    SizeMismatch { players: usize, expected: usize },

    #[error("duplicate participant id `{0}`")]
    DuplicateId(String),

    #[error("participant `{id}` has a non-finite rating")]
    NonFiniteRating { id: String },

    #[error("unknown participant `{0}`")]
    UnknownParticipant(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = BalanceError> = std::result::Result<T, E>;
