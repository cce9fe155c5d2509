use crate::battle::runner::Side;
use thiserror::Error;

/// Errors raised while loading or validating the move and species catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read from disk
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The catalog text is not valid RON for the expected shape
    #[error("malformed catalog data: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// Two entries share an id
    #[error("duplicate id in catalog: {0}")]
    DuplicateId(String),
    /// A move definition holds values the engine cannot interpret
    #[error("invalid move '{id}': {reason}")]
    InvalidMove { id: String, reason: String },
    /// A species lists a move that the move catalog does not define
    #[error("species '{species}' knows unknown move '{move_id}'")]
    UnknownMove { species: String, move_id: String },
}

/// Errors raised while encoding or decoding combatant snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("json snapshot error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary snapshot error: {0}")]
    Binary(#[from] postcard::Error),
}

/// Errors that can occur when driving a battle through the runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleRunnerError {
    #[error("the battle is already over")]
    BattleOver,
    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),
    #[error("{0} has no conscious creature in play")]
    NoActiveCombatant(Side),
    #[error("'{move_id}' is not a move known by {combatant}")]
    InvalidMove { combatant: String, move_id: String },
    #[error("cannot swap to team slot {index}: {reason}")]
    InvalidSwap { index: usize, reason: String },
    #[error("{combatant} has no moves to choose from")]
    NoMovesAvailable { combatant: String },
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using BattleRunnerError
pub type RunnerResult<T> = Result<T, BattleRunnerError>;
