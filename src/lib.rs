//! Critter Clash Battle Engine
//!
//! A small turn-based battle system for bug and fungus critters. The core is
//! [`resolve_turn`], a pure function that takes two combatant snapshots and a
//! move and returns new snapshots plus a structured log.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod move_data;
pub mod species;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, Element, MoveCategory, MoveDefinition, MoveEffect, SpeciesData, StatKind,
    StatusDuration, StatusKind, Target,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::ai::{Behavior, RandomAi};
pub use battle::runner::{BattleRunner, Side, Team};
pub use battle::state::{LogCategory, LogMessage, TurnOutcome, TurnResult, TurnRng};
pub use battle::turn_orchestrator::resolve_turn;

// Runtime and data types.
pub use combatant::{ActiveStatusCondition, Combatant, StatusConditions};
pub use move_data::MoveCatalog;
pub use species::SpeciesCatalog;

// Crate-specific error and result types.
pub use errors::{BattleRunnerError, CatalogError, CatalogResult, RunnerResult, SnapshotError};
