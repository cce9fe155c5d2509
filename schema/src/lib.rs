// Critter Clash Schema - Shared type definitions
// This crate contains the static data types shared between the battle engine
// and anything that authors or loads game data (RON catalogs, tooling).

// Re-export the main types
pub use element_types::*;
pub use move_types::*;
pub use species_data::*;

pub mod element_types;
pub mod move_types;
pub mod species_data;
