pub mod ai;
pub mod conditions;
pub mod move_effects;
pub mod runner;
pub mod state;
pub mod stats;
pub mod turn_orchestrator;

#[cfg(test)]
mod tests;
