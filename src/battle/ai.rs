//! A module for defining AI behaviors for battle opponents.

use crate::battle::state::TurnRng;
use crate::combatant::Combatant;

/// A trait for any system that can decide which move a combatant uses.
pub trait Behavior {
    /// Picks a move id for `combatant` to use against `opponent`.
    /// Returns `None` when the combatant has nothing to use.
    fn decide_move(
        &self,
        combatant: &Combatant,
        opponent: &Combatant,
        rng: &mut TurnRng,
    ) -> Option<String>;
}

/// Picks uniformly among the combatant's known moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }

    /// Consumes exactly one draw, or none for an empty move list.
    pub fn choose_move(&self, combatant: &Combatant, rng: &mut TurnRng) -> Option<String> {
        if combatant.moves.is_empty() {
            return None;
        }
        let index = rng.pick_index(combatant.moves.len(), "AI Move Choice");
        combatant.moves.get(index).cloned()
    }
}

impl Behavior for RandomAi {
    fn decide_move(
        &self,
        combatant: &Combatant,
        _opponent: &Combatant,
        rng: &mut TurnRng,
    ) -> Option<String> {
        self.choose_move(combatant, rng)
    }
}
