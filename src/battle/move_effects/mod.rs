mod damage_effects;
mod stat_effects;
mod status_effects;

use crate::battle::state::{BattleLog, LogMessage, TurnRng};
use crate::combatant::Combatant;
use schema::{MoveDefinition, MoveEffect, Target};

use self::{damage_effects::*, stat_effects::*, status_effects::*};

pub use self::damage_effects::calculate_damage;
pub use self::stat_effects::STAT_POINTS_PER_STAGE;

/// Working copies of both combatants while one move's effects resolve.
#[derive(Debug, Clone)]
pub struct EffectContext<'a> {
    pub move_def: &'a MoveDefinition,
    pub attacker: Combatant,
    pub defender: Combatant,
}

impl<'a> EffectContext<'a> {
    pub fn new(move_def: &'a MoveDefinition, attacker: &Combatant, defender: &Combatant) -> Self {
        Self {
            move_def,
            attacker: attacker.clone(),
            defender: defender.clone(),
        }
    }

    pub fn target(&self, target: Target) -> &Combatant {
        match target {
            Target::User => &self.attacker,
            Target::Opponent => &self.defender,
        }
    }

    pub fn target_mut(&mut self, target: Target) -> &mut Combatant {
        match target {
            Target::User => &mut self.attacker,
            Target::Opponent => &mut self.defender,
        }
    }
}

/// What applying a move's payload did to both combatants.
#[derive(Debug, Clone)]
pub struct EffectOutcome {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub log: Vec<LogMessage>,
    pub damage_dealt: u16,
    /// True if any secondary effect took hold
    pub effect_applied: bool,
    pub defender_fainted: bool,
}

pub trait MoveEffectExt {
    /// Applies one secondary effect. Returns whether it changed anything.
    fn apply(&self, context: &mut EffectContext, rng: &mut TurnRng, log: &mut BattleLog) -> bool;
}

impl MoveEffectExt for MoveEffect {
    fn apply(&self, context: &mut EffectContext, rng: &mut TurnRng, log: &mut BattleLog) -> bool {
        // Effects aimed at a fainted combatant are dropped without a message
        if context.target(self.target()).is_fainted() {
            return false;
        }
        match self {
            MoveEffect::StatChange {
                stat,
                stages,
                target,
            } => apply_stat_change_effect(*target, *stat, *stages, context, log),
            MoveEffect::ApplyStatus {
                status,
                target,
                duration,
                chance,
            } => apply_status_effect(*target, *status, *duration, *chance, context, rng, log),
        }
    }
}

/// Applies a move that has already passed its accuracy check: damage first,
/// then each secondary effect in declaration order.
pub fn apply_move_effects(
    move_def: &MoveDefinition,
    attacker: &Combatant,
    defender: &Combatant,
    rng: &mut TurnRng,
) -> EffectOutcome {
    let mut context = EffectContext::new(move_def, attacker, defender);
    let mut log = BattleLog::new();

    let damage_dealt = if move_def.deals_damage() {
        apply_damage_effect(&mut context, &mut log)
    } else {
        0
    };

    let mut effect_applied = false;
    for effect in &move_def.effects {
        effect_applied |= effect.apply(&mut context, rng, &mut log);
    }

    let defender_fainted = !defender.is_fainted() && context.defender.is_fainted();

    EffectOutcome {
        attacker: context.attacker,
        defender: context.defender,
        log: log.into_messages(),
        damage_dealt,
        effect_applied,
        defender_fainted,
    }
}
