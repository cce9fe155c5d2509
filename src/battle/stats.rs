use crate::battle::state::{LogCategory, LogMessage, TurnRng};
use crate::combatant::Combatant;
use schema::{MoveDefinition, StatusKind};

/// Accuracy multiplier while the attacker is blinded.
pub const BLINDNESS_ACCURACY_FACTOR: f64 = 0.5;
/// Speed advantage (in stat points) that earns one step of dodge bonus.
pub const SPEED_DODGE_STEP: u16 = 10;
pub const DODGE_BONUS_PER_STEP: f64 = 0.05;
pub const MAX_DODGE_BONUS: f64 = 0.30;
pub const MIN_HIT_CHANCE: f64 = 0.10;
pub const MAX_HIT_CHANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyCheck {
    pub hit: bool,
    pub log: Vec<LogMessage>,
}

/// Dodge bonus the defender earns from being faster than the attacker.
pub fn dodge_bonus(attacker_speed: u16, defender_speed: u16) -> f64 {
    let steps = defender_speed.saturating_sub(attacker_speed) / SPEED_DODGE_STEP;
    (f64::from(steps) * DODGE_BONUS_PER_STEP).min(MAX_DODGE_BONUS)
}

/// Probability in `[MIN_HIT_CHANCE, MAX_HIT_CHANCE]` that `move_def` lands.
pub fn hit_chance(move_def: &MoveDefinition, attacker: &Combatant, defender: &Combatant) -> f64 {
    let mut chance = move_def.base_accuracy();

    if attacker.has_status(StatusKind::Blindness) {
        chance *= BLINDNESS_ACCURACY_FACTOR;
    }

    let accuracy = f64::from(attacker.stats.accuracy.max(1));
    let evasion = f64::from(defender.stats.evasion.max(1));
    chance *= accuracy / evasion;

    chance -= dodge_bonus(attacker.stats.spd, defender.stats.spd);

    chance.clamp(MIN_HIT_CHANCE, MAX_HIT_CHANCE)
}

/// Rolls whether `move_def` connects.
///
/// Only offense moves can miss. Defense and status moves always land and
/// consume no draw.
pub fn resolve_accuracy(
    move_def: &MoveDefinition,
    attacker: &Combatant,
    defender: &Combatant,
    rng: &mut TurnRng,
) -> AccuracyCheck {
    if !move_def.can_miss() {
        return AccuracyCheck {
            hit: true,
            log: Vec::new(),
        };
    }

    let chance = hit_chance(move_def, attacker, defender);
    let roll = rng.next_outcome("Accuracy Check");
    let hit = roll < chance;

    tracing::debug!(
        attacker = %attacker.id,
        defender = %defender.id,
        move_id = %move_def.id,
        chance,
        roll,
        hit,
        "accuracy check"
    );

    let log = if hit {
        Vec::new()
    } else {
        vec![LogMessage::new(
            LogCategory::Miss,
            format!(
                "{}'s {} missed {}!",
                attacker.name, move_def.name, defender.name
            ),
        )
        .source(attacker)
        .target(defender)]
    };

    AccuracyCheck { hit, log }
}
