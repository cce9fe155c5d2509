//! Start-of-turn status processing.

use crate::battle::state::{BattleLog, LogCategory, LogMessage, TurnRng};
use crate::combatant::{Combatant, StatusConditions};
use schema::StatusKind;

/// Chance that a confused combatant hits itself instead of moving.
pub const CONFUSION_SELF_HIT_CHANCE: f64 = 0.33;
pub const POISON_DAMAGE_DIVISOR: u16 = 8;
pub const CONFUSION_DAMAGE_DIVISOR: u16 = 3;

/// Why a combatant fainted during its status tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFaint {
    Status,
    ConfusionSelfHit,
}

/// Result of ticking one combatant's conditions before it acts.
#[derive(Debug, Clone)]
pub struct StatusTick {
    pub combatant: Combatant,
    pub log: Vec<LogMessage>,
    pub can_act: bool,
    /// HP actually lost to status this tick
    pub self_inflicted_damage: u16,
    pub self_hit: bool,
    pub fainted: Option<StatusFaint>,
}

pub fn poison_damage(combatant: &Combatant) -> u16 {
    (combatant.max_hp / POISON_DAMAGE_DIVISOR).max(1)
}

pub fn confusion_damage(combatant: &Combatant) -> u16 {
    (combatant.stats.atk / CONFUSION_DAMAGE_DIVISOR).max(1)
}

/// Applies every per-turn status consequence to `combatant`.
///
/// Conditions tick in the order they were applied. Damage from all of them is
/// summed and subtracted once at the end, so a combatant can take poison
/// damage and still hit itself in confusion in the same tick.
pub fn tick_start_of_turn(combatant: &Combatant, rng: &mut TurnRng) -> StatusTick {
    let mut updated = combatant.clone();
    let mut log = BattleLog::new();

    if combatant.is_fainted() {
        tracing::warn!(combatant = %combatant.id, "status tick requested for a fainted combatant");
        return StatusTick {
            combatant: updated,
            log: Vec::new(),
            can_act: false,
            self_inflicted_damage: 0,
            self_hit: false,
            fainted: None,
        };
    }

    let mut can_act = true;
    let mut self_hit = false;
    let mut status_loss: u32 = 0;
    let mut confusion_loss: u32 = 0;
    let mut remaining = StatusConditions::new();

    for condition in combatant.conditions.iter() {
        // Expiry is checked before the effect: an expiring condition does nothing this turn
        let Some(ticked) = condition.tick() else {
            log.push(
                LogMessage::new(
                    LogCategory::StatusExpired,
                    format!(
                        "{} is no longer {}!",
                        combatant.name,
                        condition.kind.applied_verb()
                    ),
                )
                .target(combatant),
            );
            continue;
        };
        remaining.insert(ticked);

        match ticked.kind {
            StatusKind::Poison => {
                let damage = poison_damage(combatant);
                status_loss += u32::from(damage);
                log.push(
                    LogMessage::new(
                        LogCategory::StatusDamage,
                        format!(
                            "{} is hurt by poison! ({} damage)",
                            combatant.name, damage
                        ),
                    )
                    .target(combatant),
                );
            }
            StatusKind::Confusion => {
                if rng.next_outcome("Confusion Self-Hit Check") < CONFUSION_SELF_HIT_CHANCE {
                    let damage = confusion_damage(combatant);
                    confusion_loss += u32::from(damage);
                    self_hit = true;
                    can_act = false;
                    log.push(
                        LogMessage::new(
                            LogCategory::SelfHit,
                            format!(
                                "{} hurt itself in its confusion! ({} damage)",
                                combatant.name, damage
                            ),
                        )
                        .source(combatant)
                        .target(combatant),
                    );
                } else {
                    log.push(
                        LogMessage::new(
                            LogCategory::Info,
                            format!(
                                "{} shook off its confusion and prepared to attack!",
                                combatant.name
                            ),
                        )
                        .target(combatant),
                    );
                }
            }
            // Only matters to the accuracy check
            StatusKind::Blindness => {}
        }
    }

    updated.conditions = remaining;
    let total_loss = (status_loss + confusion_loss).min(u32::from(u16::MAX)) as u16;
    let lost = updated.take_damage(total_loss);

    let fainted = if updated.is_fainted() {
        // Confusion takes the blame only when the other conditions alone would have been survivable
        let cause = if self_hit && u32::from(combatant.hp()) > status_loss {
            StatusFaint::ConfusionSelfHit
        } else {
            StatusFaint::Status
        };
        let text = match cause {
            StatusFaint::ConfusionSelfHit => {
                format!("{} hurt itself in its confusion and fainted!", combatant.name)
            }
            StatusFaint::Status => {
                format!("{} fainted from its status condition!", combatant.name)
            }
        };
        log.push(LogMessage::new(LogCategory::Faint, text).target(combatant));
        Some(cause)
    } else {
        None
    };

    tracing::debug!(
        combatant = %combatant.id,
        lost,
        can_act,
        self_hit,
        conditions = updated.conditions.len(),
        "status tick"
    );

    StatusTick {
        combatant: updated,
        log: log.into_messages(),
        can_act,
        self_inflicted_damage: lost,
        self_hit,
        fainted,
    }
}
