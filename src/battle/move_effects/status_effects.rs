use super::EffectContext;
use crate::battle::state::{BattleLog, LogCategory, LogMessage, TurnRng};
use crate::combatant::ActiveStatusCondition;
use schema::{StatusDuration, StatusKind, Target};

pub(super) fn apply_status_effect(
    target: Target,
    status: StatusKind,
    duration: Option<u8>,
    chance: Option<f64>,
    context: &mut EffectContext,
    rng: &mut TurnRng,
    log: &mut BattleLog,
) -> bool {
    let source = context.attacker.clone();
    let move_name = context.move_def.name.clone();
    let combatant = context.target_mut(target);

    // Re-applying never stacks or refreshes the duration
    if combatant.has_status(status) {
        log.push(
            LogMessage::new(
                LogCategory::StatusFailed,
                format!("{} is already {}!", combatant.name, status.applied_verb()),
            )
            .source(&source)
            .target(combatant),
        );
        return false;
    }

    let chance = chance.unwrap_or(1.0).clamp(0.0, 1.0);
    let roll = rng.next_outcome(&format!("Apply {} Check", status));
    if roll >= chance {
        log.push(
            LogMessage::new(
                LogCategory::StatusFailed,
                format!(
                    "{} failed to apply {} to {}!",
                    move_name, status, combatant.name
                ),
            )
            .source(&source)
            .target(combatant),
        );
        return false;
    }

    let remaining = StatusDuration::from_declared(duration, status);
    combatant
        .conditions
        .insert(ActiveStatusCondition::new(status, remaining));
    tracing::debug!(combatant = %combatant.id, %status, ?remaining, "status applied");
    log.push(
        LogMessage::new(
            LogCategory::StatusApplied,
            format!("{} was {}!", combatant.name, status.applied_verb()),
        )
        .source(&source)
        .target(combatant),
    );
    true
}
