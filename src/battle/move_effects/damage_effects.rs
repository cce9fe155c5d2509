use super::EffectContext;
use crate::battle::state::{BattleLog, LogCategory, LogMessage};
use crate::combatant::Combatant;
use schema::{Element, MoveDefinition};

/// Damage `move_def` does to `defender`: `power + atk/2 - def/3`, scaled by
/// element effectiveness, rounded, and never less than 1.
pub fn calculate_damage(move_def: &MoveDefinition, attacker: &Combatant, defender: &Combatant) -> u16 {
    let raw = f64::from(move_def.power) + f64::from(attacker.stats.atk) / 2.0
        - f64::from(defender.stats.def) / 3.0;
    let effectiveness = Element::effectiveness(move_def.element, defender.element);
    (raw * effectiveness)
        .round()
        .clamp(1.0, f64::from(u16::MAX)) as u16
}

/// Deals the move's damage to the defender. Returns the damage dealt.
pub(super) fn apply_damage_effect(context: &mut EffectContext, log: &mut BattleLog) -> u16 {
    let damage = calculate_damage(context.move_def, &context.attacker, &context.defender);
    let remaining = {
        let defender = &mut context.defender;
        defender.take_damage(damage);
        defender.hp()
    };

    tracing::debug!(
        attacker = %context.attacker.id,
        defender = %context.defender.id,
        damage,
        remaining,
        "damage dealt"
    );

    log.push(
        LogMessage::new(
            LogCategory::Damage,
            format!("{} took {} damage!", context.defender.name, damage),
        )
        .source(&context.attacker)
        .target(&context.defender),
    );

    if context.defender.is_fainted() {
        log.push(
            LogMessage::new(
                LogCategory::Faint,
                format!("{} fainted!", context.defender.name),
            )
            .source(&context.attacker)
            .target(&context.defender),
        );
    }

    damage
}
