use crate::battle::conditions::tick_start_of_turn;
use crate::battle::move_effects::apply_move_effects;
use crate::battle::state::{BattleLog, LogCategory, LogMessage, TurnOutcome, TurnResult, TurnRng};
use crate::battle::stats::resolve_accuracy;
use crate::combatant::Combatant;
use crate::move_data::MoveCatalog;

/// Main entry point for turn resolution.
///
/// Resolves `attacker` using `move_id` against `defender` as one atomic step:
/// start-of-turn status ticks, the action announcement, the accuracy roll,
/// then damage and secondary effects. The inputs are never mutated; the
/// returned `TurnResult` carries fresh snapshots of both combatants.
///
/// Problems with the inputs (an unknown move, a fainted combatant) never
/// panic. They produce `TurnOutcome::Error` with a single diagnostic log and
/// the inputs echoed back.
pub fn resolve_turn(
    attacker: &Combatant,
    defender: &Combatant,
    move_id: &str,
    catalog: &MoveCatalog,
    rng: &mut TurnRng,
) -> TurnResult {
    let Some(move_def) = catalog.get(move_id) else {
        return rejected_turn(
            attacker,
            defender,
            format!("Unknown move '{}'; the turn was skipped.", move_id),
        );
    };
    if let Err(reason) = move_def.validate() {
        return rejected_turn(
            attacker,
            defender,
            format!(
                "Move '{}' is invalid ({}); the turn was skipped.",
                move_id, reason
            ),
        );
    }
    if attacker.is_fainted() {
        return rejected_turn(
            attacker,
            defender,
            format!("{} has fainted and cannot act; the turn was skipped.", attacker.name),
        );
    }
    if defender.is_fainted() {
        return rejected_turn(
            attacker,
            defender,
            format!("{} has already fainted; the turn was skipped.", defender.name),
        );
    }

    let mut log = BattleLog::new();

    let tick = tick_start_of_turn(attacker, rng);
    log.extend(tick.log);
    let attacker = tick.combatant;

    if tick.fainted.is_some() {
        return finish(attacker, defender.clone(), log, TurnOutcome::FaintedSelf);
    }
    if tick.self_hit {
        return finish(attacker, defender.clone(), log, TurnOutcome::SelfHit);
    }
    if !tick.can_act {
        return finish(attacker, defender.clone(), log, TurnOutcome::NoEffect);
    }

    log.push(
        LogMessage::new(
            LogCategory::Action,
            format!("{} used {}!", attacker.name, move_def.name),
        )
        .source(&attacker)
        .target(defender),
    );

    let accuracy = resolve_accuracy(move_def, &attacker, defender, rng);
    log.extend(accuracy.log);
    if !accuracy.hit {
        return finish(attacker, defender.clone(), log, TurnOutcome::Miss);
    }

    let effects = apply_move_effects(move_def, &attacker, defender, rng);
    log.extend(effects.log);

    let outcome = if effects.defender_fainted {
        TurnOutcome::FaintedTarget
    } else if effects.damage_dealt > 0 || effects.effect_applied {
        TurnOutcome::Hit
    } else {
        TurnOutcome::NoEffect
    };

    finish(effects.attacker, effects.defender, log, outcome)
}

fn finish(
    attacker: Combatant,
    defender: Combatant,
    log: BattleLog,
    outcome: TurnOutcome,
) -> TurnResult {
    tracing::debug!(
        attacker = %attacker.id,
        defender = %defender.id,
        ?outcome,
        attacker_hp = attacker.hp(),
        defender_hp = defender.hp(),
        "turn resolved"
    );
    TurnResult {
        attacker,
        defender,
        log: log.into_messages(),
        outcome,
    }
}

fn rejected_turn(attacker: &Combatant, defender: &Combatant, text: String) -> TurnResult {
    tracing::warn!(attacker = %attacker.id, defender = %defender.id, "{}", text);
    TurnResult {
        attacker: attacker.clone(),
        defender: defender.clone(),
        log: vec![LogMessage::new(LogCategory::Error, text)
            .source(attacker)
            .target(defender)],
        outcome: TurnOutcome::Error,
    }
}
