use super::EffectContext;
use crate::battle::state::{BattleLog, LogCategory, LogMessage};
use crate::combatant::MIN_STAT_VALUE;
use schema::{StatKind, Target};

/// Stat points one stage of a stat change adds or removes.
pub const STAT_POINTS_PER_STAGE: i32 = 10;

/// Apply stat change effect. Stat changes always take hold.
pub(super) fn apply_stat_change_effect(
    target: Target,
    stat: StatKind,
    stages: i8,
    context: &mut EffectContext,
    log: &mut BattleLog,
) -> bool {
    if stages == 0 {
        return false;
    }

    let source = context.attacker.clone();
    let combatant = context.target_mut(target);
    let old_value = combatant.stats.get(stat);
    let new_value = (i32::from(old_value) + i32::from(stages) * STAT_POINTS_PER_STAGE)
        .clamp(i32::from(MIN_STAT_VALUE), i32::from(u16::MAX)) as u16;
    combatant.stats.set(stat, new_value);

    let verb = match stages {
        2..=i8::MAX => "sharply rose",
        1 => "rose",
        -1 => "fell",
        _ => "harshly fell",
    };
    log.push(
        LogMessage::new(
            LogCategory::StatChange,
            format!("{}'s {} {}!", combatant.name, stat, verb),
        )
        .source(&source)
        .target(combatant),
    );

    new_value != old_value
}
