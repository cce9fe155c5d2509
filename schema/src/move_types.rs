use crate::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Hit chance used when a move does not declare its own accuracy.
pub const DEFAULT_MOVE_ACCURACY: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Offense,
    Defense,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Offense => write!(f, "Offense"),
            MoveCategory::Defense => write!(f, "Defense"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

/// Stats that moves are allowed to raise or lower. HP is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatKind {
    Atk,
    Def,
    Spd,
    Accuracy,
    Evasion,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::Atk => write!(f, "Attack"),
            StatKind::Def => write!(f, "Defense"),
            StatKind::Spd => write!(f, "Speed"),
            StatKind::Accuracy => write!(f, "Accuracy"),
            StatKind::Evasion => write!(f, "Evasion"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    User,
    Opponent,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::User => write!(f, "User"),
            Target::Opponent => write!(f, "Opponent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatusKind {
    Poison,
    Confusion,
    Blindness,
}

impl StatusKind {
    /// How long a status lasts when the applying effect gives no duration.
    pub fn default_duration(&self) -> StatusDuration {
        match self {
            StatusKind::Poison => StatusDuration::Unlimited,
            StatusKind::Confusion => StatusDuration::Turns(4),
            StatusKind::Blindness => StatusDuration::Unlimited,
        }
    }

    /// Past participle used in log text ("was poisoned!").
    pub fn applied_verb(&self) -> &'static str {
        match self {
            StatusKind::Poison => "poisoned",
            StatusKind::Confusion => "confused",
            StatusKind::Blindness => "blinded",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Poison => write!(f, "poison"),
            StatusKind::Confusion => write!(f, "confusion"),
            StatusKind::Blindness => write!(f, "blindness"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusDuration {
    Turns(u8),
    Unlimited,
}

impl StatusDuration {
    pub fn from_declared(turns: Option<u8>, status: StatusKind) -> Self {
        match turns {
            Some(turns) => StatusDuration::Turns(turns),
            None => status.default_duration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveEffect {
    StatChange {
        stat: StatKind,
        stages: i8,
        target: Target,
    },
    ApplyStatus {
        status: StatusKind,
        target: Target,
        #[serde(default)]
        duration: Option<u8>,
        #[serde(default)]
        chance: Option<f64>,
    },
}

impl MoveEffect {
    pub fn target(&self) -> Target {
        match self {
            MoveEffect::StatChange { target, .. } => *target,
            MoveEffect::ApplyStatus { target, .. } => *target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDefinition {
    pub id: String,
    pub name: String,
    pub element: Element,
    pub power: u16,
    pub category: MoveCategory,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub effects: Vec<MoveEffect>,
}

impl MoveDefinition {
    pub fn base_accuracy(&self) -> f64 {
        self.accuracy.unwrap_or(DEFAULT_MOVE_ACCURACY)
    }

    pub fn deals_damage(&self) -> bool {
        self.category == MoveCategory::Offense && self.power > 0
    }

    /// Only offense moves roll for accuracy.
    pub fn can_miss(&self) -> bool {
        self.category == MoveCategory::Offense
    }

    /// Checks the definition for values the engine cannot interpret.
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("move id is empty".to_string());
        }
        if let Some(accuracy) = self.accuracy {
            if !(0.0..=1.0).contains(&accuracy) {
                return Err(format!("accuracy {} is outside [0, 1]", accuracy));
            }
        }
        for (index, effect) in self.effects.iter().enumerate() {
            match effect {
                MoveEffect::StatChange { stages, .. } => {
                    if *stages == 0 {
                        return Err(format!("effect #{} changes a stat by zero stages", index));
                    }
                }
                MoveEffect::ApplyStatus {
                    duration, chance, ..
                } => {
                    if let Some(chance) = chance {
                        if !(0.0..=1.0).contains(chance) {
                            return Err(format!(
                                "effect #{} has chance {} outside [0, 1]",
                                index, chance
                            ));
                        }
                    }
                    if *duration == Some(0) {
                        return Err(format!("effect #{} has a zero-turn duration", index));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_move() -> MoveDefinition {
        MoveDefinition {
            id: "sporeBurst".to_string(),
            name: "Spore Burst".to_string(),
            element: Element::Poison,
            power: 20,
            category: MoveCategory::Offense,
            accuracy: None,
            effects: vec![MoveEffect::ApplyStatus {
                status: StatusKind::Poison,
                target: Target::Opponent,
                duration: None,
                chance: Some(0.3),
            }],
        }
    }

    #[test]
    fn test_missing_accuracy_defaults() {
        assert_eq!(sample_move().base_accuracy(), DEFAULT_MOVE_ACCURACY);
    }

    #[test]
    fn test_validate_accepts_well_formed_move() {
        assert!(sample_move().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_chance() {
        let mut move_def = sample_move();
        move_def.effects = vec![MoveEffect::ApplyStatus {
            status: StatusKind::Poison,
            target: Target::Opponent,
            duration: None,
            chance: Some(1.5),
        }];
        assert!(move_def.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_stage_change() {
        let mut move_def = sample_move();
        move_def.effects = vec![MoveEffect::StatChange {
            stat: StatKind::Def,
            stages: 0,
            target: Target::User,
        }];
        assert!(move_def.validate().is_err());
    }

    #[test]
    fn test_default_durations() {
        assert_eq!(
            StatusDuration::from_declared(None, StatusKind::Poison),
            StatusDuration::Unlimited
        );
        assert_eq!(
            StatusDuration::from_declared(None, StatusKind::Confusion),
            StatusDuration::Turns(4)
        );
        assert_eq!(
            StatusDuration::from_declared(Some(2), StatusKind::Blindness),
            StatusDuration::Turns(2)
        );
    }

    #[test]
    fn test_effect_parses_from_ron_with_omitted_options() {
        let effect: MoveEffect =
            ron::from_str("ApplyStatus(status: Confusion, target: Opponent)").unwrap();
        assert_eq!(
            effect,
            MoveEffect::ApplyStatus {
                status: StatusKind::Confusion,
                target: Target::Opponent,
                duration: None,
                chance: None,
            }
        );
    }
}
