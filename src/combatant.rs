use crate::errors::SnapshotError;
use schema::{Element, SpeciesData, StatKind, StatusDuration, StatusKind};
use serde::{Deserialize, Serialize};

/// Accuracy and evasion every combatant starts a battle with.
pub const BASELINE_ACCURACY: u16 = 100;
pub const BASELINE_EVASION: u16 = 100;

/// Lowest value a non-HP stat may ever hold.
pub const MIN_STAT_VALUE: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spd: u16,
    pub int: u16, // Carried from species data, no formula reads it yet
    pub accuracy: u16,
    pub evasion: u16,
}

impl Stats {
    pub fn get(&self, stat: StatKind) -> u16 {
        match stat {
            StatKind::Atk => self.atk,
            StatKind::Def => self.def,
            StatKind::Spd => self.spd,
            StatKind::Accuracy => self.accuracy,
            StatKind::Evasion => self.evasion,
        }
    }

    /// Sets a non-HP stat, flooring it at `MIN_STAT_VALUE`.
    pub fn set(&mut self, stat: StatKind, value: u16) {
        let value = value.max(MIN_STAT_VALUE);
        match stat {
            StatKind::Atk => self.atk = value,
            StatKind::Def => self.def = value,
            StatKind::Spd => self.spd = value,
            StatKind::Accuracy => self.accuracy = value,
            StatKind::Evasion => self.evasion = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatusCondition {
    pub kind: StatusKind,
    pub remaining: StatusDuration,
}

impl ActiveStatusCondition {
    pub fn new(kind: StatusKind, remaining: StatusDuration) -> Self {
        Self { kind, remaining }
    }

    /// Counts the condition down by one turn.
    /// Returns `None` once a finite duration reaches zero.
    pub fn tick(&self) -> Option<Self> {
        match self.remaining {
            StatusDuration::Unlimited => Some(*self),
            StatusDuration::Turns(turns) if turns <= 1 => None,
            StatusDuration::Turns(turns) => Some(Self {
                kind: self.kind,
                remaining: StatusDuration::Turns(turns - 1),
            }),
        }
    }
}

/// Active conditions in the order they were applied, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusConditions(Vec<ActiveStatusCondition>);

impl StatusConditions {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.0.iter().any(|condition| condition.kind == kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&ActiveStatusCondition> {
        self.0.iter().find(|condition| condition.kind == kind)
    }

    /// Adds a condition unless one of the same kind is already present.
    /// Returns whether the condition was added.
    pub fn insert(&mut self, condition: ActiveStatusCondition) -> bool {
        if self.has(condition.kind) {
            return false;
        }
        self.0.push(condition);
        true
    }

    pub fn remove(&mut self, kind: StatusKind) -> Option<ActiveStatusCondition> {
        let position = self.0.iter().position(|condition| condition.kind == kind)?;
        Some(self.0.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveStatusCondition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Drops later duplicates so decoded data keeps the one-per-kind rule.
    fn dedup_kinds(&mut self) {
        let mut seen = Vec::with_capacity(self.0.len());
        self.0.retain(|condition| {
            if seen.contains(&condition.kind) {
                false
            } else {
                seen.push(condition.kind);
                true
            }
        });
    }
}

impl FromIterator<ActiveStatusCondition> for StatusConditions {
    fn from_iter<I: IntoIterator<Item = ActiveStatusCondition>>(iter: I) -> Self {
        let mut conditions = StatusConditions::new();
        for condition in iter {
            conditions.insert(condition);
        }
        conditions
    }
}

/// One creature taking part in a battle.
///
/// Combatants are plain values: the engine reads snapshots and hands back new
/// ones, so callers decide when (and whether) to merge results into a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: String,
    pub name: String,
    pub species: String, // Key into the species catalog
    pub element: Element,
    pub stats: Stats,
    pub max_hp: u16,
    pub moves: Vec<String>,
    #[serde(default)]
    pub conditions: StatusConditions,
}

impl Combatant {
    /// Create a full-health combatant from species data
    pub fn from_species(id: impl Into<String>, species: &SpeciesData) -> Self {
        let base = species.base_stats;
        Combatant {
            id: id.into(),
            name: species.name.clone(),
            species: species.id.clone(),
            element: species.element,
            stats: Stats {
                hp: base.hp,
                atk: base.atk.max(MIN_STAT_VALUE),
                def: base.def.max(MIN_STAT_VALUE),
                spd: base.spd.max(MIN_STAT_VALUE),
                int: base.int.max(MIN_STAT_VALUE),
                accuracy: BASELINE_ACCURACY,
                evasion: BASELINE_EVASION,
            },
            max_hp: base.hp,
            moves: species.moves.clone(),
            conditions: StatusConditions::new(),
        }
    }

    pub fn hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.hp == 0
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.conditions.has(kind)
    }

    pub fn knows_move(&self, move_id: &str) -> bool {
        self.moves.iter().any(|known| known == move_id)
    }

    /// Returns a copy with hp set, clamped into `[0, max_hp]`.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.stats.hp = hp.min(self.max_hp);
        self
    }

    /// Removes up to `amount` hp, never going below zero.
    /// Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let lost = amount.min(self.stats.hp);
        self.stats.hp -= lost;
        lost
    }

    /// Clamps every field back into its legal range.
    pub fn normalized(mut self) -> Self {
        self.stats.hp = self.stats.hp.min(self.max_hp);
        self.stats.atk = self.stats.atk.max(MIN_STAT_VALUE);
        self.stats.def = self.stats.def.max(MIN_STAT_VALUE);
        self.stats.spd = self.stats.spd.max(MIN_STAT_VALUE);
        self.stats.int = self.stats.int.max(MIN_STAT_VALUE);
        self.stats.accuracy = self.stats.accuracy.max(MIN_STAT_VALUE);
        self.stats.evasion = self.stats.evasion.max(MIN_STAT_VALUE);
        self.conditions.dedup_kinds();
        self
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let combatant: Combatant = serde_json::from_str(json)?;
        Ok(combatant.normalized())
    }

    /// Compact binary snapshot (postcard).
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(postcard::to_allocvec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let combatant: Combatant = postcard::from_bytes(bytes)?;
        Ok(combatant.normalized())
    }
}
