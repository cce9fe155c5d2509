use crate::combatant::{ActiveStatusCondition, Combatant};
use crate::species::SpeciesCatalog;
use schema::{StatusDuration, StatusKind};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let spider = TestCombatantBuilder::new("jumpingSpider")
///     .with_hp(10)
///     .with_status(StatusKind::Poison, StatusDuration::Unlimited)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    species: &'static str,
    id: Option<String>,
    hp: Option<u16>,
    atk: Option<u16>,
    def: Option<u16>,
    spd: Option<u16>,
    accuracy: Option<u16>,
    evasion: Option<u16>,
    moves: Option<Vec<String>>,
    conditions: Vec<ActiveStatusCondition>,
}

impl TestCombatantBuilder {
    pub fn new(species: &'static str) -> Self {
        Self {
            species,
            id: None,
            hp: None,
            atk: None,
            def: None,
            spd: None,
            accuracy: None,
            evasion: None,
            moves: None,
            conditions: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_atk(mut self, atk: u16) -> Self {
        self.atk = Some(atk);
        self
    }

    pub fn with_def(mut self, def: u16) -> Self {
        self.def = Some(def);
        self
    }

    pub fn with_spd(mut self, spd: u16) -> Self {
        self.spd = Some(spd);
        self
    }

    pub fn with_accuracy(mut self, accuracy: u16) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn with_evasion(mut self, evasion: u16) -> Self {
        self.evasion = Some(evasion);
        self
    }

    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = Some(moves.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn with_status(mut self, kind: StatusKind, remaining: StatusDuration) -> Self {
        self.conditions.push(ActiveStatusCondition::new(kind, remaining));
        self
    }

    pub fn build(self) -> Combatant {
        let species = match SpeciesCatalog::builtin().get(self.species) {
            Some(data) => data,
            None => panic!("Unknown test species {}", self.species),
        };
        let id = self.id.unwrap_or_else(|| self.species.to_string());
        let mut combatant = Combatant::from_species(id, species);

        if let Some(hp) = self.hp {
            combatant = combatant.with_hp(hp);
        }
        if let Some(atk) = self.atk {
            combatant.stats.atk = atk;
        }
        if let Some(def) = self.def {
            combatant.stats.def = def;
        }
        if let Some(spd) = self.spd {
            combatant.stats.spd = spd;
        }
        if let Some(accuracy) = self.accuracy {
            combatant.stats.accuracy = accuracy;
        }
        if let Some(evasion) = self.evasion {
            combatant.stats.evasion = evasion;
        }
        if let Some(moves) = self.moves {
            combatant.moves = moves;
        }
        for condition in self.conditions {
            combatant.conditions.insert(condition);
        }
        combatant
    }
}

/// Spider (atk 60, spd 55) against Puffball (def 65, spd 20): the slower
/// defender earns no dodge bonus.
pub fn spider_and_puffball() -> (Combatant, Combatant) {
    (
        TestCombatantBuilder::new("jumpingSpider").with_id("a-spider").build(),
        TestCombatantBuilder::new("puffballMushroom").with_id("b-puffball").build(),
    )
}
