use crate::combatant::Combatant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag a presentation layer can style a log line by without parsing its text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    /// "<attacker> used <move>!"
    Action,
    Damage,
    Miss,
    Faint,
    StatusApplied,
    StatusFailed,
    StatusDamage,
    StatusExpired,
    SelfHit,
    StatChange,
    /// Flavour text with no mechanical consequence
    Info,
    /// Configuration or input problems caught at the engine boundary
    Error,
}

impl LogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Action => "action",
            LogCategory::Damage => "damage",
            LogCategory::Miss => "miss",
            LogCategory::Faint => "faint",
            LogCategory::StatusApplied => "status_applied",
            LogCategory::StatusFailed => "status_failed",
            LogCategory::StatusDamage => "status_damage",
            LogCategory::StatusExpired => "status_expired",
            LogCategory::SelfHit => "self_hit",
            LogCategory::StatChange => "stat_change",
            LogCategory::Info => "info",
            LogCategory::Error => "error",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured line of the battle log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub text: String,
    pub category: LogCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl LogMessage {
    pub fn new(category: LogCategory, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category,
            source_id: None,
            target_id: None,
        }
    }

    pub fn source(mut self, combatant: &Combatant) -> Self {
        self.source_id = Some(combatant.id.clone());
        self
    }

    pub fn target(mut self, combatant: &Combatant) -> Self {
        self.target_id = Some(combatant.id.clone());
        self
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered collector for log messages produced while resolving a turn.
/// Messages are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    messages: Vec<LogMessage>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: LogMessage) {
        tracing::trace!(category = %message.category, text = %message.text, "log");
        self.messages.push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = LogMessage>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<LogMessage> {
        self.messages
    }

    /// Return true if the log contains no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Return the number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl fmt::Display for BattleLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "  [{}] {}", message.category, message.text)?;
        }
        Ok(())
    }
}

/// How a single turn ended.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The move connected and changed something
    Hit,
    Miss,
    /// The move connected (or the attacker could not act) but nothing changed
    NoEffect,
    /// Confusion made the attacker hit itself instead of moving
    SelfHit,
    /// The attacker fainted from its own status conditions
    FaintedSelf,
    FaintedTarget,
    /// The turn could not be resolved from the given inputs
    Error,
}

/// Everything a caller needs to apply one resolved turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub log: Vec<LogMessage>,
    pub outcome: TurnOutcome,
}

impl TurnResult {
    pub fn messages_in(&self, category: LogCategory) -> impl Iterator<Item = &LogMessage> {
        self.log
            .iter()
            .filter(move |message| message.category == category)
    }

    pub fn count(&self, category: LogCategory) -> usize {
        self.messages_in(category).count()
    }
}

#[derive(Debug, Clone)]
enum RngSource {
    Live(StdRng),
    Scripted { outcomes: Vec<f64>, index: usize },
    Fixed(f64),
}

/// The single random source threaded through turn resolution.
///
/// Every draw is a uniform value in `[0, 1)`. Tests script the exact values
/// they need with [`TurnRng::new_for_test`] or pin every draw with
/// [`TurnRng::fixed`].
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
    draws: usize,
}

impl TurnRng {
    pub fn new_random() -> Self {
        Self::from_source(RngSource::Live(StdRng::from_os_rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_source(RngSource::Live(StdRng::seed_from_u64(seed)))
    }

    /// Returns the given outcomes in order. Running out is a bug in the test
    /// (an unexpected draw) and panics with the reason for the extra draw.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self::from_source(RngSource::Scripted { outcomes, index: 0 })
    }

    /// Returns `value` for every draw.
    pub fn fixed(value: f64) -> Self {
        Self::from_source(RngSource::Fixed(value))
    }

    fn from_source(source: RngSource) -> Self {
        Self { source, draws: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> f64 {
        let outcome = match &mut self.source {
            RngSource::Live(rng) => rng.random::<f64>(),
            RngSource::Fixed(value) => *value,
            RngSource::Scripted { outcomes, index } => {
                let Some(outcome) = outcomes.get(*index).copied() else {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                };
                *index += 1;
                outcome
            }
        };
        self.draws += 1;
        tracing::trace!(outcome, reason, "rng draw");
        outcome
    }

    /// Picks an index in `0..len` from one draw. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        let outcome = self.next_outcome(reason);
        ((outcome * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_rng_returns_values_in_order() {
        let mut rng = TurnRng::new_for_test(vec![0.1, 0.7]);
        assert_eq!(rng.next_outcome("first"), 0.1);
        assert_eq!(rng.next_outcome("second"), 0.7);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    #[should_panic(expected = "TurnRng exhausted")]
    fn test_scripted_rng_panics_when_exhausted() {
        let mut rng = TurnRng::new_for_test(vec![]);
        rng.next_outcome("unexpected");
    }

    #[test]
    fn test_live_rng_stays_in_unit_interval() {
        let mut rng = TurnRng::seeded(7);
        for _ in 0..1_000 {
            let value = rng.next_outcome("range check");
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut first = TurnRng::seeded(42);
        let mut second = TurnRng::seeded(42);
        for _ in 0..10 {
            assert_eq!(first.next_outcome("a"), second.next_outcome("b"));
        }
    }

    #[test]
    fn test_pick_index_covers_bounds() {
        assert_eq!(TurnRng::fixed(0.0).pick_index(3, "low"), 0);
        assert_eq!(TurnRng::fixed(0.999).pick_index(3, "high"), 2);
        assert_eq!(TurnRng::fixed(0.5).pick_index(4, "mid"), 2);
    }

    #[test]
    fn test_log_message_serializes_category_in_snake_case() {
        let message = LogMessage::new(LogCategory::StatusDamage, "Puffball is hurt by poison!");
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"status_damage\""));
        assert!(!json.contains("source_id"));
    }
}
