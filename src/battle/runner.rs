use crate::battle::ai::{Behavior, RandomAi};
use crate::battle::state::{LogCategory, LogMessage, TurnResult, TurnRng};
use crate::battle::turn_orchestrator::resolve_turn;
use crate::combatant::Combatant;
use crate::errors::{BattleRunnerError, RunnerResult};
use crate::move_data::MoveCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two teams in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "side A"),
            Side::B => write!(f, "side B"),
        }
    }
}

/// A named roster with the index of the member currently in play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<Combatant>,
    pub active_index: usize,
}

impl Team {
    /// Puts the first conscious member in play.
    pub fn new(name: impl Into<String>, members: Vec<Combatant>) -> Self {
        let active_index = members
            .iter()
            .position(|member| !member.is_fainted())
            .unwrap_or(0);
        Self {
            name: name.into(),
            members,
            active_index,
        }
    }

    /// The member in play, if it can still fight.
    pub fn active(&self) -> Option<&Combatant> {
        self.members
            .get(self.active_index)
            .filter(|member| !member.is_fainted())
    }

    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(Combatant::is_fainted)
    }

    pub fn conscious_count(&self) -> usize {
        self.members.iter().filter(|member| !member.is_fainted()).count()
    }

    // Searches forward from the slot after `from`, wrapping around the roster.
    fn next_conscious_after(&self, from: usize) -> Option<usize> {
        let len = self.members.len();
        (1..=len)
            .map(|offset| (from + offset) % len)
            .find(|&index| !self.members[index].is_fainted())
    }
}

/// Headless manager for a two-team battle.
///
/// Sides alternate single moves, starting with side A. After every turn the
/// resolved snapshots are merged back into the rosters, fainted creatures are
/// replaced by the next conscious team member, and the battle ends when one
/// roster has nobody left standing.
#[derive(Debug)]
pub struct BattleRunner<'a> {
    catalog: &'a MoveCatalog,
    teams: [Team; 2],
    current: Side,
    turn_number: u32,
    log: Vec<LogMessage>,
    winner: Option<Side>,
}

impl<'a> BattleRunner<'a> {
    pub fn new(catalog: &'a MoveCatalog, team_a: Team, team_b: Team) -> Self {
        let mut runner = Self {
            catalog,
            teams: [team_a, team_b],
            current: Side::A,
            turn_number: 0,
            log: Vec::new(),
            winner: None,
        };
        for side in [Side::A, Side::B] {
            let team = runner.team(side);
            let opening = team.active().map(|active| {
                LogMessage::new(
                    LogCategory::Info,
                    format!("{} sends out {}!", team.name, active.name),
                )
                .source(active)
            });
            runner.log.extend(opening);
        }
        runner.check_for_winner();
        runner
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn active(&self, side: Side) -> Option<&Combatant> {
        self.team(side).active()
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every message logged since the battle started.
    pub fn log(&self) -> &[LogMessage] {
        &self.log
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Resolves `side`'s active creature using `move_id` on the opposing active creature.
    pub fn submit_move(
        &mut self,
        side: Side,
        move_id: &str,
        rng: &mut TurnRng,
    ) -> RunnerResult<TurnResult> {
        self.ensure_can_act(side)?;
        let attacker = self
            .active(side)
            .ok_or(BattleRunnerError::NoActiveCombatant(side))?;
        if !attacker.knows_move(move_id) {
            return Err(BattleRunnerError::InvalidMove {
                combatant: attacker.name.clone(),
                move_id: move_id.to_string(),
            });
        }
        let defender = self
            .active(side.opponent())
            .ok_or(BattleRunnerError::NoActiveCombatant(side.opponent()))?;

        let result = resolve_turn(attacker, defender, move_id, self.catalog, rng);

        self.store_active(side, result.attacker.clone());
        self.store_active(side.opponent(), result.defender.clone());
        self.log.extend(result.log.iter().cloned());
        self.end_turn();

        Ok(result)
    }

    /// Puts team slot `index` in play. Uses up the side's turn.
    pub fn swap(&mut self, side: Side, index: usize) -> RunnerResult<()> {
        self.ensure_can_act(side)?;
        let team = self.team(side);
        let Some(incoming) = team.members.get(index) else {
            return Err(BattleRunnerError::InvalidSwap {
                index,
                reason: format!("{} only has {} members", team.name, team.members.len()),
            });
        };
        if index == team.active_index {
            return Err(BattleRunnerError::InvalidSwap {
                index,
                reason: format!("{} is already in play", incoming.name),
            });
        }
        if incoming.is_fainted() {
            return Err(BattleRunnerError::InvalidSwap {
                index,
                reason: format!("{} has fainted", incoming.name),
            });
        }

        let text = match team.active() {
            Some(outgoing) => format!(
                "{} withdraws {} and sends out {}!",
                team.name, outgoing.name, incoming.name
            ),
            None => format!("{} sends out {}!", team.name, incoming.name),
        };
        let message = LogMessage::new(LogCategory::Info, text).source(incoming);
        self.log.push(message);
        self.teams[side.index()].active_index = index;
        self.end_turn();
        Ok(())
    }

    /// Lets `behavior` pick the move for whichever side is due to act.
    pub fn play_turn_with<B: Behavior>(
        &mut self,
        behavior: &B,
        rng: &mut TurnRng,
    ) -> RunnerResult<TurnResult> {
        let side = self.current;
        self.ensure_can_act(side)?;
        let attacker = self
            .active(side)
            .ok_or(BattleRunnerError::NoActiveCombatant(side))?;
        let defender = self
            .active(side.opponent())
            .ok_or(BattleRunnerError::NoActiveCombatant(side.opponent()))?;
        let move_id = behavior
            .decide_move(attacker, defender, rng)
            .ok_or_else(|| BattleRunnerError::NoMovesAvailable {
                combatant: attacker.name.clone(),
            })?;
        self.submit_move(side, &move_id, rng)
    }

    pub fn play_ai_turn(&mut self, rng: &mut TurnRng) -> RunnerResult<TurnResult> {
        self.play_turn_with(&RandomAi::new(), rng)
    }

    /// Plays random-AI turns for both sides until someone wins or `max_turns`
    /// more turns have been played. Returns the winner, if any.
    pub fn run_to_completion(
        &mut self,
        rng: &mut TurnRng,
        max_turns: u32,
    ) -> RunnerResult<Option<Side>> {
        let mut played = 0;
        while !self.is_over() && played < max_turns {
            self.play_ai_turn(rng)?;
            played += 1;
        }
        if !self.is_over() {
            tracing::info!(played, "battle stopped at the turn limit");
        }
        Ok(self.winner)
    }

    fn ensure_can_act(&self, side: Side) -> RunnerResult<()> {
        if self.is_over() {
            return Err(BattleRunnerError::BattleOver);
        }
        if side != self.current {
            return Err(BattleRunnerError::NotYourTurn(side));
        }
        Ok(())
    }

    fn store_active(&mut self, side: Side, combatant: Combatant) {
        let team = &mut self.teams[side.index()];
        if let Some(slot) = team.members.get_mut(team.active_index) {
            *slot = combatant;
        }
    }

    fn end_turn(&mut self) {
        self.turn_number += 1;
        self.current = self.current.opponent();
        for side in [Side::A, Side::B] {
            self.replace_fainted(side);
        }
        self.check_for_winner();
    }

    fn replace_fainted(&mut self, side: Side) {
        let team = &self.teams[side.index()];
        if team.active().is_some() || team.is_defeated() {
            return;
        }
        let Some(next) = team.next_conscious_after(team.active_index) else {
            return;
        };
        let incoming = &team.members[next];
        let message = LogMessage::new(
            LogCategory::Info,
            format!("{} sends out {}!", team.name, incoming.name),
        )
        .source(incoming);
        self.log.push(message);
        self.teams[side.index()].active_index = next;
    }

    fn check_for_winner(&mut self) {
        if self.winner.is_some() {
            return;
        }
        let winner = if self.team(Side::B).is_defeated() {
            Side::A
        } else if self.team(Side::A).is_defeated() {
            Side::B
        } else {
            return;
        };
        let text = format!("{} wins the match!", self.team(winner).name);
        self.log.push(LogMessage::new(LogCategory::Info, text));
        tracing::info!(%winner, turns = self.turn_number, "battle over");
        self.winner = Some(winner);
    }
}
