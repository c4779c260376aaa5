//! BattleSession - tracks both teams through a battle

use anyhow::{Context, Result};
use dojo_battle::{
    CommittedAction, DamageCalculator, MoveImpacts, Perspective, PokemonIdentity, Side, TeamState,
    TeamTracker, TrackerConfig, infer, move_impacts, parse_committed_action,
};
use dojo_protocol::{Player, Turn};
use dojo_team::SetsDatabase;

use crate::replay::Replay;

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Player slot the agent plays as
    pub perspective: Player,
    pub tracker: TrackerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            perspective: Player::P1,
            tracker: TrackerConfig::default(),
        }
    }
}

/// One match, seen from one player's side.
///
/// Every turn fed in goes to both trackers and is kept, so queries that look
/// back through the battle (like the active Pokemon) work at any point.
#[derive(Debug, Clone)]
pub struct BattleSession {
    perspective: Perspective,
    own: TeamTracker,
    opponent: TeamTracker,
    history: Vec<Turn>,
}

impl BattleSession {
    pub fn new(config: SessionConfig) -> Self {
        let perspective = Perspective::new(config.perspective);
        Self {
            own: TeamTracker::new(Side::Own, perspective.player(Side::Own), config.tracker.clone()),
            opponent: TeamTracker::new(
                Side::Opponent,
                perspective.player(Side::Opponent),
                config.tracker,
            ),
            perspective,
            history: Vec::new(),
        }
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Apply one completed turn to both teams.
    ///
    /// Both teams advance together: if either side rejects the turn, the
    /// session is left as it was before the call.
    pub fn feed_turn(&mut self, turn: &Turn) -> Result<()> {
        let mut own = self.own.clone();
        let mut opponent = self.opponent.clone();
        for tracker in [&mut own, &mut opponent] {
            tracker.apply_turn(&turn.events).with_context(|| {
                format!(
                    "Failed to apply turn {} for {}",
                    turn_label(turn),
                    tracker.player()
                )
            })?;
        }
        self.own = own;
        self.opponent = opponent;

        tracing::info!(
            turn = %turn_label(turn),
            events = turn.events.len(),
            own = self.own.team().len(),
            opponent = self.opponent.team().len(),
            "turn applied"
        );
        self.history.push(turn.clone());
        Ok(())
    }

    /// Feed every turn of a replay in order
    pub fn feed_replay(&mut self, replay: &Replay) -> Result<()> {
        for turn in replay.turns() {
            self.feed_turn(turn)?;
        }
        Ok(())
    }

    pub fn tracker(&self, side: Side) -> &TeamTracker {
        match side {
            Side::Own => &self.own,
            Side::Opponent => &self.opponent,
        }
    }

    /// Team as tracked so far
    pub fn team(&self, side: Side) -> &TeamState {
        self.tracker(side).team()
    }

    /// Team with movesets resolved against the sets database
    pub fn inferred_team(&self, side: Side, db: &SetsDatabase) -> TeamState {
        infer(self.team(side), db)
    }

    /// What a side committed to in the given turn
    pub fn committed_action(&self, side: Side, turn: &Turn) -> CommittedAction {
        parse_committed_action(self.perspective.player(side), &turn.events)
    }

    /// Key of the Pokemon on the field for a side, following broken
    /// disguises
    pub fn active(&self, side: Side) -> Option<PokemonIdentity> {
        self.tracker(side).active().cloned()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Damage of each of our active Pokemon's moves against every known
    /// opponent, using inferred movesets on both sides
    pub fn active_move_impacts<C>(&self, db: &SetsDatabase, calc: &C) -> Option<MoveImpacts>
    where
        C: DamageCalculator + ?Sized,
    {
        let active = self.active(Side::Own)?;
        let own = self.inferred_team(Side::Own, db);
        let opponent = self.inferred_team(Side::Opponent, db);
        let attacker = own.get(active.as_str())?;
        Some(move_impacts(calc, attacker, &opponent))
    }

    /// Team of one side as JSON, keyed by identity
    pub fn team_json(&self, side: Side) -> Result<serde_json::Value> {
        serde_json::to_value(self.team(side)).context("Failed to serialize team state")
    }
}

fn turn_label(turn: &Turn) -> String {
    match turn.number {
        Some(number) => number.to_string(),
        None => "preamble".to_string(),
    }
}
