//! TeamTracker - owns one side's team and feeds it events

use std::collections::HashMap;

use dojo_protocol::{BattleEvent, Player, RawEvent};

use crate::error::TrackError;
use crate::types::{PokemonIdentity, Side, TeamState};

/// Tracker settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Species markers that make a `detailschange` a disguise reveal rather
    /// than a form change. Matched as substrings of the new species.
    pub disguise_species: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            disguise_species: vec!["Zoroark".to_string(), "Ditto".to_string()],
        }
    }
}

impl TrackerConfig {
    pub fn is_disguise(&self, species: &str) -> bool {
        self.disguise_species
            .iter()
            .any(|marker| species.contains(marker.as_str()))
    }
}

/// Rebuilds one side's team from the battle transcript.
///
/// A tracker only reacts to events naming its own player; events for the
/// other side pass through untouched, so both trackers can be handed the
/// same turn.
#[derive(Debug, Clone)]
pub struct TeamTracker {
    side: Side,
    player: Player,
    pub(super) config: TrackerConfig,
    pub(super) team: TeamState,
    /// Key of the Pokemon currently on the field
    pub(super) active: Option<PokemonIdentity>,
}

impl TeamTracker {
    pub fn new(side: Side, player: Player, config: TrackerConfig) -> Self {
        Self {
            side,
            player,
            config,
            team: TeamState::new(),
            active: None,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn team(&self) -> &TeamState {
        &self.team
    }

    /// Key the on-field Pokemon is tracked under. Follows switches, drags
    /// and broken disguises.
    pub fn active(&self) -> Option<&PokemonIdentity> {
        self.active.as_ref()
    }

    pub fn into_team(self) -> TeamState {
        self.team
    }

    /// Apply one turn's events in order.
    ///
    /// Events are parsed up front, so a malformed line fails the turn before
    /// anything is applied. `replace` targets are resolved in a first pass
    /// over the parsed turn.
    pub fn apply_turn(&mut self, events: &[RawEvent]) -> Result<(), TrackError> {
        let parsed = events
            .iter()
            .map(|raw| {
                BattleEvent::parse(raw).map_err(|source| TrackError::MalformedEvent {
                    line: raw.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let replaced = self.resolve_replacements(&parsed)?;

        for (index, event) in parsed.iter().enumerate() {
            self.update(event, replaced.get(&index))?;
        }
        Ok(())
    }

    /// Apply a single event.
    ///
    /// A `replace` cannot be resolved without its turn, so it fails here
    /// with `UnresolvedReplace`; use [`TeamTracker::apply_turn`] for those.
    pub fn apply_event(&mut self, event: &BattleEvent) -> Result<(), TrackError> {
        self.update(event, None)
    }

    /// First pass: for every `replace` on this side, find the one Pokemon of
    /// this side damaged earlier in the turn.
    fn resolve_replacements(
        &self,
        events: &[BattleEvent],
    ) -> Result<HashMap<usize, PokemonIdentity>, TrackError> {
        let mut damaged: Vec<PokemonIdentity> = Vec::new();
        let mut resolved = HashMap::new();

        for (index, event) in events.iter().enumerate() {
            match event {
                BattleEvent::Damage { pokemon, .. } if pokemon.player == self.player => {
                    let identity = PokemonIdentity::from(pokemon);
                    if !damaged.contains(&identity) {
                        damaged.push(identity);
                    }
                }
                BattleEvent::Replace { pokemon, .. } if pokemon.player == self.player => {
                    let identity = PokemonIdentity::from(pokemon);
                    match damaged.len() {
                        0 => return Err(TrackError::UnresolvedReplace { identity }),
                        1 => {
                            resolved.insert(index, damaged.remove(0));
                        }
                        _ => {
                            return Err(TrackError::AmbiguousReplace {
                                identity,
                                candidates: damaged,
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(resolved)
    }
}
