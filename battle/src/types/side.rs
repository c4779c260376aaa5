//! Sides of a battle and the team state tracked for each

use dojo_protocol::Player;
use indexmap::IndexMap;

use super::pokemon::{PokemonIdentity, PokemonState};

/// Which team, relative to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Own,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
        }
    }
}

/// Maps sides to protocol players for a two-player battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perspective {
    pub own: Player,
}

impl Perspective {
    pub fn new(own: Player) -> Self {
        Self { own }
    }

    /// Player whose events belong to a side
    pub fn player(&self, side: Side) -> Player {
        match side {
            Side::Own => self.own,
            Side::Opponent => self.own.foe(),
        }
    }

    /// Side a player's events belong to, if they are in this battle
    pub fn side_of(&self, player: Player) -> Option<Side> {
        if player == self.own {
            Some(Side::Own)
        } else if player == self.own.foe() {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self::new(Player::P1)
    }
}

/// Every Pokemon seen so far on one side, in order of first sighting
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamState {
    members: IndexMap<PokemonIdentity, PokemonState>,
}

impl TeamState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identity: &str) -> Option<&PokemonState> {
        self.members.get(identity)
    }

    pub fn get_mut(&mut self, identity: &str) -> Option<&mut PokemonState> {
        self.members.get_mut(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.members.contains_key(identity)
    }

    /// Add or overwrite a member, returning the previous state
    pub fn insert(&mut self, identity: PokemonIdentity, state: PokemonState) -> Option<PokemonState> {
        self.members.insert(identity, state)
    }

    /// Move a member under a new key, keeping its position in the team.
    ///
    /// Returns false (and changes nothing) if `from` is unknown. An existing
    /// member under `to` is overwritten.
    pub fn rekey(&mut self, from: &str, to: PokemonIdentity) -> bool {
        let Some((index, _, state)) = self.members.shift_remove_full(from) else {
            return false;
        };
        if let Some(old) = self.members.get_index_of(&to) {
            self.members.shift_remove_index(old);
        }
        let index = index.min(self.members.len());
        self.members.shift_insert(index, to, state);
        true
    }

    /// Reset every member's boosts
    pub fn clear_boosts(&mut self) {
        for state in self.members.values_mut() {
            state.boosts.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PokemonIdentity, &PokemonState)> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PokemonIdentity, &mut PokemonState)> {
        self.members.iter_mut()
    }

    pub fn identities(&self) -> impl Iterator<Item = &PokemonIdentity> {
        self.members.keys()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
