//! Pokemon identity and per-Pokemon battle state

use std::borrow::Borrow;

use dojo_protocol::{HpStatus, PokemonDetails, PokemonIdent};
use dojo_team::StatSpread;

use super::moveset::Moveset;
use super::pokemon_type::Type;
use super::stats::Boosts;
use super::status::Status;

/// Stable per-match key for one Pokemon on one side.
///
/// This is the name after `pNa: ` in an event, not the species: species can
/// change (form changes, disguise reveals) while the key stays put, and the
/// key itself only changes when a disguise breaks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PokemonIdentity(String);

impl PokemonIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&PokemonIdent> for PokemonIdentity {
    fn from(ident: &PokemonIdent) -> Self {
        Self(ident.name.clone())
    }
}

impl From<&str> for PokemonIdentity {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl Borrow<str> for PokemonIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PokemonIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What is known about one Pokemon
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PokemonState {
    /// Species (including forme, e.g. "Ogerpon-Wellspring")
    pub species_name: String,

    // === HP ===
    /// Current HP (exact for our side, percentage for the opponent)
    pub hp_current: u32,

    /// Maximum HP, unknown until a switch line reveals it
    pub hp_max: Option<u32>,

    // === Revealed once ===
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub tera_type: Option<Type>,

    // === Changes during battle ===
    pub status: Option<Status>,
    pub boosts: Boosts,
    pub moves: Moveset,
    pub item: Option<String>,
    pub ability: Option<String>,

    /// Copying another Pokemon until it leaves the field. Moves used while
    /// transformed belong to the copied set.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub transformed: bool,

    // === Filled in by inference ===
    pub role: Option<String>,
    pub evs: Option<StatSpread>,
    pub ivs: Option<StatSpread>,
}

impl PokemonState {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species_name: species.into(),
            ..Self::default()
        }
    }

    /// State for a Pokemon seen for the first time on a switch or drag
    pub fn from_switch(details: &PokemonDetails, hp_status: &HpStatus) -> Self {
        let mut state = Self::new(&details.species);
        state.level = details.level;
        state.gender = details.gender;
        state.hp_max = hp_status.max;
        state.set_hp(hp_status.current);
        state.apply_condition(hp_status);
        state
    }

    /// Overwrite current HP, never exceeding a known max
    pub fn set_hp(&mut self, hp: u32) {
        self.hp_current = match self.hp_max {
            Some(max) => hp.min(max),
            None => hp,
        };
    }

    /// Apply HP from a `current/max` pair (or the `0 fnt` sentinel)
    pub fn apply_hp_status(&mut self, hp_status: &HpStatus) {
        if hp_status.is_fainted() {
            self.faint();
            return;
        }
        if self.hp_max.is_none() {
            self.hp_max = hp_status.max;
        }
        self.set_hp(hp_status.current);
        self.apply_condition(hp_status);
    }

    fn apply_condition(&mut self, hp_status: &HpStatus) {
        if let Some(status) = hp_status.status.as_deref().and_then(|s| s.parse().ok()) {
            self.status = Some(status);
        }
    }

    pub fn faint(&mut self) {
        self.hp_current = 0;
    }

    pub fn is_fainted(&self) -> bool {
        self.hp_current == 0
    }

    /// HP as a percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        match self.hp_max {
            Some(0) => 0,
            Some(max) => self.hp_current * 100 / max,
            None => self.hp_current,
        }
    }

    /// Record a move this Pokemon chose; ignored while transformed
    pub fn record_move(&mut self, move_name: &str) {
        if self.transformed {
            tracing::debug!(move_name, species = %self.species_name, "skipping copied move");
            return;
        }
        self.moves.record(move_name);
    }

    /// Record the tera type; returns false if one was already set
    pub fn terastallize(&mut self, tera_type: Type) -> bool {
        if self.tera_type.is_some() {
            return false;
        }
        self.tera_type = Some(tera_type);
        true
    }

    pub fn record_item(&mut self, item: &str) {
        self.item = Some(item.to_string());
    }

    /// Item was consumed or removed
    pub fn consume_item(&mut self) {
        self.item = None;
    }

    pub fn record_ability(&mut self, ability: &str) {
        self.ability = Some(ability.to_string());
    }
}
