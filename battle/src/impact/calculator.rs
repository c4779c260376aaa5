//! Interface to an external damage calculator

use dojo_team::StatSpread;
use thiserror::Error;

use crate::types::{Boosts, PokemonState, Type};

/// What the calculator is told about one Pokemon.
///
/// Only attributes that have been revealed (or inferred) are set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalcInput {
    pub species: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub level: Option<u8>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub item: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ability: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub boosts: Option<Boosts>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tera_type: Option<Type>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub evs: Option<StatSpread>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ivs: Option<StatSpread>,
}

impl CalcInput {
    pub fn from_state(state: &PokemonState) -> Self {
        Self {
            species: state.species_name.clone(),
            level: state.level,
            item: state.item.clone(),
            ability: state.ability.clone(),
            boosts: (!state.boosts.is_empty()).then(|| state.boosts.clone()),
            tera_type: state.tera_type,
            evs: state.evs.clone(),
            ivs: state.ivs.clone(),
        }
    }

    /// Species without its regional or form suffix ("Zoroark-Hisui" -> "Zoroark")
    pub fn base_species(&self) -> Option<&str> {
        self.species
            .split_once('-')
            .map(|(base, _)| base)
            .filter(|base| !base.is_empty())
    }
}

/// Raw result from the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Already expressed as text, such as a fixed percentage
    Fixed(String),
    /// Single damage amount
    Amount(u32),
    /// Every possible damage roll
    Range(Vec<u32>),
}

impl DamageOutcome {
    /// Lowest and highest damage, `None` for textual results
    pub fn bounds(&self) -> Option<(u32, u32)> {
        match self {
            DamageOutcome::Fixed(_) => None,
            DamageOutcome::Amount(amount) => Some((*amount, *amount)),
            DamageOutcome::Range(rolls) => {
                let min = rolls.iter().min().copied().unwrap_or(0);
                let max = rolls.iter().max().copied().unwrap_or(0);
                Some((min, max))
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Calculation failed: {0}")]
    Other(String),
}

/// Anything that can estimate the damage of one move
pub trait DamageCalculator {
    fn calculate(
        &self,
        attacker: &CalcInput,
        defender: &CalcInput,
        move_name: &str,
    ) -> Result<DamageOutcome, CalcError>;
}

impl<F> DamageCalculator for F
where
    F: Fn(&CalcInput, &CalcInput, &str) -> Result<DamageOutcome, CalcError>,
{
    fn calculate(
        &self,
        attacker: &CalcInput,
        defender: &CalcInput,
        move_name: &str,
    ) -> Result<DamageOutcome, CalcError> {
        self(attacker, defender, move_name)
    }
}

#[cfg(test)]
mod tests {
    use dojo_protocol::Stat;

    use super::*;

    #[test]
    fn test_from_state_forwards_present_attributes() {
        let mut state = PokemonState::new("Gholdengo");
        state.level = Some(88);
        state.tera_type = Some(Type::Fairy);

        let input = CalcInput::from_state(&state);
        assert_eq!(input.species, "Gholdengo");
        assert_eq!(input.level, Some(88));
        assert_eq!(input.tera_type, Some(Type::Fairy));
        assert!(input.boosts.is_none());
        assert!(input.item.is_none());

        state.boosts.boost(Stat::Spa, 2);
        let input = CalcInput::from_state(&state);
        assert_eq!(input.boosts.unwrap().get(Stat::Spa), 2);
    }

    #[test]
    fn test_base_species() {
        let mut input = CalcInput::from_state(&PokemonState::new("Zoroark-Hisui"));
        assert_eq!(input.base_species(), Some("Zoroark"));

        input.species = "Flygon".to_string();
        assert_eq!(input.base_species(), None);
    }

    #[test]
    fn test_outcome_bounds() {
        assert_eq!(DamageOutcome::Amount(40).bounds(), Some((40, 40)));
        assert_eq!(DamageOutcome::Range(vec![38, 45, 41]).bounds(), Some((38, 45)));
        assert_eq!(DamageOutcome::Range(vec![]).bounds(), Some((0, 0)));
        assert_eq!(DamageOutcome::Fixed("50".to_string()).bounds(), None);
    }
}
