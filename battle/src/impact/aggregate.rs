//! Damage ranges as a share of the defender's HP

use indexmap::IndexMap;
use thiserror::Error;

use super::calculator::{CalcError, CalcInput, DamageCalculator, DamageOutcome};
use crate::types::{PokemonIdentity, PokemonState, TeamState};

/// Expected damage of one move against one defender
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ImpactRange {
    /// Percent of the defender's HP, truncated
    Percent { min: u32, max: u32 },
    /// Calculator's own text, passed through
    Fixed(String),
}

impl std::fmt::Display for ImpactRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactRange::Percent { min, max } => write!(f, "{min}%-{max}%"),
            ImpactRange::Fixed(text) => f.write_str(text),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No damage estimate for {move_name} from {attacker} against {defender}: {source}")]
pub struct ImpactUnavailable {
    pub attacker: String,
    pub defender: String,
    pub move_name: String,
    #[source]
    pub source: CalcError,
}

/// Per move, per defender identity
pub type MoveImpacts = IndexMap<String, IndexMap<PokemonIdentity, Result<ImpactRange, ImpactUnavailable>>>;

/// Estimate one move's damage.
///
/// If the calculator rejects a species, the base form of that Pokemon is
/// tried instead, once per side.
pub fn impact<C>(
    calc: &C,
    attacker: &PokemonState,
    defender: &PokemonState,
    move_name: &str,
) -> Result<ImpactRange, ImpactUnavailable>
where
    C: DamageCalculator + ?Sized,
{
    let mut atk = CalcInput::from_state(attacker);
    let mut def = CalcInput::from_state(defender);
    let mut atk_retried = false;
    let mut def_retried = false;

    let outcome = loop {
        match calc.calculate(&atk, &def, move_name) {
            Ok(outcome) => break outcome,
            Err(CalcError::UnknownSpecies(species)) if !atk_retried && species == atk.species => {
                atk_retried = true;
                let Some(base) = atk.base_species().map(str::to_string) else {
                    return Err(unavailable(attacker, defender, move_name, CalcError::UnknownSpecies(species)));
                };
                tracing::debug!(from = %atk.species, to = %base, "retrying attacker as base form");
                atk.species = base;
            }
            Err(CalcError::UnknownSpecies(species)) if !def_retried && species == def.species => {
                def_retried = true;
                let Some(base) = def.base_species().map(str::to_string) else {
                    return Err(unavailable(attacker, defender, move_name, CalcError::UnknownSpecies(species)));
                };
                tracing::debug!(from = %def.species, to = %base, "retrying defender as base form");
                def.species = base;
            }
            Err(e) => return Err(unavailable(attacker, defender, move_name, e)),
        }
    };

    Ok(to_range(&outcome, defender))
}

fn unavailable(attacker: &PokemonState, defender: &PokemonState, move_name: &str, source: CalcError) -> ImpactUnavailable {
    ImpactUnavailable {
        attacker: attacker.species_name.clone(),
        defender: defender.species_name.clone(),
        move_name: move_name.to_string(),
        source,
    }
}

fn to_range(outcome: &DamageOutcome, defender: &PokemonState) -> ImpactRange {
    let (min, max) = match outcome {
        DamageOutcome::Fixed(text) => return ImpactRange::Fixed(text.clone()),
        other => other.bounds().unwrap_or((0, 0)),
    };
    if max == 0 {
        return ImpactRange::Percent { min: 0, max: 0 };
    }

    let hp = defender.hp_max.unwrap_or(defender.hp_current);
    if defender.hp_current == 0 || hp == 0 {
        return ImpactRange::Percent { min: 100, max: 100 };
    }

    ImpactRange::Percent {
        min: percent_of(min, hp),
        max: percent_of(max, hp),
    }
}

fn percent_of(damage: u32, hp: u32) -> u32 {
    let percent = u64::from(damage) * 100 / u64::from(hp);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Damage of every known move of `attacker` against every member of
/// `defenders`. A failed pair is recorded in place and never stops the rest.
pub fn move_impacts<C>(calc: &C, attacker: &PokemonState, defenders: &TeamState) -> MoveImpacts
where
    C: DamageCalculator + ?Sized,
{
    let mut table = MoveImpacts::new();

    for move_name in attacker.moves.names() {
        let row = table.entry(move_name.to_string()).or_default();
        for (identity, defender) in defenders.iter() {
            let result = impact(calc, attacker, defender, move_name);
            if let Err(e) = &result {
                tracing::warn!(error = %e, "impact unavailable");
            }
            row.insert(identity.clone(), result);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn pokemon(species: &str, hp: u32, max: Option<u32>) -> PokemonState {
        let mut state = PokemonState::new(species);
        state.hp_max = max;
        state.set_hp(hp);
        state
    }

    fn fixed(outcome: DamageOutcome) -> impl Fn(&CalcInput, &CalcInput, &str) -> Result<DamageOutcome, CalcError> {
        move |_: &CalcInput, _: &CalcInput, _: &str| Ok(outcome.clone())
    }

    #[test]
    fn test_impact_range_percent_of_max_hp() {
        let calc = fixed(DamageOutcome::Range(vec![90, 120, 105]));
        let attacker = pokemon("Gholdengo", 100, Some(100));
        let defender = pokemon("Flygon", 150, Some(300));

        let range = impact(&calc, &attacker, &defender, "Make It Rain").unwrap();
        assert_eq!(range, ImpactRange::Percent { min: 30, max: 40 });
        assert_eq!(range.to_string(), "30%-40%");
    }

    #[test]
    fn test_impact_truncates() {
        let calc = fixed(DamageOutcome::Amount(33));
        let attacker = pokemon("Gholdengo", 100, Some(100));
        let defender = pokemon("Flygon", 250, Some(251));

        let range = impact(&calc, &attacker, &defender, "Shadow Ball").unwrap();
        assert_eq!(range, ImpactRange::Percent { min: 13, max: 13 });
    }

    #[test]
    fn test_impact_current_hp_without_max() {
        let calc = fixed(DamageOutcome::Amount(25));
        let attacker = pokemon("Gholdengo", 100, Some(100));
        let defender = pokemon("Flygon", 50, None);

        let range = impact(&calc, &attacker, &defender, "Shadow Ball").unwrap();
        assert_eq!(range, ImpactRange::Percent { min: 50, max: 50 });
    }

    #[test]
    fn test_impact_zero_damage() {
        let calc = fixed(DamageOutcome::Amount(0));
        let attacker = pokemon("Gholdengo", 100, Some(100));
        let defender = pokemon("Flygon", 0, Some(100));

        let range = impact(&calc, &attacker, &defender, "Thunder Wave").unwrap();
        assert_eq!(range, ImpactRange::Percent { min: 0, max: 0 });
    }

    #[test]
    fn test_impact_fainted_defender_is_full() {
        let calc = fixed(DamageOutcome::Range(vec![10, 12]));
        let attacker = pokemon("Gholdengo", 100, Some(100));
        let defender = pokemon("Flygon", 0, Some(100));

        let range = impact(&calc, &attacker, &defender, "Shadow Ball").unwrap();
        assert_eq!(range, ImpactRange::Percent { min: 100, max: 100 });
    }

    #[test]
    fn test_impact_fixed_passes_through() {
        let calc = fixed(DamageOutcome::Fixed("50%".to_string()));
        let attacker = pokemon("Gholdengo", 100, Some(100));
        let defender = pokemon("Flygon", 80, Some(100));

        let range = impact(&calc, &attacker, &defender, "Super Fang").unwrap();
        assert_eq!(range, ImpactRange::Fixed("50%".to_string()));
    }

    #[test]
    fn test_impact_retries_base_form() {
        let seen = RefCell::new(Vec::new());
        let calc = |atk: &CalcInput, def: &CalcInput, _: &str| {
            seen.borrow_mut().push((atk.species.clone(), def.species.clone()));
            if atk.species.contains('-') {
                return Err(CalcError::UnknownSpecies(atk.species.clone()));
            }
            if def.species.contains('-') {
                return Err(CalcError::UnknownSpecies(def.species.clone()));
            }
            Ok(DamageOutcome::Amount(50))
        };
        let attacker = pokemon("Zoroark-Hisui", 100, Some(100));
        let defender = pokemon("Ogerpon-Wellspring", 100, Some(100));

        let range = impact(&calc, &attacker, &defender, "Bitter Malice").unwrap();
        assert_eq!(range, ImpactRange::Percent { min: 50, max: 50 });
        assert_eq!(
            seen.into_inner().last().cloned(),
            Some(("Zoroark".to_string(), "Ogerpon".to_string()))
        );
    }

    #[test]
    fn test_impact_unavailable_after_retry() {
        let calls = RefCell::new(0);
        let calc = |atk: &CalcInput, _: &CalcInput, _: &str| -> Result<DamageOutcome, CalcError> {
            *calls.borrow_mut() += 1;
            Err(CalcError::UnknownSpecies(atk.species.clone()))
        };
        let attacker = pokemon("Missingno-Glitch", 100, Some(100));
        let defender = pokemon("Flygon", 100, Some(100));

        let err = impact(&calc, &attacker, &defender, "Sky Attack").unwrap_err();
        assert_eq!(err.source, CalcError::UnknownSpecies("Missingno".to_string()));
        assert_eq!(err.move_name, "Sky Attack");
        assert_eq!(calls.into_inner(), 2);
    }

    #[test]
    fn test_impact_unknown_move_is_not_retried() {
        let calc = |_: &CalcInput, _: &CalcInput, name: &str| -> Result<DamageOutcome, CalcError> {
            Err(CalcError::UnknownMove(name.to_string()))
        };
        let attacker = pokemon("Zoroark-Hisui", 100, Some(100));
        let defender = pokemon("Flygon", 100, Some(100));

        let err = impact(&calc, &attacker, &defender, "Teleport Blast").unwrap_err();
        assert_eq!(err.source, CalcError::UnknownMove("Teleport Blast".to_string()));
    }

    #[test]
    fn test_move_impacts_table() {
        let calc = |_: &CalcInput, def: &CalcInput, name: &str| match (def.species.as_str(), name) {
            ("Iron Moth", _) => Err(CalcError::Other("no data".to_string())),
            (_, "Recover") => Ok(DamageOutcome::Amount(0)),
            _ => Ok(DamageOutcome::Range(vec![20, 30])),
        };

        let mut attacker = pokemon("Gholdengo", 100, Some(100));
        attacker.record_move("Shadow Ball");
        attacker.record_move("Recover");

        let mut defenders = TeamState::new();
        defenders.insert(PokemonIdentity::new("Flygon"), pokemon("Flygon", 100, Some(100)));
        defenders.insert(PokemonIdentity::new("Iron Moth"), pokemon("Iron Moth", 100, Some(100)));

        let table = move_impacts(&calc, &attacker, &defenders);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table["Shadow Ball"]["Flygon"],
            Ok(ImpactRange::Percent { min: 20, max: 30 })
        );
        assert_eq!(table["Recover"]["Flygon"], Ok(ImpactRange::Percent { min: 0, max: 0 }));
        assert!(table["Shadow Ball"]["Iron Moth"].is_err());
    }
}
