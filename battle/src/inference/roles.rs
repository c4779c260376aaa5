//! Role matching and moveset completion

use dojo_team::{Role, SetsDatabase};
use indexmap::IndexMap;

use crate::types::{MAX_MOVES, MoveSighting, Moveset, PokemonIdentity, PokemonState, TeamState};

/// Refined copy of a team with every matchable moveset resolved.
///
/// The tracked team is left alone so it can keep accumulating moves.
pub fn infer(team: &TeamState, db: &SetsDatabase) -> TeamState {
    let mut refined = team.clone();
    for (identity, poke) in refined.iter_mut() {
        infer_pokemon(identity, poke, db);
    }
    refined
}

/// Resolve one Pokemon's moveset in place.
///
/// Returns true if a role matched. Full or already resolved movesets are
/// skipped, as are species missing from the database.
pub fn infer_pokemon(identity: &PokemonIdentity, poke: &mut PokemonState, db: &SetsDatabase) -> bool {
    let Moveset::Accumulating(observed) = &poke.moves else {
        return false;
    };
    if observed.len() >= MAX_MOVES {
        return false;
    }

    let Some((role_name, role)) = matching_role(db, &poke.species_name, observed)
        .or_else(|| matching_role(db, identity.as_str(), observed))
    else {
        tracing::debug!(pokemon = %identity, species = %poke.species_name, "no matching role");
        return false;
    };

    let mut resolved: IndexMap<String, MoveSighting> = observed
        .iter()
        .map(|name| (name.clone(), MoveSighting::Seen))
        .collect();
    for name in &role.moves {
        if resolved.len() >= MAX_MOVES {
            break;
        }
        resolved.entry(name.clone()).or_insert(MoveSighting::Unseen);
    }

    tracing::debug!(pokemon = %identity, role = %role_name, "moveset resolved");
    if let Some(evs) = &role.evs {
        poke.evs = Some(evs.clone());
    }
    if let Some(ivs) = &role.ivs {
        poke.ivs = Some(ivs.clone());
    }
    poke.role = Some(role_name.to_string());
    poke.moves = Moveset::Resolved(resolved);
    true
}

/// First role of a species, in database order, whose pool covers `observed`
pub fn matching_role<'a, 'b, I>(db: &'a SetsDatabase, species: &str, observed: I) -> Option<(&'a str, &'a Role)>
where
    I: IntoIterator<Item = &'b String> + Copy,
{
    db.species(species)?
        .roles
        .iter()
        .find(|(_, role)| role.covers(observed))
        .map(|(name, role)| (name.as_str(), role))
}
