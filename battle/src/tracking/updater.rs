//! Update logic for applying BattleEvents to a tracked team

use dojo_protocol::{BattleEvent, HpStatus, PokemonDetails, PokemonIdent};

use super::tracker::TeamTracker;
use crate::error::TrackError;
use crate::types::{PokemonIdentity, PokemonState, Status, Type};

impl TeamTracker {
    /// Apply one event. `replaced` is the first-pass resolution for a
    /// `replace` event and is ignored for every other kind.
    pub(super) fn update(
        &mut self,
        event: &BattleEvent,
        replaced: Option<&PokemonIdentity>,
    ) -> Result<(), TrackError> {
        if let Some(pokemon) = event.pokemon()
            && pokemon.player != self.player()
        {
            return Ok(());
        }

        match event {
            // === Switches ===
            BattleEvent::Switch {
                pokemon,
                details,
                hp_status,
            }
            | BattleEvent::Drag {
                pokemon,
                details,
                hp_status,
            } => {
                self.handle_switch(pokemon, details, hp_status);
            }

            BattleEvent::Move {
                pokemon,
                move_name,
                from,
                ..
            } => {
                let poke = self.find_pokemon_mut(pokemon)?;
                match from {
                    Some(from) => tracing::debug!(
                        pokemon = %pokemon.name,
                        move_name = %move_name,
                        from = %from,
                        "move called by another effect"
                    ),
                    None => poke.record_move(move_name),
                }
            }

            BattleEvent::Transform { pokemon, .. } => {
                self.find_pokemon_mut(pokemon)?.transformed = true;
            }

            BattleEvent::Faint(pokemon) => {
                self.find_pokemon_mut(pokemon)?.faint();
            }

            // === HP ===
            BattleEvent::Damage { pokemon, hp_status }
            | BattleEvent::Heal { pokemon, hp_status }
            | BattleEvent::SetHp { pokemon, hp_status } => {
                self.find_pokemon_mut(pokemon)?.apply_hp_status(hp_status);
            }

            // === Status ===
            BattleEvent::Status { pokemon, status } => {
                let poke = self.find_pokemon_mut(pokemon)?;
                match status.parse::<Status>() {
                    Ok(status) => poke.status = Some(status),
                    Err(e) => tracing::debug!(error = %e, pokemon = %pokemon.name, "ignoring status"),
                }
            }

            BattleEvent::CureStatus { pokemon, .. } => {
                self.find_pokemon_mut(pokemon)?.status = None;
            }

            // === Boosts ===
            BattleEvent::Boost {
                pokemon,
                stat,
                amount,
            } => {
                self.find_pokemon_mut(pokemon)?.boosts.boost(*stat, *amount);
            }

            BattleEvent::Unboost {
                pokemon,
                stat,
                amount,
            } => {
                self.find_pokemon_mut(pokemon)?.boosts.unboost(*stat, *amount);
            }

            BattleEvent::SetBoost {
                pokemon,
                stat,
                amount,
            } => {
                self.find_pokemon_mut(pokemon)?.boosts.set(*stat, *amount);
            }

            BattleEvent::ClearBoost(pokemon) => {
                self.find_pokemon_mut(pokemon)?.boosts.clear();
            }

            BattleEvent::ClearAllBoost => {
                self.team.clear_boosts();
            }

            BattleEvent::ClearNegativeBoost(_) => {
                for (_, poke) in self.team.iter_mut() {
                    poke.boosts.clear_negative();
                }
            }

            // === Revealed details ===
            BattleEvent::Terastallize { pokemon, tera_type } => {
                let poke = self.find_pokemon_mut(pokemon)?;
                match tera_type.parse::<Type>() {
                    Ok(tera) => {
                        if !poke.terastallize(tera) {
                            tracing::debug!(pokemon = %pokemon.name, "tera type already set");
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, pokemon = %pokemon.name, "ignoring tera type"),
                }
            }

            BattleEvent::Item { pokemon, item, .. } => {
                self.find_pokemon_mut(pokemon)?.record_item(item);
            }

            BattleEvent::EndItem { pokemon, .. } => {
                self.find_pokemon_mut(pokemon)?.consume_item();
            }

            BattleEvent::Ability { pokemon, ability, .. } => {
                self.find_pokemon_mut(pokemon)?.record_ability(ability);
            }

            // === Identity changes ===
            BattleEvent::DetailsChange {
                pokemon,
                details,
                hp_status,
            } => {
                self.handle_details_change(pokemon, details, hp_status.as_ref())?;
            }

            BattleEvent::Replace {
                pokemon, details, ..
            } => {
                let Some(replaced) = replaced else {
                    return Err(TrackError::UnresolvedReplace {
                        identity: PokemonIdentity::from(pokemon),
                    });
                };
                self.handle_replace(pokemon, details, replaced)?;
            }

            BattleEvent::Cant { .. } | BattleEvent::Turn(_) | BattleEvent::Other(_) => {}
        }

        Ok(())
    }

    /// Boosts on the whole side reset before the incoming Pokemon is touched
    fn handle_switch(&mut self, pokemon: &PokemonIdent, details: &PokemonDetails, hp_status: &HpStatus) {
        self.team.clear_boosts();
        self.active = Some(PokemonIdentity::from(pokemon));

        if let Some(poke) = self.team.get_mut(&pokemon.name) {
            poke.set_hp(hp_status.current);
            poke.transformed = false;
            return;
        }

        tracing::debug!(
            player = %self.player(),
            pokemon = %pokemon.name,
            species = %details.species,
            "new team member"
        );
        self.team.insert(
            PokemonIdentity::from(pokemon),
            PokemonState::from_switch(details, hp_status),
        );
    }

    fn handle_details_change(
        &mut self,
        pokemon: &PokemonIdent,
        details: &PokemonDetails,
        hp_status: Option<&HpStatus>,
    ) -> Result<(), TrackError> {
        let disguised = self.config.is_disguise(&details.species);
        let poke = self.find_pokemon_mut(pokemon)?;
        poke.species_name = details.species.clone();
        if let Some(hp_status) = hp_status {
            poke.apply_hp_status(hp_status);
        }

        if disguised {
            tracing::debug!(from = %pokemon.name, to = %details.species, "disguise revealed");
            let identity = PokemonIdentity::new(details.species.clone());
            if self.team.rekey(&pokemon.name, identity.clone())
                && self.active.as_ref().is_some_and(|active| active.as_str() == pokemon.name)
            {
                self.active = Some(identity);
            }
        }
        Ok(())
    }

    /// The displayed Pokemon was a disguise: its observed state belongs to
    /// the replacing Pokemon, and the replaced key is left as an empty husk.
    fn handle_replace(
        &mut self,
        pokemon: &PokemonIdent,
        details: &PokemonDetails,
        replaced: &PokemonIdentity,
    ) -> Result<(), TrackError> {
        let husk = self
            .team
            .get_mut(replaced.as_str())
            .ok_or_else(|| TrackError::UnknownIdentity {
                player: pokemon.player,
                identity: replaced.clone(),
            })?;

        let mut state = husk.clone();
        husk.moves = Default::default();
        husk.boosts.clear();
        husk.transformed = false;

        state.species_name = details.species.clone();
        let identity = PokemonIdentity::from(pokemon);
        if &identity == replaced {
            state.moves = Default::default();
            state.boosts.clear();
        }

        tracing::debug!(from = %replaced, to = %identity, "disguise broken");
        if self.team.insert(identity.clone(), state).is_some() && &identity != replaced {
            tracing::warn!(identity = %identity, "replace overwrote a known Pokemon");
        }
        self.active = Some(identity);
        Ok(())
    }

    fn find_pokemon_mut(&mut self, pokemon: &PokemonIdent) -> Result<&mut PokemonState, TrackError> {
        let player = self.player();
        self.team
            .get_mut(&pokemon.name)
            .ok_or_else(|| TrackError::UnknownIdentity {
                player,
                identity: PokemonIdentity::from(pokemon),
            })
    }
}
