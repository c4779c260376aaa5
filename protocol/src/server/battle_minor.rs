//! Minor battle action parsers
//!
//! These are secondary effects in battle: damage, stat changes, status, etc.
//! In the official client, they're usually displayed in smaller font.

use super::battle::{
    PokemonIdent, parse_from_tag, parse_hp_status, parse_number, parse_pokemon, parse_stat,
};
use super::{BattleEvent, RawEvent};
use crate::ParseError;

/// Parse |-damage|POKEMON|HP STATUS
pub fn parse_damage(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let hp_status = parse_hp_status(event, 2)?;

    Ok(BattleEvent::Damage { pokemon, hp_status })
}

/// Parse |-heal|POKEMON|HP STATUS
pub fn parse_heal(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let hp_status = parse_hp_status(event, 2)?;

    Ok(BattleEvent::Heal { pokemon, hp_status })
}

/// Parse |-sethp|POKEMON|HP
pub fn parse_sethp(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let hp_status = parse_hp_status(event, 2)?;

    Ok(BattleEvent::SetHp { pokemon, hp_status })
}

/// Parse |-status|POKEMON|STATUS
pub fn parse_status(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let status = event
        .field(2)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("status".to_string()))?
        .to_string();

    Ok(BattleEvent::Status { pokemon, status })
}

/// Parse |-curestatus|POKEMON|STATUS
pub fn parse_curestatus(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let status = event.field(2).unwrap_or_default().to_string();

    Ok(BattleEvent::CureStatus { pokemon, status })
}

fn parse_amount(event: &RawEvent) -> Result<i8, ParseError> {
    let raw = event
        .field(3)
        .ok_or_else(|| ParseError::MissingField("amount".to_string()))?;
    parse_number("boost", raw)
}

/// Parse |-boost|POKEMON|STAT|AMOUNT
pub fn parse_boost(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let stat = parse_stat(event, 2)?;
    let amount = parse_amount(event)?;

    Ok(BattleEvent::Boost {
        pokemon,
        stat,
        amount,
    })
}

/// Parse |-unboost|POKEMON|STAT|AMOUNT
pub fn parse_unboost(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let stat = parse_stat(event, 2)?;
    let amount = parse_amount(event)?;

    Ok(BattleEvent::Unboost {
        pokemon,
        stat,
        amount,
    })
}

/// Parse |-setboost|POKEMON|STAT|AMOUNT
pub fn parse_setboost(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let stat = parse_stat(event, 2)?;
    let amount = parse_amount(event)?;

    Ok(BattleEvent::SetBoost {
        pokemon,
        stat,
        amount,
    })
}

/// Parse |-clearboost|POKEMON
pub fn parse_clearboost(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    Ok(BattleEvent::ClearBoost(pokemon))
}

/// Parse |-clearallboost
pub fn parse_clearallboost(_event: &RawEvent) -> Result<BattleEvent, ParseError> {
    Ok(BattleEvent::ClearAllBoost)
}

/// Parse |-clearnegativeboost|POKEMON
pub fn parse_clearnegativeboost(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    Ok(BattleEvent::ClearNegativeBoost(pokemon))
}

/// Parse |-transform|POKEMON|SPECIES
pub fn parse_transform(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let target = event.field(2).and_then(PokemonIdent::parse);

    Ok(BattleEvent::Transform { pokemon, target })
}

/// Parse |-terastallize|POKEMON|TYPE
pub fn parse_terastallize(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let tera_type = event
        .field(2)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("tera type".to_string()))?
        .to_string();

    Ok(BattleEvent::Terastallize { pokemon, tera_type })
}

/// Parse |-item|POKEMON|ITEM with optional [from]EFFECT
pub fn parse_item(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let item = event.field(2).unwrap_or_default().to_string();
    let from = parse_from_tag(event);

    Ok(BattleEvent::Item {
        pokemon,
        item,
        from,
    })
}

/// Parse |-enditem|POKEMON|ITEM with optional [from]EFFECT
pub fn parse_enditem(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let item = event.field(2).unwrap_or_default().to_string();
    let from = parse_from_tag(event);

    Ok(BattleEvent::EndItem {
        pokemon,
        item,
        from,
    })
}

/// Parse |-ability|POKEMON|ABILITY with optional [from]EFFECT
pub fn parse_ability(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let ability = event.field(2).unwrap_or_default().to_string();
    let from = parse_from_tag(event);

    Ok(BattleEvent::Ability {
        pokemon,
        ability,
        from,
    })
}
