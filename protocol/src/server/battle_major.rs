//! Major battle action parsers
//!
//! These are the primary actions in battle: moves, switches, faints, etc.

use super::battle::{
    PokemonIdent, parse_details, parse_from_tag, parse_hp_status, parse_number, parse_optional_hp_status,
    parse_pokemon,
};
use super::{BattleEvent, RawEvent};
use crate::ParseError;

/// Parse |move|POKEMON|MOVE|TARGET with optional tags.
///
/// `from` is set when another effect made the Pokemon use the move
/// (Magic Bounce, Sleep Talk, Dancer, Metronome and the like).
pub fn parse_move(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let move_name = event
        .field(2)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("move".to_string()))?
        .to_string();
    let target = event.field(3).and_then(PokemonIdent::parse);
    let from = parse_from_tag(event);

    Ok(BattleEvent::Move {
        pokemon,
        move_name,
        target,
        from,
    })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS
pub fn parse_switch(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let details = parse_details(event, 2)?;
    let hp_status = parse_hp_status(event, 3)?;

    Ok(BattleEvent::Switch {
        pokemon,
        details,
        hp_status,
    })
}

/// Parse |drag|POKEMON|DETAILS|HP STATUS
pub fn parse_drag(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let details = parse_details(event, 2)?;
    let hp_status = parse_hp_status(event, 3)?;

    Ok(BattleEvent::Drag {
        pokemon,
        details,
        hp_status,
    })
}

/// Parse |detailschange|POKEMON|DETAILS|HP STATUS
pub fn parse_detailschange(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let details = parse_details(event, 2)?;
    let hp_status = parse_optional_hp_status(event, 3)?;

    Ok(BattleEvent::DetailsChange {
        pokemon,
        details,
        hp_status,
    })
}

/// Parse |replace|POKEMON|DETAILS|HP STATUS
pub fn parse_replace(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let details = parse_details(event, 2)?;
    let hp_status = parse_optional_hp_status(event, 3)?;

    Ok(BattleEvent::Replace {
        pokemon,
        details,
        hp_status,
    })
}

/// Parse |cant|POKEMON|REASON or |cant|POKEMON|REASON|MOVE
pub fn parse_cant(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    let reason = event.field(2).unwrap_or_default().to_string();
    let move_name = event.field(3).map(|s| s.to_string());

    Ok(BattleEvent::Cant {
        pokemon,
        reason,
        move_name,
    })
}

/// Parse |faint|POKEMON
pub fn parse_faint(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let pokemon = parse_pokemon(event, 1)?;
    Ok(BattleEvent::Faint(pokemon))
}

/// Parse |turn|NUMBER
pub fn parse_turn(event: &RawEvent) -> Result<BattleEvent, ParseError> {
    let raw = event
        .field(1)
        .ok_or_else(|| ParseError::MissingField("turn".to_string()))?;
    Ok(BattleEvent::Turn(parse_number("turn", raw)?))
}
