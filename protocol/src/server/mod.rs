pub mod battle;
mod battle_major;
mod battle_minor;
mod tests;

use std::fmt;

use crate::ParseError;

use self::battle::{HpStatus, PokemonDetails, PokemonIdent, Stat};

/// One tokenized protocol line. The first field is the event tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    fields: Vec<String>,
}

impl RawEvent {
    /// Build an event from already split fields
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The event tag, e.g. "switch" or "-damage"
    pub fn tag(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// Field by position; index 0 is the tag
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            write!(f, "|{}", field)?;
        }
        Ok(())
    }
}

/// Split a single protocol line into fields.
///
/// Surrounding whitespace is trimmed first. Returns `None` for anything
/// that is not an event: lines without the leading delimiter and lines with
/// an empty tag (the bare `|` spacer the server sends). A tag with no
/// arguments, like `|upkeep`, is still an event.
pub fn tokenize(line: &str) -> Option<RawEvent> {
    let line = line.trim();
    let rest = line.strip_prefix('|')?;

    let fields: Vec<&str> = rest.split('|').collect();
    if fields.first().is_none_or(|tag| tag.is_empty()) {
        tracing::trace!(line, "dropping line without an event tag");
        return None;
    }

    Some(RawEvent::new(fields))
}

/// Battle events the state tracker and turn parser understand
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // === Major actions ===
    Switch {
        pokemon: PokemonIdent,
        details: PokemonDetails,
        hp_status: HpStatus,
    },
    Drag {
        pokemon: PokemonIdent,
        details: PokemonDetails,
        hp_status: HpStatus,
    },
    Move {
        pokemon: PokemonIdent,
        move_name: String,
        target: Option<PokemonIdent>,
        from: Option<String>,
    },
    DetailsChange {
        pokemon: PokemonIdent,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },
    Replace {
        pokemon: PokemonIdent,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },
    Cant {
        pokemon: PokemonIdent,
        reason: String,
        move_name: Option<String>,
    },
    Faint(PokemonIdent),

    // === HP ===
    Damage {
        pokemon: PokemonIdent,
        hp_status: HpStatus,
    },
    Heal {
        pokemon: PokemonIdent,
        hp_status: HpStatus,
    },
    SetHp {
        pokemon: PokemonIdent,
        hp_status: HpStatus,
    },

    // === Status ===
    Status {
        pokemon: PokemonIdent,
        status: String,
    },
    CureStatus {
        pokemon: PokemonIdent,
        status: String,
    },

    // === Boosts ===
    Boost {
        pokemon: PokemonIdent,
        stat: Stat,
        amount: i8,
    },
    Unboost {
        pokemon: PokemonIdent,
        stat: Stat,
        amount: i8,
    },
    SetBoost {
        pokemon: PokemonIdent,
        stat: Stat,
        amount: i8,
    },
    ClearBoost(PokemonIdent),
    ClearAllBoost,
    ClearNegativeBoost(PokemonIdent),

    // === Revealed details ===
    Transform {
        pokemon: PokemonIdent,
        target: Option<PokemonIdent>,
    },
    Terastallize {
        pokemon: PokemonIdent,
        tera_type: String,
    },
    Item {
        pokemon: PokemonIdent,
        item: String,
        from: Option<String>,
    },
    EndItem {
        pokemon: PokemonIdent,
        item: String,
        from: Option<String>,
    },
    Ability {
        pokemon: PokemonIdent,
        ability: String,
        from: Option<String>,
    },

    // === Progress ===
    Turn(u32),

    /// Any tag the tracker does not react to
    Other(String),
}

impl BattleEvent {
    /// Convert a tokenized line into a typed event
    pub fn parse(event: &RawEvent) -> Result<Self, ParseError> {
        match event.tag() {
            "" => Err(ParseError::EmptyMessage),
            "switch" => battle_major::parse_switch(event),
            "drag" => battle_major::parse_drag(event),
            "move" => battle_major::parse_move(event),
            "detailschange" => battle_major::parse_detailschange(event),
            "replace" => battle_major::parse_replace(event),
            "cant" => battle_major::parse_cant(event),
            "faint" => battle_major::parse_faint(event),
            "turn" => battle_major::parse_turn(event),
            "-damage" => battle_minor::parse_damage(event),
            "-heal" => battle_minor::parse_heal(event),
            "-sethp" => battle_minor::parse_sethp(event),
            "-status" => battle_minor::parse_status(event),
            "-curestatus" => battle_minor::parse_curestatus(event),
            "-boost" => battle_minor::parse_boost(event),
            "-unboost" => battle_minor::parse_unboost(event),
            "-setboost" => battle_minor::parse_setboost(event),
            "-clearboost" => battle_minor::parse_clearboost(event),
            "-clearallboost" => battle_minor::parse_clearallboost(event),
            "-clearnegativeboost" => battle_minor::parse_clearnegativeboost(event),
            "-transform" => battle_minor::parse_transform(event),
            "-terastallize" => battle_minor::parse_terastallize(event),
            "-item" => battle_minor::parse_item(event),
            "-enditem" => battle_minor::parse_enditem(event),
            "-ability" => battle_minor::parse_ability(event),
            other => Ok(BattleEvent::Other(other.to_string())),
        }
    }

    /// The pokemon this event is about, if it names exactly one
    pub fn pokemon(&self) -> Option<&PokemonIdent> {
        match self {
            BattleEvent::Switch { pokemon, .. }
            | BattleEvent::Drag { pokemon, .. }
            | BattleEvent::Move { pokemon, .. }
            | BattleEvent::DetailsChange { pokemon, .. }
            | BattleEvent::Replace { pokemon, .. }
            | BattleEvent::Cant { pokemon, .. }
            | BattleEvent::Faint(pokemon)
            | BattleEvent::Damage { pokemon, .. }
            | BattleEvent::Heal { pokemon, .. }
            | BattleEvent::SetHp { pokemon, .. }
            | BattleEvent::Status { pokemon, .. }
            | BattleEvent::CureStatus { pokemon, .. }
            | BattleEvent::Boost { pokemon, .. }
            | BattleEvent::Unboost { pokemon, .. }
            | BattleEvent::SetBoost { pokemon, .. }
            | BattleEvent::ClearBoost(pokemon)
            | BattleEvent::ClearNegativeBoost(pokemon)
            | BattleEvent::Transform { pokemon, .. }
            | BattleEvent::Terastallize { pokemon, .. }
            | BattleEvent::Item { pokemon, .. }
            | BattleEvent::EndItem { pokemon, .. }
            | BattleEvent::Ability { pokemon, .. } => Some(pokemon),
            BattleEvent::ClearAllBoost | BattleEvent::Turn(_) | BattleEvent::Other(_) => None,
        }
    }
}
