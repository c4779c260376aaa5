//! Shared value types for battle protocol events

use crate::ParseError;

use super::RawEvent;

/// Player in a battle (p1, p2, p3, p4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
    P3,
    P4,
}

impl Player {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            "p3" => Some(Player::P3),
            "p4" => Some(Player::P4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
            Player::P3 => "p3",
            Player::P4 => "p4",
        }
    }

    /// The player across the field in a two-player battle
    pub fn foe(&self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
            Player::P3 => Player::P4,
            Player::P4 => Player::P3,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pokemon identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonIdent {
    /// Player who owns this pokemon
    pub player: Player,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl PokemonIdent {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let player = Player::parse(pos_part.get(..2)?)?;
        let position = pos_part.chars().nth(2);

        Some(PokemonIdent {
            player,
            position,
            name: name.to_string(),
        })
    }
}

/// Pokemon details string (species, level, gender, shiny, tera)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
    pub tera_type: Option<String>,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M, shiny" or "Arceus-*"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let mut parts = s.split(", ");

        if let Some(species) = parts.next() {
            details.species = species.to_string();
        }

        for part in parts {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if part == "M" {
                details.gender = Some('M');
            } else if part == "F" {
                details.gender = Some('F');
            } else if part == "shiny" {
                details.shiny = true;
            } else if let Some(tera) = part.strip_prefix("tera:") {
                details.tera_type = Some(tera.to_string());
            }
        }

        details
    }
}

/// HP and status condition (e.g., "100/100", "50/100 slp", "0 fnt")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpStatus {
    /// Current HP (raw value for our side, percentage for the opponent)
    pub current: u32,
    /// Max HP (absent for "0 fnt")
    pub max: Option<u32>,
    /// Trailing condition (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 slp", or "0 fnt"
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut parts = s.split_whitespace();
        let hp_part = parts.next().ok_or(ParseError::EmptyMessage)?;
        let status = parts.next().map(|s| s.to_string());

        let (current, max) = match hp_part.split_once('/') {
            Some((current, max)) => (parse_number("hp", current)?, Some(parse_number("hp", max)?)),
            None => (parse_number("hp", hp_part)?, None),
        };

        Ok(HpStatus {
            current,
            max,
            status,
        })
    }

    /// Whether this is the fainted sentinel ("0 fnt")
    pub fn is_fainted(&self) -> bool {
        self.status.as_deref() == Some("fnt")
    }
}

/// Stat abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Helper to parse a PokemonIdent from event fields
pub fn parse_pokemon(event: &RawEvent, index: usize) -> Result<PokemonIdent, ParseError> {
    event
        .field(index)
        .and_then(PokemonIdent::parse)
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()))
}

/// Helper to parse PokemonDetails from event fields
pub fn parse_details(event: &RawEvent, index: usize) -> Result<PokemonDetails, ParseError> {
    event
        .field(index)
        .filter(|s| !s.is_empty())
        .map(PokemonDetails::parse)
        .ok_or_else(|| ParseError::MissingField("details".to_string()))
}

/// Helper to parse a required HpStatus from event fields
pub fn parse_hp_status(event: &RawEvent, index: usize) -> Result<HpStatus, ParseError> {
    let raw = event
        .field(index)
        .ok_or_else(|| ParseError::MissingField("hp".to_string()))?;
    HpStatus::parse(raw)
}

/// Helper to parse an optional HpStatus; present but malformed is still an error
pub fn parse_optional_hp_status(
    event: &RawEvent,
    index: usize,
) -> Result<Option<HpStatus>, ParseError> {
    match event.field(index).filter(|s| !s.trim().is_empty()) {
        Some(raw) => HpStatus::parse(raw).map(Some),
        None => Ok(None),
    }
}

/// Helper to parse a Stat from event fields
pub fn parse_stat(event: &RawEvent, index: usize) -> Result<Stat, ParseError> {
    let raw = event
        .field(index)
        .ok_or_else(|| ParseError::MissingField("stat".to_string()))?;
    Stat::parse(raw).ok_or_else(|| ParseError::InvalidFormat(format!("unknown stat {raw:?}")))
}

/// Helper to find a "[from] EFFECT" tag among trailing fields.
///
/// Move lines write the tag without a space (`[from]ability: Magic Bounce`),
/// minor actions with one (`[from] item: Life Orb`).
pub fn parse_from_tag(event: &RawEvent) -> Option<String> {
    event
        .fields()
        .iter()
        .find_map(|p| p.strip_prefix("[from]").map(|s| s.trim_start().to_string()))
        .filter(|s| !s.is_empty())
}
