use thiserror::Error;

pub mod server;
pub mod transcript;

pub use server::battle::{HpStatus, Player, PokemonDetails, PokemonIdent, Stat};
pub use server::{BattleEvent, RawEvent, tokenize};
pub use transcript::{Turn, is_noise, split_turns};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Empty message")]
    EmptyMessage,
}
