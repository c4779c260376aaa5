//! Errors raised while applying a transcript to a team

use dojo_protocol::{ParseError, Player};
use thiserror::Error;

use crate::types::PokemonIdentity;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("{player} event names {identity}, which never switched in")]
    UnknownIdentity {
        player: Player,
        identity: PokemonIdentity,
    },

    #[error("Malformed event {line:?}: {source}")]
    MalformedEvent {
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("Cannot tell which Pokemon {identity} replaced: nothing on its side took damage this turn")]
    UnresolvedReplace { identity: PokemonIdentity },

    #[error("Cannot tell which Pokemon {identity} replaced: candidates {candidates:?}")]
    AmbiguousReplace {
        identity: PokemonIdentity,
        candidates: Vec<PokemonIdentity>,
    },
}
