//! Domain types for team state tracking

mod moveset;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use moveset::{MAX_MOVES, MoveSighting, Moveset};
pub use pokemon::{PokemonIdentity, PokemonState};
pub use pokemon_type::Type;
pub use side::{Perspective, Side, TeamState};
pub use stats::{Boosts, MAX_STAGE};
pub use status::Status;
