//! Moveset inference against a reference sets database
//!
//! Observed moves are matched against each role a species can be generated
//! with. The first role whose pool contains every observed move is taken as
//! the Pokemon's set.

mod roles;

pub use roles::{infer, infer_pokemon, matching_role};
