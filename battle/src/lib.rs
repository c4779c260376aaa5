//! Team state reconstruction for Pokemon Showdown battle logs.
//!
//! # Overview
//!
//! `dojo-battle` sits between `dojo-protocol` (wire format) and whatever
//! picks the next action:
//!
//! ```text
//! dojo-protocol (RawEvent, BattleEvent)
//!        │
//!        ▼
//! dojo-battle (tracking + inference) ← THIS CRATE
//!        │   ▲
//!        │   └── dojo-team (reference sets)
//!        ▼
//! dojo-replay (drives both sides through a transcript)
//! ```
//!
//! # Main Types
//!
//! ## State
//! - [`TeamState`] - Every Pokemon seen on one side, keyed by [`PokemonIdentity`]
//! - [`PokemonState`] - HP, status, boosts, moves and revealed details of one Pokemon
//! - [`Moveset`] - Observed moves, or a resolved moveset after inference
//!
//! ## Operations
//! - [`TeamTracker`] - Applies turns of events to one side's team
//! - [`infer`] - Resolves movesets against a [`dojo_team::SetsDatabase`]
//! - [`parse_committed_action`] - What a side did in one turn
//! - [`impact`] / [`move_impacts`] - Damage estimates through a [`DamageCalculator`]
//!
//! # Example Usage
//!
//! ```ignore
//! use dojo_battle::{Side, TeamTracker, TrackerConfig, infer};
//! use dojo_protocol::{Player, split_turns};
//!
//! let mut tracker = TeamTracker::new(Side::Opponent, Player::P2, TrackerConfig::default());
//! for turn in split_turns(log.lines()) {
//!     tracker.apply_turn(&turn.events)?;
//! }
//!
//! let refined = infer(tracker.team(), &sets);
//! for (identity, pokemon) in refined.iter() {
//!     println!("{identity}: {}% {:?}", pokemon.hp_percent(), pokemon.moves.names());
//! }
//! ```

pub mod error;
pub mod impact;
pub mod inference;
pub mod query;
pub mod tracking;
pub mod types;

pub use error::TrackError;
pub use impact::{
    CalcError, CalcInput, DamageCalculator, DamageOutcome, ImpactRange, ImpactUnavailable,
    MoveImpacts, impact, move_impacts,
};
pub use inference::{infer, infer_pokemon};
pub use query::{CommittedAction, current_active, parse_committed_action};
pub use tracking::{TeamTracker, TrackerConfig};
pub use types::{
    Boosts, MAX_MOVES, MAX_STAGE, MoveSighting, Moveset, Perspective, PokemonIdentity,
    PokemonState, Side, Status, TeamState, Type,
};

pub use dojo_protocol::{Player, Stat};
