//! Replay loading and two-sided team tracking for Pokemon Showdown logs.
//!
//! A [`Replay`] is a transcript split into turns. A [`BattleSession`] feeds
//! those turns, one at a time, to a tracker for each side and answers
//! questions about the match so far.
//!
//! ```ignore
//! use dojo_battle::Side;
//! use dojo_replay::{BattleSession, Replay, SessionConfig};
//!
//! let replay = Replay::from_file("battle.log")?;
//! let mut session = BattleSession::new(SessionConfig::default());
//! session.feed_replay(&replay)?;
//!
//! println!("{}", session.team_json(Side::Opponent)?);
//! ```

mod replay;
mod session;

pub use replay::Replay;
pub use session::{BattleSession, SessionConfig};
