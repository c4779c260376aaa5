//! Known moves of a Pokemon, before and after inference

use indexmap::{IndexMap, IndexSet};

/// Most moves a Pokemon can carry
pub const MAX_MOVES: usize = 4;

/// Whether a move in a resolved moveset has actually been used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoveSighting {
    Seen,
    Unseen,
}

/// Moves of one Pokemon.
///
/// The tracker only ever accumulates observed names. Inference turns an
/// accumulating set into a resolved one; there is no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Moveset {
    Accumulating(IndexSet<String>),
    Resolved(IndexMap<String, MoveSighting>),
}

impl Default for Moveset {
    fn default() -> Self {
        Moveset::Accumulating(IndexSet::new())
    }
}

impl Moveset {
    /// Record a used move.
    ///
    /// An accumulating set holds at most [`MAX_MOVES`] names; a fifth
    /// distinct move is logged and dropped. A resolved moveset only flips
    /// known moves to seen; a move outside it means inference picked the
    /// wrong role, which is logged and ignored.
    pub fn record(&mut self, move_name: &str) {
        match self {
            Moveset::Accumulating(moves) => {
                if moves.len() >= MAX_MOVES && !moves.contains(move_name) {
                    tracing::warn!(move_name, known = moves.len(), "move beyond a full moveset");
                    return;
                }
                moves.insert(move_name.to_string());
            }
            Moveset::Resolved(moves) => match moves.get_mut(move_name) {
                Some(sighting) => *sighting = MoveSighting::Seen,
                None => tracing::warn!(move_name, "move outside resolved moveset"),
            },
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Moveset::Accumulating(moves) => moves.len(),
            Moveset::Resolved(moves) => moves.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Moveset::Resolved(_))
    }

    /// Move names in insertion order
    pub fn names(&self) -> Vec<&str> {
        match self {
            Moveset::Accumulating(moves) => moves.iter().map(String::as_str).collect(),
            Moveset::Resolved(moves) => moves.keys().map(String::as_str).collect(),
        }
    }

    /// Observed moves only
    pub fn seen(&self) -> Vec<&str> {
        match self {
            Moveset::Accumulating(moves) => moves.iter().map(String::as_str).collect(),
            Moveset::Resolved(moves) => moves
                .iter()
                .filter(|(_, sighting)| **sighting == MoveSighting::Seen)
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    pub fn sighting(&self, move_name: &str) -> Option<MoveSighting> {
        match self {
            Moveset::Accumulating(moves) => moves.contains(move_name).then_some(MoveSighting::Seen),
            Moveset::Resolved(moves) => moves.get(move_name).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulating_dedupes() {
        let mut moves = Moveset::default();
        moves.record("Transform");
        moves.record("Transform");
        moves.record("Earthquake");

        assert_eq!(moves.len(), 2);
        assert_eq!(moves.names(), vec!["Transform", "Earthquake"]);
        assert!(!moves.is_resolved());
    }

    #[test]
    fn test_accumulating_caps_at_max_moves() {
        let mut moves = Moveset::default();
        for name in ["Psychic", "Calm Mind", "Morning Sun", "Dazzling Gleam", "Stealth Rock"] {
            moves.record(name);
        }
        moves.record("Psychic");

        assert_eq!(moves.len(), MAX_MOVES);
        assert_eq!(moves.sighting("Stealth Rock"), None);
    }

    #[test]
    fn test_resolved_marks_seen() {
        let mut moves = Moveset::Resolved(IndexMap::from([
            ("Recover".to_string(), MoveSighting::Seen),
            ("Trick".to_string(), MoveSighting::Unseen),
        ]));

        moves.record("Trick");
        assert_eq!(moves.sighting("Trick"), Some(MoveSighting::Seen));

        moves.record("Splash");
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.sighting("Splash"), None);
    }

    #[test]
    fn test_seen_filters_unseen() {
        let moves = Moveset::Resolved(IndexMap::from([
            ("Recover".to_string(), MoveSighting::Seen),
            ("Trick".to_string(), MoveSighting::Unseen),
        ]));

        assert_eq!(moves.seen(), vec!["Recover"]);
        assert_eq!(moves.names(), vec!["Recover", "Trick"]);
    }
}
