//! Whole-battle transcripts split into turns

use std::path::Path;

use anyhow::{Context, Result};
use dojo_protocol::{Turn, split_turns};

/// A finished (or in-progress) battle log, indexed by turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replay {
    turns: Vec<Turn>,
}

impl Replay {
    /// Split a raw transcript into turns, dropping noise and non-event lines
    pub fn parse(text: &str) -> Self {
        Self {
            turns: split_turns(text.lines()),
        }
    }

    /// Read and parse a transcript from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turn opened by `|turn|N`
    pub fn turn(&self, number: u32) -> Option<&Turn> {
        self.turns.iter().find(|turn| turn.number == Some(number))
    }

    /// Events before the first turn (team preview, leads)
    pub fn preamble(&self) -> Option<&Turn> {
        self.turns.first().filter(|turn| turn.number.is_none())
    }

    /// Highest turn number reached
    pub fn last_turn(&self) -> Option<u32> {
        self.turns.iter().filter_map(|turn| turn.number).max()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
>battle-gen9randombattle-2086001
|t:|1717000000
|player|p1|alice|1|
|player|p2|bob|2|
|start
|switch|p1a: Gholdengo|Gholdengo, L77|100/100
|switch|p2a: Flygon|Flygon, L86, F|100/100
|turn|1
|move|p1a: Gholdengo|Shadow Ball|p2a: Flygon
|-damage|p2a: Flygon|55/100
|upkeep
|turn|2
";

    #[test]
    fn test_parse() {
        let replay = Replay::parse(LOG);

        assert_eq!(replay.len(), 3);
        assert_eq!(replay.last_turn(), Some(2));
        assert_eq!(replay.preamble().unwrap().events.len(), 5);
        assert_eq!(replay.turn(1).unwrap().events.len(), 3);
        assert!(replay.turn(7).is_none());
    }

    #[test]
    fn test_parse_empty() {
        let replay = Replay::parse("");
        assert!(replay.is_empty());
        assert!(replay.preamble().is_none());
        assert_eq!(replay.last_turn(), None);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Replay::from_file("/nonexistent/battle.log").unwrap_err();
        assert!(err.to_string().contains("Failed to read replay"));
    }
}
