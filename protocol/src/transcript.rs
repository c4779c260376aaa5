//! Transcript filtering and turn splitting

use crate::server::{RawEvent, tokenize};

/// Tags that never carry battle state
const NOISE_PREFIXES: [&str; 4] = ["|request", "|upkeep", "|t:|", ">"];

/// One turn's worth of events, in transcript order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Turn {
    /// Number from the `|turn|N` line that opened this turn, `None` for the preamble
    pub number: Option<u32>,
    pub events: Vec<RawEvent>,
}

impl Turn {
    pub fn new(number: Option<u32>) -> Self {
        Self {
            number,
            events: Vec::new(),
        }
    }

    /// Tokenize lines into a single turn, skipping noise and non-events
    pub fn from_lines<I, S>(number: Option<u32>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let events = lines
            .into_iter()
            .filter(|line| !is_noise(line.as_ref()))
            .filter_map(|line| tokenize(line.as_ref()))
            .collect();
        Self { number, events }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Whether a raw line should be filtered out before it reaches the tracker
pub fn is_noise(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || NOISE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Split a whole transcript into turns.
///
/// A `|turn|N` line opens a new turn and is its first event. Everything
/// before the first turn line is the preamble, which is only kept if it
/// holds events.
pub fn split_turns<I, S>(lines: I) -> Vec<Turn>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut turns = Vec::new();
    let mut current = Turn::new(None);

    for line in lines {
        let line = line.as_ref();
        if is_noise(line) {
            continue;
        }
        let Some(event) = tokenize(line) else {
            continue;
        };

        if event.tag() == "turn" {
            let number = event.field(1).and_then(|n| n.trim().parse().ok());
            let finished = std::mem::replace(&mut current, Turn::new(number));
            if finished.number.is_some() || !finished.is_empty() {
                turns.push(finished);
            }
        }
        current.events.push(event);
    }

    if current.number.is_some() || !current.is_empty() {
        turns.push(current);
    }

    turns
}
