//! Stat boost stages

use std::collections::BTreeMap;

use dojo_protocol::Stat;

/// Highest (and negated, lowest) stage a stat can reach
pub const MAX_STAGE: i8 = 6;

/// Boost stages for the stats that have been touched this stint.
///
/// Untouched stats are absent rather than zero, so an empty map means "no
/// boosts at all" and serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boosts {
    stages: BTreeMap<Stat, i8>,
}

impl Boosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage for a stat (0 when absent)
    pub fn get(&self, stat: Stat) -> i8 {
        self.stages.get(&stat).copied().unwrap_or(0)
    }

    /// Add a signed amount to a stat, returns the change actually applied
    pub fn boost(&mut self, stat: Stat, amount: i8) -> i8 {
        let entry = self.stages.entry(stat).or_insert(0);
        let before = *entry;
        *entry = clamp_stage(before.saturating_add(amount));
        *entry - before
    }

    /// Subtract an amount from a stat, returns the change actually applied
    pub fn unboost(&mut self, stat: Stat, amount: i8) -> i8 {
        self.boost(stat, amount.saturating_neg())
    }

    /// Overwrite a stat's stage
    pub fn set(&mut self, stat: Stat, stage: i8) {
        self.stages.insert(stat, clamp_stage(stage));
    }

    pub fn clear(&mut self) {
        self.stages.clear();
    }

    /// Zero out negative stages, positive ones are kept
    pub fn clear_negative(&mut self) {
        for stage in self.stages.values_mut() {
            if *stage < 0 {
                *stage = 0;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i8)> + '_ {
        self.stages.iter().map(|(stat, stage)| (*stat, *stage))
    }
}

fn clamp_stage(stage: i8) -> i8 {
    stage.clamp(-MAX_STAGE, MAX_STAGE)
}

#[cfg(feature = "serde")]
impl serde::Serialize for Boosts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.stages.len()))?;
        for (stat, stage) in &self.stages {
            map.serialize_entry(stat.as_str(), stage)?;
        }
        map.end()
    }
}
