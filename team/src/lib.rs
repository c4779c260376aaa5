//! Reference move-pool database for random battle formats.
//!
//! The database maps a species to the roles it can be generated with. Each
//! role declares the pool of moves it draws from and, optionally, the EV and
//! IV spreads it uses. The JSON shape is the one published for random
//! battles:
//!
//! ```text
//! {
//!   "Gholdengo": {
//!     "level": 77,
//!     "roles": {
//!       "Fast Support": { "moves": ["Make It Rain", "Nasty Plot", ...] },
//!       ...
//!     }
//!   }
//! }
//! ```
//!
//! Role order in the source document is preserved, since inference picks
//! the first role that fits.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use thiserror::Error;

/// EV or IV spread, keyed by stat name ("hp", "atk", ...)
pub type StatSpread = BTreeMap<String, u8>;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Invalid sets database: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read sets database: {0}")]
    Io(#[from] std::io::Error),
}

/// One named set template for a species
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Every move this role can be generated with
    pub moves: IndexSet<String>,

    #[serde(default)]
    pub evs: Option<StatSpread>,

    #[serde(default)]
    pub ivs: Option<StatSpread>,

    #[serde(default)]
    pub abilities: Vec<String>,

    #[serde(default)]
    pub items: Vec<String>,

    #[serde(default)]
    pub tera_types: Vec<String>,
}

impl Role {
    /// Whether every observed move is part of this role's pool
    pub fn covers<'a, I>(&self, observed: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        observed.into_iter().all(|m| self.moves.contains(m))
    }
}

/// All roles for one species, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SpeciesSets {
    #[serde(default)]
    pub level: Option<u8>,

    #[serde(default)]
    pub roles: IndexMap<String, Role>,
}

/// Read-only lookup from species to its random battle roles
#[derive(Debug, Clone, Default)]
pub struct SetsDatabase {
    species: HashMap<String, SpeciesSets>,
}

impl SetsDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a database from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let raw: IndexMap<String, SpeciesSets> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    /// Parse a database from a reader holding a JSON document
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TeamError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Build a database from species entries; keys are normalized
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, SpeciesSets)>,
        S: AsRef<str>,
    {
        let species = entries
            .into_iter()
            .map(|(name, sets)| (normalize_species(name.as_ref()), sets))
            .collect();
        Self { species }
    }

    /// Add or replace the roles for a species
    pub fn insert(&mut self, species: &str, sets: SpeciesSets) {
        self.species.insert(normalize_species(species), sets);
    }

    /// Look up a species, ignoring case and surrounding whitespace
    pub fn species(&self, name: &str) -> Option<&SpeciesSets> {
        self.species.get(&normalize_species(name))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Normalize a species name into a database key
pub fn normalize_species(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Gholdengo": {
            "level": 77,
            "roles": {
                "Fast Support": {
                    "moves": ["Focus Blast", "Make It Rain", "Nasty Plot", "Recover", "Shadow Ball", "Thunder Wave"],
                    "abilities": ["Good as Gold"],
                    "teraTypes": ["Fighting", "Steel"]
                },
                "Bulky Attacker": {
                    "moves": ["Make It Rain", "Recover", "Shadow Ball", "Trick"],
                    "evs": {"spe": 0},
                    "ivs": {"spe": 0}
                }
            }
        },
        "Iron Moth": {
            "roles": {
                "Fast Attacker": {"moves": ["Energy Ball", "Fiery Dance", "Sludge Wave"]}
            }
        }
    }"#;

    #[test]
    fn test_from_json() {
        let db = SetsDatabase::from_json(SAMPLE).unwrap();

        assert_eq!(db.len(), 2);
        let gholdengo = db.species("Gholdengo").unwrap();
        assert_eq!(gholdengo.level, Some(77));
        assert_eq!(gholdengo.roles.len(), 2);
        assert!(db.species("Iron Moth").unwrap().level.is_none());
    }

    #[test]
    fn test_role_order_preserved() {
        let db = SetsDatabase::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = db
            .species("gholdengo")
            .unwrap()
            .roles
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(names, vec!["Fast Support", "Bulky Attacker"]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let db = SetsDatabase::from_json(SAMPLE).unwrap();

        assert!(db.species("IRON MOTH").is_some());
        assert!(db.species("  iron moth ").is_some());
        assert!(db.species("Flygon").is_none());
    }

    #[test]
    fn test_role_fields() {
        let db = SetsDatabase::from_json(SAMPLE).unwrap();
        let roles = &db.species("Gholdengo").unwrap().roles;

        let support = &roles["Fast Support"];
        assert!(support.evs.is_none());
        assert_eq!(support.tera_types, vec!["Fighting", "Steel"]);

        let bulky = &roles["Bulky Attacker"];
        assert_eq!(bulky.ivs.as_ref().unwrap().get("spe"), Some(&0));
    }

    #[test]
    fn test_role_covers() {
        let db = SetsDatabase::from_json(SAMPLE).unwrap();
        let bulky = &db.species("Gholdengo").unwrap().roles["Bulky Attacker"];

        let seen = ["Trick".to_string(), "Recover".to_string()];
        assert!(bulky.covers(&seen));

        let seen = ["Nasty Plot".to_string()];
        assert!(!bulky.covers(&seen));
    }

    #[test]
    fn test_invalid_json() {
        let result = SetsDatabase::from_json("{\"Gholdengo\": 5}");
        assert!(matches!(result, Err(TeamError::Json(_))));
    }

    #[test]
    fn test_from_reader() {
        let db = SetsDatabase::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(db.len(), 2);
    }
}
