//! Non-volatile status conditions

use std::str::FromStr;

use dojo_protocol::ParseError;

/// Non-volatile status condition, as carried by `-status` events.
///
/// Serializes as the protocol tag ("par", "tox", ...), which is also what
/// `Display` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    #[cfg_attr(feature = "serde", serde(rename = "brn"))]
    Burn,
    #[cfg_attr(feature = "serde", serde(rename = "frz"))]
    Freeze,
    #[cfg_attr(feature = "serde", serde(rename = "par"))]
    Paralysis,
    #[cfg_attr(feature = "serde", serde(rename = "psn"))]
    Poison,
    #[cfg_attr(feature = "serde", serde(rename = "tox"))]
    Toxic,
    #[cfg_attr(feature = "serde", serde(rename = "slp"))]
    Sleep,
}

impl Status {
    pub fn to_protocol(&self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::Toxic => "tox",
            Status::Sleep => "slp",
        }
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "brn" => Ok(Status::Burn),
            "frz" => Ok(Status::Freeze),
            "par" => Ok(Status::Paralysis),
            "psn" => Ok(Status::Poison),
            "tox" => Ok(Status::Toxic),
            "slp" => Ok(Status::Sleep),
            other => Err(ParseError::InvalidFormat(format!("unknown status {other:?}"))),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_protocol())
    }
}
