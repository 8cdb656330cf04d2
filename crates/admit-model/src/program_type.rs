//! Program classification tags.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification tag attached to every program name and major.
///
/// The tags with normalization rules get their own variant. Any other tag
/// carried by the majors table (`ME`, `MATH`, ...) is kept verbatim in
/// [`ProgramType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgramType {
    /// Computer science and its specializations.
    Cs,
    /// Electrical and computer engineering.
    Ee,
    /// Software engineering.
    Se,
    /// Information systems and management.
    Is,
    /// Human-computer interaction.
    Hci,
    /// Master of Engineering.
    MEng,
    /// Any tag without dedicated rules.
    Other(String),
}

impl ProgramType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cs => "CS",
            Self::Ee => "EE",
            Self::Se => "SE",
            Self::Is => "IS",
            Self::Hci => "HCI",
            Self::MEng => "MEng",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for ProgramType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "CS" => Self::Cs,
            "EE" => Self::Ee,
            "SE" => Self::Se,
            "IS" => Self::Is,
            "HCI" => Self::Hci,
            "MEng" => Self::MEng,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for ProgramType {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<&str> for ProgramType {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }
}

impl From<ProgramType> for String {
    fn from(value: ProgramType) -> Self {
        match value {
            ProgramType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
