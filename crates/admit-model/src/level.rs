//! Canonical degree levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical academic tier of an offer.
///
/// The catalog may list many spellings of a level ("MSc", "Ph.D.", ...); every
/// detected token collapses to one of these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeLevel {
    #[serde(rename = "MS")]
    Ms,
    #[serde(rename = "PhD")]
    PhD,
}

impl DegreeLevel {
    /// Collapse a detected level token.
    ///
    /// Tokens starting with `P` are doctoral; everything else is a master's.
    pub fn from_token(token: &str) -> Self {
        if token.starts_with('P') {
            Self::PhD
        } else {
            Self::Ms
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ms => "MS",
            Self::PhD => "PhD",
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
