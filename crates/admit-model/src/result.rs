//! Output of matching one free-text line.

use serde::{Deserialize, Serialize};

use crate::level::DegreeLevel;

/// Which program-name tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Exact, case-sensitive hit on the canonical program vocabulary.
    Vocabulary,
    /// Case-insensitive hit on a major name or its abbreviation.
    Major,
    /// Hit on a major id.
    MajorId,
}

impl MatchTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Major => "major",
            Self::MajorId => "major_id",
        }
    }
}

/// Best-guess level and program name for one line.
///
/// Both fields are independently optional. A result with neither set is not
/// an error; it marks the line for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub level: Option<DegreeLevel>,
    pub program_name: Option<String>,
    /// Input with the matched level and program tokens removed, trimmed.
    pub residual: String,
    pub tier: Option<MatchTier>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.program_name.is_none()
    }
}
