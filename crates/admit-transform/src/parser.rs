//! Matching followed by normalization.

use admit_model::{DegreeLevel, MatchTier, ReferenceCatalog};
use serde::{Deserialize, Serialize};

use crate::matcher::ProgramMatcher;
use crate::normalizer::ProgramNormalizer;

/// Level, canonical program code, and residual text for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProgram {
    pub level: Option<DegreeLevel>,
    /// Canonical program code.
    pub program: Option<String>,
    /// Program name as matched, before normalization.
    pub raw_program: Option<String>,
    pub tier: Option<MatchTier>,
    pub residual: String,
}

impl ParsedProgram {
    pub fn is_matched(&self) -> bool {
        self.program.is_some()
    }
}

/// Runs [`ProgramMatcher`] and [`ProgramNormalizer`] over one catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProgramParser<'a> {
    matcher: ProgramMatcher<'a>,
    normalizer: ProgramNormalizer<'a>,
}

impl<'a> ProgramParser<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self {
            matcher: ProgramMatcher::new(catalog),
            normalizer: ProgramNormalizer::new(catalog),
        }
    }

    pub fn parse(&self, line: &str) -> ParsedProgram {
        let matched = self.matcher.match_line(line);
        let program = matched
            .program_name
            .as_deref()
            .map(|name| self.normalizer.normalize(matched.level, name));
        ParsedProgram {
            level: matched.level,
            program,
            raw_program: matched.program_name,
            tier: matched.tier,
            residual: matched.residual,
        }
    }
}
