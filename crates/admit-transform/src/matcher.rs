//! Level and program-name detection.
//!
//! ## Level
//!
//! A line carrying both `MS` and `PhD` tokens is an applicant who applied to a
//! doctoral track and was offered a master's, so the level is `MS`. Otherwise
//! the catalog levels are scanned in order and the first token present wins.
//! The detected token is then collapsed with [`DegreeLevel::from_token`].
//!
//! ## Program name
//!
//! Three tiers, each tried only when the previous one found nothing:
//!
//! 1. **Vocabulary**: canonical program names, case-sensitive.
//! 2. **Major**: uppercased major names and major abbreviations against the
//!    uppercased line. Yields the major's display name.
//! 3. **Major id**: major ids against the uppercased line. The `AM` id is
//!    skipped on lines mentioning `TEXAS AM`, which names a university.
//!
//! A program from the masters-only set implies `MS` when no level was found.

use admit_model::{DegreeLevel, MatchResult, MatchTier, MajorRecord, ReferenceCatalog};
use tracing::trace;

use crate::tokens::{contains_token, pad, remove_token};

const MS_TOKEN: &str = "MS";
const PHD_TOKEN: &str = "PhD";
const TEXAS_AM_ID: &str = "AM";
const TEXAS_AM: &str = "TEXAS AM";

/// Extracts a level and program name from one free-text line.
#[derive(Debug, Clone, Copy)]
pub struct ProgramMatcher<'a> {
    catalog: &'a ReferenceCatalog,
}

impl<'a> ProgramMatcher<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Match one line.
    ///
    /// The residual is the padded line with one occurrence of the detected
    /// level token removed, then one occurrence of the program name, trimmed.
    pub fn match_line(&self, line: &str) -> MatchResult {
        let padded = pad(line);
        let level_token = self.detect_level(&padded);
        let program = self.detect_program(&padded);

        let mut residual = padded;
        if let Some(token) = level_token {
            residual = remove_token(&residual, token);
        }
        if let Some((name, _)) = program {
            residual = remove_token(&residual, name);
        }

        let mut level = level_token.map(DegreeLevel::from_token);
        if level.is_none()
            && let Some((name, _)) = program
            && self.catalog.is_masters(name)
        {
            level = Some(DegreeLevel::Ms);
        }

        MatchResult {
            level,
            program_name: program.map(|(name, _)| name.to_string()),
            residual: residual.trim().to_string(),
            tier: program.map(|(_, tier)| tier),
        }
    }

    fn detect_level(&self, padded: &str) -> Option<&'a str> {
        if contains_token(padded, MS_TOKEN) && contains_token(padded, PHD_TOKEN) {
            return Some(MS_TOKEN);
        }
        self.catalog
            .levels()
            .iter()
            .map(String::as_str)
            .find(|level| contains_token(padded, level))
    }

    fn detect_program(&self, padded: &str) -> Option<(&'a str, MatchTier)> {
        if let Some(program) = self
            .catalog
            .programs()
            .iter()
            .find(|program| contains_token(padded, program))
        {
            trace!(tier = MatchTier::Vocabulary.as_str(), key = %program, "program matched");
            return Some((program.as_str(), MatchTier::Vocabulary));
        }

        let upper = padded.to_uppercase();
        let majors = self.catalog.majors();

        if let Some(major) = majors.iter().find(|major| matches_major(&upper, major)) {
            trace!(tier = MatchTier::Major.as_str(), key = %major.name, "program matched");
            return Some((major.name.as_str(), MatchTier::Major));
        }

        let mentions_texas_am = upper.contains(TEXAS_AM);
        let major = majors.iter().find(|major| {
            contains_token(&upper, &major.id) && !(mentions_texas_am && major.id == TEXAS_AM_ID)
        })?;
        trace!(tier = MatchTier::MajorId.as_str(), key = %major.id, "program matched");
        Some((major.name.as_str(), MatchTier::MajorId))
    }
}

fn matches_major(upper: &str, major: &MajorRecord) -> bool {
    contains_token(upper, major.name_upper())
        || major
            .abbreviation
            .as_deref()
            .is_some_and(|abbr| contains_token(upper, abbr))
}
