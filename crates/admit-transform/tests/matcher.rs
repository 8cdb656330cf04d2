//! Matching behaviour against the embedded reference data.

use std::sync::OnceLock;

use admit_model::{DegreeLevel, MatchTier, ReferenceCatalog};
use admit_transform::ProgramMatcher;

fn catalog() -> &'static ReferenceCatalog {
    static CATALOG: OnceLock<ReferenceCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| admit_standards::load_default().expect("embedded data loads"))
}

fn matcher() -> ProgramMatcher<'static> {
    ProgramMatcher::new(catalog())
}

#[test]
fn ms_computer_science() {
    let result = matcher().match_line("Admitted to MS Computer Science program");
    assert_eq!(result.level, Some(DegreeLevel::Ms));
    assert_eq!(result.program_name.as_deref(), Some("Computer Science"));
    assert_eq!(result.tier, Some(MatchTier::Vocabulary));
    assert_eq!(result.residual, "Admitted to program");
}

#[test]
fn phd_eecs() {
    let result = matcher().match_line("PhD EECS offer received");
    assert_eq!(result.level, Some(DegreeLevel::PhD));
    assert_eq!(result.program_name.as_deref(), Some("EECS"));
    assert_eq!(result.residual, "offer received");
}

#[test]
fn no_tokens_round_trips() {
    let line = "rejected via e-mail on 15 Mar";
    let result = matcher().match_line(line);
    assert!(result.is_empty());
    assert_eq!(result.tier, None);
    assert_eq!(result.residual, line);
}

#[test]
fn empty_line() {
    let result = matcher().match_line("");
    assert!(result.is_empty());
    assert_eq!(result.residual, "");
}

#[test]
fn whole_token_matching_only() {
    let result = matcher().match_line("MSCSE");
    assert_eq!(result.program_name, None);
    assert_eq!(result.level, None);
    assert_eq!(result.residual, "MSCSE");
}

#[test]
fn ms_and_phd_resolves_to_ms() {
    let result = matcher().match_line("PhD applicant got MS offer in CS");
    assert_eq!(result.level, Some(DegreeLevel::Ms));
    assert_eq!(result.program_name.as_deref(), Some("CS"));
    // "MS" is the token removed, "PhD" stays in the residual.
    assert_eq!(result.residual, "PhD applicant got offer in");
}

#[test]
fn doctoral_spelling_collapses_to_phd() {
    let result = matcher().match_line("Ph.D. ECE fall");
    assert_eq!(result.level, Some(DegreeLevel::PhD));
    assert_eq!(result.program_name.as_deref(), Some("ECE"));
    assert_eq!(result.residual, "fall");
}

#[test]
fn other_levels_collapse_to_ms() {
    let result = matcher().match_line("MEng EE Cornell");
    assert_eq!(result.level, Some(DegreeLevel::Ms));
    assert_eq!(result.program_name.as_deref(), Some("EE"));
    assert_eq!(result.residual, "Cornell");
}

#[test]
fn masters_only_program_defaults_to_ms() {
    let result = matcher().match_line("MSCS via email");
    assert_eq!(result.level, Some(DegreeLevel::Ms));
    assert_eq!(result.program_name.as_deref(), Some("MSCS"));
    assert_eq!(result.residual, "via email");
}

#[test]
fn non_masters_program_keeps_no_level() {
    let result = matcher().match_line("Computer Science via email");
    assert_eq!(result.level, None);
    assert_eq!(result.program_name.as_deref(), Some("Computer Science"));
}

#[test]
fn vocabulary_tier_precedes_major_tier() {
    // "Information Management" is both a vocabulary program and a major name.
    let result = matcher().match_line("Information Management NTU");
    assert_eq!(result.tier, Some(MatchTier::Vocabulary));
    assert_eq!(result.program_name.as_deref(), Some("Information Management"));
}

#[test]
fn lowercase_major_name_matches_major_tier() {
    let result = matcher().match_line("ms mechanical engineering");
    assert_eq!(result.tier, Some(MatchTier::Major));
    assert_eq!(result.program_name.as_deref(), Some("Mechanical Engineering"));
    assert_eq!(result.level, None);
    // Removal uses the display name, so the lowercase text stays.
    assert_eq!(result.residual, "ms mechanical engineering");
}

#[test]
fn major_abbreviation_matches_major_tier() {
    let result = matcher().match_line("台大 資工 MS");
    assert_eq!(result.tier, Some(MatchTier::Major));
    assert_eq!(
        result.program_name.as_deref(),
        Some("Computer Science and Information Engineering")
    );
    assert_eq!(result.level, Some(DegreeLevel::Ms));
}

#[test]
fn major_id_tier() {
    let result = matcher().match_line("PhD Stat UW");
    assert_eq!(result.tier, Some(MatchTier::MajorId));
    assert_eq!(result.program_name.as_deref(), Some("Statistics"));
    assert_eq!(result.level, Some(DegreeLevel::PhD));
}

#[test]
fn texas_am_is_not_applied_mathematics() {
    let result = matcher().match_line("PhD TEXAS AM UNIVERSITY rejected");
    assert_ne!(result.program_name.as_deref(), Some("Applied Mathematics"));
    assert_eq!(result.program_name, None);

    let result = matcher().match_line("PhD Texas AM");
    assert_eq!(result.program_name, None);
}

#[test]
fn am_id_matches_elsewhere() {
    let result = matcher().match_line("PhD AM Brown");
    assert_eq!(result.program_name.as_deref(), Some("Applied Mathematics"));
    assert_eq!(result.tier, Some(MatchTier::MajorId));
}

#[test]
fn residual_removes_single_occurrence() {
    let result = matcher().match_line("MS CS and MS again");
    assert_eq!(result.level, Some(DegreeLevel::Ms));
    assert_eq!(result.program_name.as_deref(), Some("MS CS"));
    // Removing the level first splits "MS CS", so the name removal finds nothing.
    assert_eq!(result.residual, "CS and MS again");
}
