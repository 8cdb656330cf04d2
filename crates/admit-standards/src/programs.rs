//! Program vocabulary loading (`programs.json`).
//!
//! # Document Structure
//!
//! ```json
//! {
//!   "levels":   ["MS", "PhD", "MEng"],
//!   "programs": ["MSCS", "Computer Science", "MSEE"],
//!   "masters":  ["MSCS", "MSEE"],
//!   "type":     { "CS": ["MSCS", "Computer Science"], "EE": ["MSEE"] }
//! }
//! ```
//!
//! `levels` and `programs` are scan-ordered. `type` groups program names by
//! their type tag; every name in `programs` must appear in exactly one group.

use std::collections::{BTreeMap, HashMap};

use admit_model::ProgramType;
use serde::Deserialize;

use crate::error::{Result, StandardsError};

#[derive(Debug, Deserialize)]
struct ProgramsDocument {
    levels: Vec<String>,
    programs: Vec<String>,
    #[serde(default)]
    masters: Vec<String>,
    #[serde(rename = "type")]
    types: BTreeMap<String, Vec<String>>,
}

/// Parsed program vocabulary, ready to feed a catalog builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramVocabulary {
    pub levels: Vec<String>,
    pub programs: Vec<String>,
    pub masters: Vec<String>,
    /// `(program name, type)` pairs, grouped by type tag.
    pub types: Vec<(String, ProgramType)>,
}

/// Parse a program vocabulary document.
///
/// `source_name` is only used in error messages.
///
/// # Errors
///
/// Fails on malformed JSON, blank level or program entries, and programs
/// listed under more than one type group.
pub fn load_from_str(content: &str, source_name: &str) -> Result<ProgramVocabulary> {
    let document: ProgramsDocument =
        serde_json::from_str(content).map_err(|source| StandardsError::Json {
            source_name: source_name.to_string(),
            source,
        })?;

    check_entries("level", &document.levels, source_name)?;
    check_entries("program", &document.programs, source_name)?;

    let mut assigned: HashMap<&str, &str> = HashMap::new();
    let mut types = Vec::new();
    for (tag, names) in &document.types {
        for name in names {
            match assigned.get(name.as_str()) {
                Some(first) if *first != tag.as_str() => {
                    return Err(StandardsError::DuplicateProgramType {
                        program: name.clone(),
                        first: (*first).to_string(),
                        second: tag.clone(),
                    });
                }
                Some(_) => continue,
                None => {
                    assigned.insert(name, tag);
                    types.push((name.clone(), ProgramType::from(tag.as_str())));
                }
            }
        }
    }

    Ok(ProgramVocabulary {
        levels: document.levels,
        programs: document.programs,
        masters: document.masters,
        types,
    })
}

fn check_entries(field: &'static str, entries: &[String], source_name: &str) -> Result<()> {
    match entries.iter().find(|entry| entry.trim().is_empty()) {
        Some(entry) => Err(StandardsError::InvalidValue {
            field,
            value: entry.clone(),
            source_name: source_name.to_string(),
        }),
        None => Ok(()),
    }
}
