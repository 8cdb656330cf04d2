//! Reference catalog of degree levels, program names, and majors.
//!
//! The catalog is assembled from two external tables:
//!
//! 1. **Program vocabulary**: ordered degree levels, ordered canonical program
//!    names, the masters-only subset, and a type for every program name.
//! 2. **Majors table**: ordered `(id, name, abbreviation, type)` records.
//!
//! ## Type precedence
//!
//! Program-vocabulary types are written first. Majors then add
//! `name -> type` and `id -> type` only for keys not already present, so a
//! major never reclassifies a vocabulary entry (first writer wins). See
//! [`merge_major_types`].
//!
//! Order is significant everywhere: levels, programs, and majors are scanned
//! in stored order and the first hit wins.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::program_type::ProgramType;

/// One row of the majors table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorRecord {
    /// Short id (e.g. "CSIE"); also a match key.
    pub id: String,
    /// Display name (e.g. "Computer Science and Information Engineering").
    pub name: String,
    /// Local-language abbreviation. Blank abbreviations are stored as `None`.
    pub abbreviation: Option<String>,
    pub major_type: ProgramType,
    #[serde(skip)]
    name_upper: String,
}

impl MajorRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        abbreviation: Option<String>,
        major_type: ProgramType,
    ) -> Self {
        let name = name.into();
        let name_upper = name.to_uppercase();
        Self {
            id: id.into(),
            name,
            abbreviation: abbreviation.filter(|abbr| !abbr.trim().is_empty()),
            major_type,
            name_upper,
        }
    }

    /// Uppercased name, precomputed for case-insensitive matching.
    pub fn name_upper(&self) -> &str {
        &self.name_upper
    }
}

/// Merge majors into a program-type map without overwriting existing keys.
///
/// For each record in order, `name -> type` is inserted and then
/// `id -> type`, each only when the key is absent. Returns the number of keys
/// added.
pub fn merge_major_types(types: &mut HashMap<String, ProgramType>, majors: &[MajorRecord]) -> usize {
    let mut added = 0;
    for major in majors {
        for key in [&major.name, &major.id] {
            if !types.contains_key(key) {
                types.insert(key.clone(), major.major_type.clone());
                added += 1;
            }
        }
    }
    added
}

/// Immutable vocabulary shared by every match and normalize call.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    levels: Vec<String>,
    programs: Vec<String>,
    masters: BTreeSet<String>,
    types: HashMap<String, ProgramType>,
    majors: Vec<MajorRecord>,
}

impl ReferenceCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Degree-level tokens in scan order.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Canonical program names in scan order.
    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    pub fn masters(&self) -> &BTreeSet<String> {
        &self.masters
    }

    /// Whether a program name is assumed to be a master's offer.
    pub fn is_masters(&self, program_name: &str) -> bool {
        self.masters.contains(program_name)
    }

    /// Type of a program name, major name, or major id.
    pub fn program_type(&self, name: &str) -> Option<&ProgramType> {
        self.types.get(name)
    }

    /// Majors in table order.
    pub fn majors(&self) -> &[MajorRecord] {
        &self.majors
    }

    /// Number of keys in the merged type map.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of typed keys per program type, sorted by type.
    pub fn type_histogram(&self) -> Vec<(ProgramType, usize)> {
        let mut counts: HashMap<&ProgramType, usize> = HashMap::new();
        for program_type in self.types.values() {
            *counts.entry(program_type).or_default() += 1;
        }
        let mut histogram: Vec<(ProgramType, usize)> = counts
            .into_iter()
            .map(|(program_type, count)| (program_type.clone(), count))
            .collect();
        histogram.sort_by(|a, b| a.0.cmp(&b.0));
        histogram
    }
}

/// Collects the two reference tables and validates them into a catalog.
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    levels: Vec<String>,
    programs: Vec<String>,
    masters: BTreeSet<String>,
    types: HashMap<String, ProgramType>,
    majors: Vec<MajorRecord>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels.extend(levels.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn programs<I, S>(mut self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.programs.extend(programs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn masters<I, S>(mut self, masters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.masters.extend(masters.into_iter().map(Into::into));
        self
    }

    /// Classify a program-vocabulary name. Later calls for the same name win.
    #[must_use]
    pub fn program_type(mut self, name: impl Into<String>, program_type: ProgramType) -> Self {
        self.types.insert(name.into(), program_type);
        self
    }

    #[must_use]
    pub fn majors<I>(mut self, majors: I) -> Self
    where
        I: IntoIterator<Item = MajorRecord>,
    {
        self.majors.extend(majors);
        self
    }

    /// Validate the vocabulary and merge major types.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UntypedProgram`] for the first program name, in
    /// vocabulary order, that has no type.
    pub fn build(self) -> Result<ReferenceCatalog> {
        let Self {
            levels,
            programs,
            masters,
            mut types,
            majors,
        } = self;

        if let Some(program) = programs.iter().find(|p| !types.contains_key(p.as_str())) {
            return Err(CatalogError::UntypedProgram {
                program: program.clone(),
            });
        }

        merge_major_types(&mut types, &majors);

        Ok(ReferenceCatalog {
            levels,
            programs,
            masters,
            types,
            majors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major(id: &str, name: &str, abbr: Option<&str>, tag: &str) -> MajorRecord {
        MajorRecord::new(id, name, abbr.map(String::from), ProgramType::from(tag))
    }

    #[test]
    fn name_upper_is_precomputed() {
        let record = major("CS", "Computer Science", Some("資科"), "CS");
        assert_eq!(record.name_upper(), "COMPUTER SCIENCE");
        assert_eq!(record.name, "Computer Science");
    }

    #[test]
    fn blank_abbreviation_becomes_none() {
        assert_eq!(major("ME", "Mechanical Engineering", Some("  "), "ME").abbreviation, None);
        assert_eq!(major("ME", "Mechanical Engineering", None, "ME").abbreviation, None);
    }

    #[test]
    fn merge_keeps_first_writer() {
        let mut types = HashMap::new();
        types.insert("Data Science".to_string(), ProgramType::Cs);

        let majors = vec![
            major("DS", "Data Science", None, "STAT"),
            major("STAT", "Statistics", None, "STAT"),
            major("STAT2", "Statistics", None, "MATH"),
        ];
        let added = merge_major_types(&mut types, &majors);

        assert_eq!(added, 4);
        assert_eq!(types["Data Science"], ProgramType::Cs);
        assert_eq!(types["DS"], ProgramType::Other("STAT".to_string()));
        assert_eq!(types["Statistics"], ProgramType::Other("STAT".to_string()));
        assert_eq!(types["STAT2"], ProgramType::Other("MATH".to_string()));
    }

    #[test]
    fn build_rejects_untyped_program() {
        let err = ReferenceCatalog::builder()
            .programs(["MSCS", "MSEE", "MSIS"])
            .program_type("MSCS", ProgramType::Cs)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UntypedProgram {
                program: "MSEE".to_string()
            }
        );
    }

    #[test]
    fn major_types_do_not_satisfy_vocabulary_check() {
        let result = ReferenceCatalog::builder()
            .programs(["Computer Science"])
            .majors([major("CS", "Computer Science", None, "CS")])
            .build();
        assert!(matches!(result, Err(CatalogError::UntypedProgram { .. })));
    }

    #[test]
    fn build_preserves_order_and_merges() {
        let catalog = ReferenceCatalog::builder()
            .levels(["MS", "PhD"])
            .programs(["MSCS", "EE"])
            .masters(["MSCS"])
            .program_type("MSCS", ProgramType::Cs)
            .program_type("EE", ProgramType::Ee)
            .majors([
                major("EE", "Electrical Engineering", Some("電機"), "ME"),
                major("AM", "Applied Mathematics", Some("應數"), "MATH"),
            ])
            .build()
            .unwrap();

        assert_eq!(catalog.levels(), ["MS", "PhD"]);
        assert_eq!(catalog.programs(), ["MSCS", "EE"]);
        assert!(catalog.is_masters("MSCS"));
        assert!(!catalog.is_masters("EE"));
        assert_eq!(catalog.program_type("EE"), Some(&ProgramType::Ee));
        assert_eq!(
            catalog.program_type("Electrical Engineering"),
            Some(&ProgramType::Other("ME".to_string()))
        );
        assert_eq!(
            catalog.program_type("AM"),
            Some(&ProgramType::Other("MATH".to_string()))
        );
        assert_eq!(catalog.program_type("unknown"), None);
        assert_eq!(catalog.majors().len(), 2);
        assert_eq!(catalog.type_count(), 5);
    }

    #[test]
    fn histogram_counts_by_type() {
        let catalog = ReferenceCatalog::builder()
            .programs(["MSCS", "CS", "MSEE"])
            .program_type("MSCS", ProgramType::Cs)
            .program_type("CS", ProgramType::Cs)
            .program_type("MSEE", ProgramType::Ee)
            .build()
            .unwrap();
        assert_eq!(
            catalog.type_histogram(),
            vec![(ProgramType::Cs, 2), (ProgramType::Ee, 1)]
        );
    }
}
