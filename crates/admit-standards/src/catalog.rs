//! Catalog assembly from the embedded data or a standards directory.

use std::path::Path;

use admit_model::{MajorRecord, ReferenceCatalog};
use tracing::{debug, info};

use crate::error::{Result, StandardsError};
use crate::paths::{MAJORS_FILE, PROGRAMS_FILE, standards_override};
use crate::programs::ProgramVocabulary;
use crate::{embedded, majors, programs};

/// Build a catalog from parsed tables.
///
/// # Errors
///
/// Returns [`StandardsError::Catalog`] when a vocabulary program has no type.
pub fn build_catalog(
    vocabulary: ProgramVocabulary,
    majors: Vec<MajorRecord>,
) -> Result<ReferenceCatalog> {
    let vocabulary_types = vocabulary.types.len();
    let mut builder = ReferenceCatalog::builder()
        .levels(vocabulary.levels)
        .programs(vocabulary.programs)
        .masters(vocabulary.masters)
        .majors(majors);
    for (name, program_type) in vocabulary.types {
        builder = builder.program_type(name, program_type);
    }
    let catalog = builder.build()?;

    info!(
        levels = catalog.levels().len(),
        programs = catalog.programs().len(),
        masters = catalog.masters().len(),
        majors = catalog.majors().len(),
        "loaded reference catalog"
    );
    debug!(
        merged = catalog.type_count().saturating_sub(vocabulary_types),
        "merged major types into program-type map"
    );
    Ok(catalog)
}

/// Load the catalog from the embedded data set.
pub fn load_default() -> Result<ReferenceCatalog> {
    let vocabulary = programs::load_from_str(embedded::PROGRAMS_JSON, PROGRAMS_FILE)?;
    let majors = majors::load_from_str(embedded::MAJORS_CSV, MAJORS_FILE)?;
    build_catalog(vocabulary, majors)
}

/// Load the catalog from a directory holding `programs.json` and `majors.csv`.
pub fn load_from_dir(dir: &Path) -> Result<ReferenceCatalog> {
    let programs_path = dir.join(PROGRAMS_FILE);
    let majors_path = dir.join(MAJORS_FILE);
    let programs_content = read_file(&programs_path)?;
    let majors_content = read_file(&majors_path)?;

    debug!(dir = %dir.display(), "loading reference data from directory");
    let vocabulary =
        programs::load_from_str(&programs_content, &programs_path.display().to_string())?;
    let majors = majors::load_from_str(&majors_content, &majors_path.display().to_string())?;
    build_catalog(vocabulary, majors)
}

/// Load the catalog from `dir`, else `ADMIT_STANDARDS_DIR`, else the embedded
/// data set.
pub fn load(dir: Option<&Path>) -> Result<ReferenceCatalog> {
    if let Some(dir) = dir {
        return load_from_dir(dir);
    }
    match standards_override() {
        Some(dir) => load_from_dir(&dir),
        None => load_default(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(StandardsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))
}
