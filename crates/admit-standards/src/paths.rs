//! Reference-data directory resolution.

use std::path::PathBuf;

/// Environment variable naming a directory that replaces the embedded data.
pub const STANDARDS_ENV_VAR: &str = "ADMIT_STANDARDS_DIR";

/// File name of the program vocabulary inside a standards directory.
pub const PROGRAMS_FILE: &str = "programs.json";

/// File name of the majors table inside a standards directory.
pub const MAJORS_FILE: &str = "majors.csv";

/// Directory named by `ADMIT_STANDARDS_DIR`, if set and non-empty.
pub fn standards_override() -> Option<PathBuf> {
    std::env::var_os(STANDARDS_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
