//! Embedded reference data.
//!
//! The default tables are embedded at compile time using `include_str!()` so
//! the parser works without any files on disk.

/// Default program vocabulary (`programs.json`).
pub const PROGRAMS_JSON: &str = include_str!("../data/programs.json");

/// Default majors table (`majors.csv`).
pub const MAJORS_CSV: &str = include_str!("../data/majors.csv");
