//! Reference-data loaders for the admission-result program parser.
//!
//! This crate turns the two external tables into a
//! [`ReferenceCatalog`](admit_model::ReferenceCatalog):
//!
//! - **`programs.json`**: degree levels, canonical program names, the
//!   masters-only subset, and program names grouped by type
//! - **`majors.csv`**: `major_id,major_name,major_cabbr,major_type`
//!
//! A default data set is embedded at compile time. A directory holding both
//! files can replace it, either passed explicitly or named by the
//! `ADMIT_STANDARDS_DIR` environment variable.
//!
//! # Example
//!
//! ```rust,ignore
//! let catalog = admit_standards::load_default()?;
//! assert!(catalog.is_masters("MSCS"));
//! ```

pub mod catalog;
pub mod embedded;
pub mod error;
pub mod majors;
pub mod paths;
pub mod programs;

pub use catalog::{build_catalog, load, load_default, load_from_dir};
pub use error::{Result, StandardsError};
pub use paths::{MAJORS_FILE, PROGRAMS_FILE, STANDARDS_ENV_VAR, standards_override};
pub use programs::ProgramVocabulary;
