//! Reference catalog and result types for parsing admission-result lines.
//!
//! This crate provides:
//!
//! - **[`ReferenceCatalog`]**: the immutable vocabulary of degree levels,
//!   canonical program names, the masters-only set, the program-type map,
//!   and the majors table
//! - **[`DegreeLevel`]** and **[`ProgramType`]**: the closed vocabularies the
//!   matcher and normalizer emit and dispatch on
//! - **[`MatchResult`]**: the output of matching one free-text line
//!
//! Loading reference data from disk lives in `admit-standards`; matching and
//! normalization live in `admit-transform`.

pub mod catalog;
pub mod error;
pub mod level;
pub mod program_type;
pub mod result;

pub use catalog::{CatalogBuilder, MajorRecord, ReferenceCatalog, merge_major_types};
pub use error::{CatalogError, Result};
pub use level::DegreeLevel;
pub use program_type::ProgramType;
pub use result::{MatchResult, MatchTier};
