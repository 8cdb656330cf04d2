//! Program matching and normalization for free-text admission-result lines.
//!
//! Control flow for one line:
//!
//! ```text
//! raw line ──► ProgramMatcher ──► (level, name, residual)
//!                                       │
//!                                       ▼
//!                               ProgramNormalizer ──► canonical code
//! ```
//!
//! [`ProgramParser`] chains both steps. Every operation borrows one shared
//! [`ReferenceCatalog`](admit_model::ReferenceCatalog) and is infallible: an
//! unrecognized line yields `None` fields, an unrecognized name passes through.

pub mod matcher;
pub mod normalizer;
pub mod parser;
mod tokens;

pub use matcher::ProgramMatcher;
pub use normalizer::ProgramNormalizer;
pub use parser::{ParsedProgram, ProgramParser};
