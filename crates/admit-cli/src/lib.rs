//! CLI library components for the admission-result parser.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
