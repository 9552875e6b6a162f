//! Core library for the sheet-merger command line application.
//!
//! A run appends every workbook of an addend directory to each workbook of a
//! base directory, drops rows left blank by the merge and writes one workbook
//! per base. IO adapters live under [`io`], the in-memory table in [`model`],
//! the concatenation and filtering rules in [`merge`], and the run itself in
//! [`merger`].

pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod merger;
pub mod model;

pub use config::MergeConfig;
pub use error::{Result, ToolError};
pub use merger::{MergeEvent, MergeOutcome, MergeSummary};
