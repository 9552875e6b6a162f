use std::path::PathBuf;

use crate::merge::ColumnAlignment;

/// Default directory holding the base workbooks.
pub const DEFAULT_ORIGIN_DIR: &str = "origin";
/// Default directory holding the workbooks merged into every base.
pub const DEFAULT_INPUT_DIR: &str = "input";
/// Default directory receiving one output workbook per base.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Everything a merge run needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub origin_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub alignment: ColumnAlignment,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            origin_dir: PathBuf::from(DEFAULT_ORIGIN_DIR),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            alignment: ColumnAlignment::default(),
        }
    }
}
