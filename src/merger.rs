use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::config::MergeConfig;
use crate::error::{Result, ToolError};
use crate::io::{excel_read, excel_write, scan};
use crate::merge::{self, ColumnAlignment};

/// Row accounting for one base workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Display form of the file name shared by the base workbook and its
    /// output.
    pub file_name: String,
    pub output_path: PathBuf,
    pub addend_count: usize,
    pub rows_before_filter: usize,
    pub rows_removed: usize,
    pub rows_after_filter: usize,
}

/// Progress notifications emitted while a run is under way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    /// A base workbook is about to be read.
    Processing(String),
    /// An addend workbook was read and queued behind the current base.
    Adding(String),
    /// The output for a base workbook has been written.
    Merged(MergeSummary),
}

/// Result of a merge run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Every base workbook was merged and written, in order.
    Completed(Vec<MergeSummary>),
    /// The base directory holds no `.xlsx` files; nothing was written.
    NoBaseFiles(PathBuf),
    /// The addend directory holds no `.xlsx` files; nothing was written.
    NoAddendFiles(PathBuf),
}

/// Runs one full merge pass without progress reporting. See [`run_with`].
pub fn run(config: &MergeConfig) -> Result<MergeOutcome> {
    run_with(config, |_| {})
}

/// Runs one full merge pass: every addend workbook is appended to every base
/// workbook, blank rows are dropped and the result is written to the output
/// directory under the base workbook's file name.
///
/// `on_event` is called as the run progresses, so summaries of bases already
/// written are delivered even when a later base fails. The output directory
/// is created up front. The first read or write failure ends the run; outputs
/// already written are left in place.
#[instrument(
    level = "info",
    skip_all,
    fields(
        origin = %config.origin_dir.display(),
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
    )
)]
pub fn run_with<F>(config: &MergeConfig, mut on_event: F) -> Result<MergeOutcome>
where
    F: FnMut(&MergeEvent),
{
    fs::create_dir_all(&config.output_dir)?;

    let base_files = scan::list_workbooks(&config.origin_dir)?;
    if base_files.is_empty() {
        return Ok(MergeOutcome::NoBaseFiles(config.origin_dir.clone()));
    }

    let addend_files = scan::list_workbooks(&config.input_dir)?;
    if addend_files.is_empty() {
        return Ok(MergeOutcome::NoAddendFiles(config.input_dir.clone()));
    }

    let mut summaries = Vec::with_capacity(base_files.len());
    for base in &base_files {
        let summary = merge_one(
            base,
            &addend_files,
            &config.output_dir,
            config.alignment,
            &mut on_event,
        )?;
        on_event(&MergeEvent::Merged(summary.clone()));
        summaries.push(summary);
    }

    info!(base_count = summaries.len(), "all base workbooks processed");
    Ok(MergeOutcome::Completed(summaries))
}

/// Merges `addends` into the workbook at `base` and writes the filtered
/// result into `output_dir` under the base file name.
#[instrument(level = "info", skip_all, fields(base = %display_name(base)))]
pub fn merge_one<F>(
    base: &Path,
    addends: &[PathBuf],
    output_dir: &Path,
    alignment: ColumnAlignment,
    on_event: &mut F,
) -> Result<MergeSummary>
where
    F: FnMut(&MergeEvent),
{
    let file_name = base.file_name().ok_or_else(|| {
        ToolError::InvalidWorkbook(format!("{} has no file name", base.display()))
    })?;
    let output_path = output_dir.join(file_name);

    info!("processing base workbook");
    on_event(&MergeEvent::Processing(display_name(base)));

    let mut tables = Vec::with_capacity(addends.len() + 1);
    tables.push(excel_read::read_table(base)?);
    for addend in addends {
        tables.push(excel_read::read_table(addend)?);
        info!(addend = %display_name(addend), "adding workbook");
        on_event(&MergeEvent::Adding(display_name(addend)));
    }

    let mut merged = merge::concat(&tables, alignment);
    drop(tables);

    let rows_before_filter = merged.row_count();
    let rows_removed = merge::drop_blank_rows(&mut merged);
    let rows_after_filter = merged.row_count();

    excel_write::write_table(&output_path, &merged)?;

    info!(
        addend_count = addends.len(),
        output = %output_path.display(),
        rows_before_filter,
        rows_removed,
        rows_after_filter,
        "merged workbook written"
    );

    Ok(MergeSummary {
        file_name: display_name(base),
        output_path,
        addend_count: addends.len(),
        rows_before_filter,
        rows_removed,
        rows_after_filter,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
