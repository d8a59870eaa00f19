//! Sequential batch conversion
//!
//! One compiler run per input file, in input order. A failure does not stop
//! the remaining files.

use std::path::{Path, PathBuf};

use super::{Compiler, ConversionOutcome};
use crate::core::display_name;

/// A file to be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Outcome of one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub outcome: ConversionOutcome,
}

/// All outcomes of one conversion run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub results: Vec<FileResult>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// `"<file name>: <message>"` for every failed file
    pub fn errors(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                ConversionOutcome::Failure(msg) => {
                    Some(format!("{}: {}", display_name(&r.input_path), msg))
                }
                ConversionOutcome::Success => None,
            })
            .collect()
    }

    /// Status line summarizing the run
    pub fn status_text(&self) -> String {
        if self.len() == 1 {
            return match &self.results[0].outcome {
                ConversionOutcome::Success => "Conversion completed".to_string(),
                ConversionOutcome::Failure(msg) => format!("Conversion failed: {}", msg),
            };
        }
        match self.error_count() {
            0 => format!("Conversion completed ({} files)", self.len()),
            n => format!("{} error(s) occurred", n),
        }
    }
}

/// Run `jobs` one after another
///
/// `on_start` is called before each compile and `on_result` after it.
pub fn convert_jobs<C, S, F>(jobs: &[ConversionJob], compiler: &C, mut on_start: S, mut on_result: F) -> BatchReport
where
    C: Compiler + ?Sized,
    S: FnMut(usize, &ConversionJob),
    F: FnMut(usize, &FileResult),
{
    let mut results = Vec::with_capacity(jobs.len());

    for (index, job) in jobs.iter().enumerate() {
        on_start(index, job);
        let outcome = compiler.compile(&job.input_path, &job.output_path);
        let result = FileResult {
            input_path: job.input_path.clone(),
            output_path: job.output_path.clone(),
            outcome,
        };
        on_result(index, &result);
        results.push(result);
    }

    let report = BatchReport { results };
    log::info!(
        "Batch finished: {} succeeded, {} failed",
        report.succeeded(),
        report.error_count()
    );
    report
}

/// One job per file, in order, writing into `output_dir`
pub fn plan_jobs<N>(files: &[PathBuf], output_dir: &Path, name_fn: N) -> Vec<ConversionJob>
where
    N: Fn(&Path) -> String,
{
    files
        .iter()
        .map(|input| ConversionJob {
            input_path: input.clone(),
            output_path: output_dir.join(name_fn(input)),
        })
        .collect()
}

/// Convert `files` into `output_dir` on the calling thread
#[allow(dead_code)]
pub fn convert_batch<C, N>(files: &[PathBuf], output_dir: &Path, name_fn: N, compiler: &C) -> BatchReport
where
    C: Compiler + ?Sized,
    N: Fn(&Path) -> String,
{
    convert_jobs(&plan_jobs(files, output_dir, name_fn), compiler, |_, _| {}, |_, _| {})
}
