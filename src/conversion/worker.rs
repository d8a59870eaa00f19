//! Background batch worker
//!
//! Runs one batch on a single thread so the window stays responsive. Files
//! are still converted one at a time and in order; events flow back over a
//! `std::sync::mpsc` channel that the UI polls.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::batch::{convert_jobs, BatchReport, ConversionJob, FileResult};
use super::{Compiler, ConversionOutcome};
use crate::core::{display_name, AppError};

/// Events emitted by the worker thread
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// About to run the compiler on job `index`
    FileStarted { index: usize, total: usize, name: String },
    /// Job `index` finished
    FileFinished { index: usize, result: FileResult },
    /// Every job has been attempted
    Finished(BatchReport),
}

/// What the UI should show after a poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerStatus {
    Running {
        completed: usize,
        /// Files finished so far that failed
        failed: usize,
        total: usize,
        current: Option<String>,
    },
    Finished(BatchReport),
}

pub struct BatchWorker {
    rx: Receiver<BatchEvent>,
    total: usize,
    completed: usize,
    failed: usize,
    current: Option<String>,
}

impl BatchWorker {
    /// Start converting `jobs` on a new thread
    pub fn spawn<C>(compiler: C, jobs: Vec<ConversionJob>) -> Result<Self, AppError>
    where
        C: Compiler + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let total = jobs.len();

        thread::Builder::new()
            .name("uic-batch".to_string())
            .spawn(move || {
                let report = convert_jobs_reporting(&jobs, &compiler, &tx);
                // The window may be gone already; nothing left to tell it
                let _ = tx.send(BatchEvent::Finished(report));
            })
            .map_err(|e| {
                log::error!("Failed to start conversion worker: {}", e);
                AppError::Worker
            })?;

        log::debug!("Conversion worker started for {} file(s)", total);
        Ok(Self {
            rx,
            total,
            completed: 0,
            failed: 0,
            current: None,
        })
    }

    /// Drain pending events
    ///
    /// Returns `Finished` exactly once; the worker should be dropped after.
    pub fn poll(&mut self) -> Result<WorkerStatus, AppError> {
        loop {
            match self.rx.try_recv() {
                Ok(BatchEvent::FileStarted { index, total, name }) => {
                    log::debug!("Worker started file {}/{}: {}", index + 1, total, name);
                    self.current = Some(name);
                }
                Ok(BatchEvent::FileFinished { index, result }) => {
                    self.completed = index + 1;
                    if let ConversionOutcome::Failure(message) = &result.outcome {
                        log::debug!("Worker file {} failed: {}", index + 1, message);
                        self.failed += 1;
                    }
                }
                Ok(BatchEvent::Finished(report)) => return Ok(WorkerStatus::Finished(report)),
                Err(TryRecvError::Empty) => {
                    return Ok(WorkerStatus::Running {
                        completed: self.completed,
                        failed: self.failed,
                        total: self.total,
                        current: self.current.clone(),
                    });
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Conversion worker disconnected before finishing");
                    return Err(AppError::Worker);
                }
            }
        }
    }
}

fn convert_jobs_reporting<C: Compiler>(
    jobs: &[ConversionJob],
    compiler: &C,
    tx: &mpsc::Sender<BatchEvent>,
) -> BatchReport {
    let total = jobs.len();
    convert_jobs(
        jobs,
        compiler,
        |index, job| {
            let _ = tx.send(BatchEvent::FileStarted {
                index,
                total,
                name: display_name(&job.input_path),
            });
        },
        |index, result| {
            let _ = tx.send(BatchEvent::FileFinished {
                index,
                result: result.clone(),
            });
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::MockCompiler;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    fn jobs(names: &[&str]) -> Vec<ConversionJob> {
        names
            .iter()
            .map(|n| ConversionJob {
                input_path: PathBuf::from("/src").join(n),
                output_path: PathBuf::from("/out").join(format!("ui_{}", n.replace(".ui", ".py"))),
            })
            .collect()
    }

    fn wait_for_report(worker: &mut BatchWorker) -> BatchReport {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            match worker.poll().expect("worker should not disconnect") {
                WorkerStatus::Finished(report) => return report,
                WorkerStatus::Running { .. } => {
                    assert!(Instant::now() < deadline, "worker did not finish in time");
                    std::thread::sleep(Duration::from_millis(5));
                }
            }
        }
    }

    #[test]
    fn test_worker_preserves_order_and_continues_after_failure() {
        let compiler = MockCompiler::failing_on("b.ui", "syntax error line 4");
        let mut worker = BatchWorker::spawn(compiler, jobs(&["a.ui", "b.ui", "c.ui"])).unwrap();

        let report = wait_for_report(&mut worker);

        let names: Vec<String> = report.results.iter().map(|r| display_name(&r.input_path)).collect();
        assert_eq!(names, vec!["a.ui", "b.ui", "c.ui"]);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(
            report.results[1].outcome,
            ConversionOutcome::Failure("syntax error line 4".to_string())
        );
    }

    #[test]
    fn test_worker_with_no_jobs_finishes_empty() {
        let mut worker = BatchWorker::spawn(MockCompiler::new(), Vec::new()).unwrap();
        let report = wait_for_report(&mut worker);
        assert!(report.is_empty());
    }

    #[test]
    fn test_poll_after_finish_reports_disconnect() {
        let mut worker = BatchWorker::spawn(MockCompiler::new(), jobs(&["a.ui"])).unwrap();
        wait_for_report(&mut worker);

        // The thread has exited and dropped its sender
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            match worker.poll() {
                Err(AppError::Worker) => break,
                Ok(WorkerStatus::Running { completed, total, .. }) => {
                    assert_eq!((completed, total), (1, 1));
                    assert!(Instant::now() < deadline);
                    std::thread::sleep(Duration::from_millis(5));
                }
                other => panic!("unexpected poll result: {:?}", other),
            }
        }
    }

    /// Fails `a.ui` at once; every other file waits for the gate
    struct GatedCompiler {
        gate: Mutex<mpsc::Receiver<()>>,
    }

    impl Compiler for GatedCompiler {
        fn compile(&self, input: &Path, _output: &Path) -> ConversionOutcome {
            if display_name(input) == "a.ui" {
                return ConversionOutcome::Failure("bad widget".to_string());
            }
            let _ = self.gate.lock().unwrap().recv();
            ConversionOutcome::Success
        }
    }

    #[test]
    fn test_running_status_counts_failures() {
        let (open_gate, gate) = mpsc::channel();
        let compiler = GatedCompiler {
            gate: Mutex::new(gate),
        };
        let mut worker = BatchWorker::spawn(compiler, jobs(&["a.ui", "b.ui"])).unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            match worker.poll().unwrap() {
                WorkerStatus::Running {
                    completed,
                    failed,
                    total,
                    current,
                } if current.as_deref() == Some("b.ui") => {
                    assert_eq!((completed, failed, total), (1, 1, 2));
                    break;
                }
                WorkerStatus::Running { .. } => {
                    assert!(Instant::now() < deadline, "second file never started");
                    std::thread::sleep(Duration::from_millis(5));
                }
                WorkerStatus::Finished(_) => panic!("finished while gated"),
            }
        }

        open_gate.send(()).unwrap();
        let report = wait_for_report(&mut worker);
        assert_eq!(report.error_count(), 1);
    }
}
