//! Conversion handling for ConverterWindow
//!
//! Validates and plans on the UI thread, runs the batch on the worker and
//! polls it until the report arrives.

use std::time::Duration;

use gpui::{AsyncApp, Context, Timer, WeakEntity};

use crate::controller::Command;
use crate::conversion::{BatchReport, BatchWorker, UicCompiler, WorkerStatus};
use crate::core::AppSettings;

use super::ConverterWindow;

/// Status line while the batch runs, e.g. `Converting 2/3: b.ui (1 failed)`
pub(crate) fn running_status(completed: usize, failed: usize, total: usize, name: &str) -> String {
    let status = format!("Converting {}/{}: {}", (completed + 1).min(total), total, name);
    if failed == 0 {
        status
    } else {
        format!("{} ({} failed)", status, failed)
    }
}

impl ConverterWindow {
    /// Convert button / Convert action
    pub fn start_conversion(&mut self, cx: &mut Context<Self>) {
        let settings = cx.global::<AppSettings>().clone();
        if self.begin_conversion(&settings) {
            Self::start_worker_polling(cx);
        }
        cx.notify();
    }

    /// Plan the batch, find the compiler and start the worker
    ///
    /// Returns true if a worker is now running.
    pub(crate) fn begin_conversion(&mut self, settings: &AppSettings) -> bool {
        if self.is_converting() {
            log::debug!("Conversion already in progress");
            return false;
        }
        self.commit_output_name();
        self.context_menu_row = None;

        let Some(plan) = self.apply(Command::Convert) else {
            return false;
        };

        let compiler = match UicCompiler::locate(settings) {
            Ok(compiler) => compiler,
            Err(e) => {
                self.report_error(e);
                return false;
            }
        };

        log::info!("Starting conversion of {} file(s)", plan.jobs.len());
        match BatchWorker::spawn(compiler, plan.jobs) {
            Ok(worker) => {
                self.worker = Some(worker);
                self.errors.clear();
                self.status = "Starting conversion process...".to_string();
                true
            }
            Err(e) => {
                self.report_error(e);
                false
            }
        }
    }

    /// Drain worker events; returns true while the batch is still running
    pub(crate) fn poll_worker(&mut self) -> bool {
        let Some(worker) = self.worker.as_mut() else {
            return false;
        };

        match worker.poll() {
            Ok(WorkerStatus::Running {
                completed,
                failed,
                total,
                current,
            }) => {
                if let Some(name) = current {
                    self.status = running_status(completed, failed, total, &name);
                }
                true
            }
            Ok(WorkerStatus::Finished(report)) => {
                self.worker = None;
                self.finish_conversion(report);
                false
            }
            Err(e) => {
                self.worker = None;
                self.report_error(e);
                false
            }
        }
    }

    /// Surface a finished batch
    pub(crate) fn finish_conversion(&mut self, report: BatchReport) {
        self.status = report.status_text();
        self.errors = report.errors();
        log::info!("{}", self.status);

        if report.len() > 1 && !self.errors.is_empty() {
            self.pending_error_message = Some((
                format!("{} of {} files failed", report.error_count(), report.len()),
                self.errors.join("\n"),
            ));
        }
    }

    /// Poll the worker every 50ms until the batch finishes
    pub(super) fn start_worker_polling(cx: &mut Context<Self>) {
        cx.spawn(|this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                loop {
                    Timer::after(Duration::from_millis(50)).await;

                    let still_running = this
                        .update(&mut async_cx, |this, cx| {
                            let running = this.poll_worker();
                            cx.notify();
                            running
                        })
                        .unwrap_or(false);

                    if !still_running {
                        break;
                    }
                }
            }
        })
        .detach();
    }
}
