//! Test fixtures
//!
//! A recording `Compiler` stand-in and helpers for creating `.ui` files.

#![cfg(test)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::conversion::{Compiler, ConversionOutcome};
use crate::core::display_name;

/// Compiler that records every call and fails on chosen file names
#[derive(Default)]
pub struct MockCompiler {
    failures: HashMap<String, String>,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl MockCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail whenever the input file is named `file_name`
    pub fn failing_on(file_name: &str, message: &str) -> Self {
        let mut mock = Self::new();
        mock.failures.insert(file_name.to_string(), message.to_string());
        mock
    }

    /// Every `(input, output)` pair passed to `compile`, in call order
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Compiler for MockCompiler {
    fn compile(&self, input: &Path, output: &Path) -> ConversionOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));
        match self.failures.get(&display_name(input)) {
            Some(message) => ConversionOutcome::Failure(message.clone()),
            None => ConversionOutcome::Success,
        }
    }
}

/// Create an (empty) `.ui` file named `name` inside `dir`
pub fn ui_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "<ui version=\"4.0\"/>\n").expect("Failed to write fixture");
    path
}
