use std::path::PathBuf;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use super::ConverterWindow;
use super::convert::running_status;
use super::pickers::picked_paths;
use crate::conversion::{BatchReport, ConversionOutcome, FileResult};
use crate::core::{AppSettings, SelectionMode};
use crate::test_fixtures::ui_file;

fn window_with(dir: &TempDir, names: &[&str]) -> ConverterWindow {
    let mut window = ConverterWindow::new_detached();
    let paths = names.iter().map(|n| ui_file(dir.path(), n)).collect();
    window.files_picked(paths);
    window
}

fn type_text(window: &mut ConverterWindow, text: &str) {
    for c in text.chars() {
        let s = c.to_string();
        window.handle_key(&s, Some(&s), false);
    }
}

#[test]
fn test_initial_state() {
    let window = ConverterWindow::new_detached();
    assert_eq!(window.status, "Select a .ui file or drop files here");
    assert!(!window.is_converting());
    assert_eq!(window.name_field.text(), "");
    assert_eq!(window.output_summary(), "");
}

#[test]
fn test_cancelled_picker_keeps_selection() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["main.ui"]);

    window.files_picked(Vec::new());

    assert_eq!(window.status, "No file selected");
    assert_eq!(window.controller.selection().len(), 1);
}

#[test]
fn test_picker_error_is_not_a_cancel() {
    let failed: Result<Result<Option<Vec<PathBuf>>, String>, ()> = Ok(Err("no portal".to_string()));
    assert_eq!(picked_paths(failed), Err("no portal".to_string()));

    let cancelled: Result<Result<Option<Vec<PathBuf>>, String>, ()> = Ok(Ok(None));
    assert_eq!(picked_paths(cancelled), Ok(Vec::new()));

    let chosen: Result<Result<Option<Vec<PathBuf>>, String>, ()> =
        Ok(Ok(Some(vec![PathBuf::from("/tmp/a.ui")])));
    assert_eq!(picked_paths(chosen), Ok(vec![PathBuf::from("/tmp/a.ui")]));

    let mut window = ConverterWindow::new_detached();
    window.picker_failed("no portal");
    assert_eq!(window.status, "Could not open the file dialog: no portal");
}

#[test]
fn test_cancelled_folder_picker() {
    let mut window = ConverterWindow::new_detached();
    window.folder_picked(None);
    assert_eq!(window.status, "No folder selected");
}

#[test]
fn test_single_file_shows_default_name() {
    let dir = TempDir::new().unwrap();
    let window = window_with(&dir, &["dialog.ui"]);

    assert_eq!(window.status, "Selected file");
    assert_eq!(window.controller.mode(), SelectionMode::SingleFile);
    assert_eq!(window.name_field.text(), "dialog");
    assert!(window.output_summary().ends_with("dialog.py"));
}

#[test]
fn test_multi_file_shows_pattern() {
    let dir = TempDir::new().unwrap();
    let window = window_with(&dir, &["a.ui", "b.ui", "c.ui"]);

    assert_eq!(window.status, "Selected 3 files");
    assert_eq!(window.name_field.text(), "ui_<name>");
    assert!(window.output_summary().starts_with("3 files"));
}

#[test]
fn test_wrong_extension_raises_notice() {
    let dir = TempDir::new().unwrap();
    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, "x").unwrap();
    let mut window = ConverterWindow::new_detached();

    window.files_picked(vec![txt]);

    let (title, _message) = window.pending_error_message.clone().unwrap();
    assert_eq!(title, "Invalid Selection");
    assert!(window.controller.selection().is_empty());
}

#[test]
fn test_drop_without_ui_files() {
    let dir = TempDir::new().unwrap();
    let png = dir.path().join("icon.png");
    std::fs::write(&png, "x").unwrap();
    let mut window = ConverterWindow::new_detached();

    window.files_dropped(&[png]);

    assert!(window.pending_error_message.is_some());
    assert!(window.controller.selection().is_empty());
}

#[test]
fn test_drop_keeps_only_ui_files() {
    let dir = TempDir::new().unwrap();
    let ui = ui_file(dir.path(), "form.ui");
    let txt = dir.path().join("readme.txt");
    std::fs::write(&txt, "x").unwrap();
    let mut window = ConverterWindow::new_detached();

    window.files_dropped(&[txt, ui]);

    assert_eq!(window.status, "Selected file");
    assert_eq!(window.name_field.text(), "form");
}

#[test]
fn test_edit_name_and_commit_with_enter() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["main.ui"]);

    window.begin_name_edit();
    for _ in 0.."main".len() {
        window.handle_key("backspace", None, false);
    }
    type_text(&mut window, "window.py");
    assert!(window.handle_key("enter", None, false));

    assert!(!window.name_field.is_editing());
    assert_eq!(window.status, "Output file: window.py");
    assert_eq!(window.name_field.text(), "window");
    assert_eq!(window.controller.selection().name_override(), Some("window.py"));
}

#[test]
fn test_escape_discards_edit() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["main.ui"]);

    window.begin_name_edit();
    type_text(&mut window, "xyz");
    assert!(window.handle_key("escape", None, false));

    assert_eq!(window.name_field.text(), "main");
    assert_eq!(window.controller.selection().name_override(), None);
}

#[test]
fn test_name_not_editable_in_multi_mode() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["a.ui", "b.ui"]);

    window.begin_name_edit();

    assert!(!window.name_field.is_editing());
}

#[test]
fn test_delete_key_removes_selected_rows() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["a.ui", "b.ui", "c.ui"]);

    window.select_row(0, false);
    window.select_row(2, true);
    assert!(window.handle_key("delete", None, false));

    assert_eq!(window.status, "Removed 2 file(s)");
    assert_eq!(window.controller.mode(), SelectionMode::SingleFile);
    assert_eq!(window.name_field.text(), "b");
    assert!(window.selected_rows.is_empty());
}

#[test]
fn test_delete_key_ignored_in_single_mode() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["a.ui"]);

    window.select_row(0, false);
    window.handle_key("delete", None, false);

    assert_eq!(window.controller.selection().len(), 1);
}

#[test]
fn test_context_menu_remove() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["a.ui", "b.ui"]);

    window.open_context_menu(1);
    assert_eq!(window.context_menu_row, Some(1));
    assert!(window.selected_rows.contains(&1));

    window.remove_row(1);

    assert_eq!(window.context_menu_row, None);
    assert_eq!(window.controller.selection().len(), 1);
    assert_eq!(window.name_field.text(), "a");
}

#[test]
fn test_escape_closes_context_menu() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["a.ui", "b.ui"]);

    window.open_context_menu(0);
    assert!(window.handle_key("escape", None, false));
    assert_eq!(window.context_menu_row, None);
}

#[test]
fn test_removing_last_file_resets() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["a.ui"]);

    window.remove_row(0);

    assert_eq!(window.status, "No file selected");
    assert_eq!(window.controller.mode(), SelectionMode::Empty);
    assert_eq!(window.name_field.text(), "");
}

#[test]
fn test_rejected_output_name_restores_field() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["main.ui"]);

    window.begin_name_edit();
    for _ in 0.."main".len() {
        window.handle_key("backspace", None, false);
    }
    type_text(&mut window, "..");
    window.handle_key("enter", None, false);

    let (title, message) = window.pending_error_message.clone().unwrap();
    assert_eq!(title, "Invalid Selection");
    assert_eq!(message, "Invalid output name: '..'");
    assert_eq!(window.name_field.text(), "main");
    assert_eq!(window.controller.selection().name_override(), None);
}

#[test]
fn test_running_status_mentions_failures() {
    assert_eq!(running_status(0, 0, 3, "a.ui"), "Converting 1/3: a.ui");
    assert_eq!(running_status(2, 1, 3, "c.ui"), "Converting 3/3: c.ui (1 failed)");
}

#[test]
fn test_convert_without_files() {
    let mut window = ConverterWindow::new_detached();

    assert!(!window.begin_conversion(&AppSettings::default()));

    assert_eq!(window.status, "Please select a valid .ui file first");
    let (title, _) = window.pending_error_message.clone().unwrap();
    assert_eq!(title, "Invalid Selection");
}

#[test]
fn test_convert_with_missing_compiler() {
    let dir = TempDir::new().unwrap();
    let mut window = window_with(&dir, &["main.ui"]);
    let settings = AppSettings {
        uic_command: "definitely-not-a-real-uic-binary".to_string(),
        ..AppSettings::default()
    };

    assert!(!window.begin_conversion(&settings));

    assert!(!window.is_converting());
    let (title, _) = window.pending_error_message.clone().unwrap();
    assert_eq!(title, "Compiler Not Found");
}

#[test]
fn test_finish_single_file_failure() {
    let mut window = ConverterWindow::new_detached();
    let report = BatchReport {
        results: vec![FileResult {
            input_path: PathBuf::from("/tmp/main.ui"),
            output_path: PathBuf::from("/tmp/main.py"),
            outcome: ConversionOutcome::Failure("bad widget".to_string()),
        }],
    };

    window.finish_conversion(report);

    assert_eq!(window.status, "Conversion failed: bad widget");
    assert_eq!(window.errors, vec!["main.ui: bad widget".to_string()]);
    assert!(window.pending_error_message.is_none());
}

#[test]
fn test_finish_batch_with_errors() {
    let mut window = ConverterWindow::new_detached();
    let report = BatchReport {
        results: vec![
            FileResult {
                input_path: PathBuf::from("/tmp/a.ui"),
                output_path: PathBuf::from("/tmp/ui_a.py"),
                outcome: ConversionOutcome::Success,
            },
            FileResult {
                input_path: PathBuf::from("/tmp/b.ui"),
                output_path: PathBuf::from("/tmp/ui_b.py"),
                outcome: ConversionOutcome::Failure("oops".to_string()),
            },
        ],
    };

    window.finish_conversion(report);

    assert_eq!(window.status, "1 error(s) occurred");
    assert_eq!(window.errors, vec!["b.ui: oops".to_string()]);
    let (title, message) = window.pending_error_message.clone().unwrap();
    assert_eq!(title, "1 of 2 files failed");
    assert_eq!(message, "b.ui: oops");
}

#[cfg(unix)]
mod worker {
    use super::*;

    /// Inputs are shell scripts; `/bin/sh <input> -o <output>` runs them
    fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn wait_for_worker(window: &mut ConverterWindow) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while window.poll_worker() {
            assert!(Instant::now() < deadline, "worker did not finish");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_batch_runs_on_worker() {
        let dir = TempDir::new().unwrap();
        let ok = script(&dir, "ok.ui", "printf 'x' > \"$2\"\n");
        let bad = script(&dir, "bad.ui", "echo 'parse error' >&2\nexit 1\n");
        let mut window = ConverterWindow::new_detached();
        window.files_picked(vec![ok, bad]);
        let settings = AppSettings {
            uic_command: "/bin/sh".to_string(),
            ..AppSettings::default()
        };

        assert!(window.begin_conversion(&settings));
        assert!(window.is_converting());
        assert_eq!(window.status, "Starting conversion process...");

        wait_for_worker(&mut window);

        assert!(!window.is_converting());
        assert_eq!(window.status, "1 error(s) occurred");
        assert_eq!(window.errors, vec!["bad.ui: parse error".to_string()]);
        assert!(dir.path().join("ui_ok.py").exists());
    }

    #[test]
    fn test_single_file_uses_override() {
        let dir = TempDir::new().unwrap();
        let input = script(&dir, "main.ui", "printf 'x' > \"$2\"\n");
        let mut window = ConverterWindow::new_detached();
        window.files_picked(vec![input]);
        window.begin_name_edit();
        for _ in 0.."main".len() {
            window.handle_key("backspace", None, false);
        }
        type_text(&mut window, "form");
        let settings = AppSettings {
            uic_command: "/bin/sh".to_string(),
            ..AppSettings::default()
        };

        // Starting the conversion commits the pending edit
        assert!(window.begin_conversion(&settings));
        wait_for_worker(&mut window);

        assert_eq!(window.status, "Conversion completed");
        assert!(window.errors.is_empty());
        assert!(dir.path().join("form.py").exists());
    }
}
