//! Output file naming
//!
//! Derives the generated `.py` file name from a `.ui` input name. Everything
//! here is pure string/path work.

use std::path::Path;

/// Extension every input file must carry
pub const SOURCE_EXTENSION: &str = "ui";
/// Extension of the generated code
pub const OUTPUT_EXTENSION: &str = "py";
/// Prefix of the default output name
pub const OUTPUT_PREFIX: &str = "ui_";

/// Characters that cannot appear in a file name on any supported platform
pub const EXCLUDED_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Whether `c` may appear in an output name
pub fn is_valid_name_char(c: char) -> bool {
    !c.is_control() && !EXCLUDED_NAME_CHARS.contains(&c)
}

/// Whether `name` is usable as a single-file output name
///
/// The name must stay a plain file name inside the destination folder:
/// no separators or reserved characters, and not `.`/`..`.
pub fn is_valid_output_name(name: &str) -> bool {
    let trimmed = name.trim();
    let base = normalize(trimmed);
    let base = &base[..base.len() - OUTPUT_EXTENSION.len() - 1];
    !base.is_empty()
        && base != "."
        && base != ".."
        && trimmed.chars().all(is_valid_name_char)
}

/// Check if a path carries the `.ui` extension (case-insensitive)
pub fn is_ui_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SOURCE_EXTENSION))
        .unwrap_or(false)
}

/// File name without its extension
pub fn stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string())
}

/// Default output base name for an input file (`ui_<stem>`)
pub fn default_name(input_file_name: &str) -> String {
    format!("{}{}", OUTPUT_PREFIX, stem(input_file_name))
}

/// Base output name for one input file
///
/// In multi-file mode the override is ignored and every file gets
/// `ui_<stem>`. In single-file mode a non-empty override wins.
pub fn derive_name(input_file_name: &str, multi_file_mode: bool, name_override: Option<&str>) -> String {
    if !multi_file_mode {
        if let Some(name) = name_override.map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }
    }
    default_name(input_file_name)
}

/// Strip a redundant `.py` (any case) and append the canonical one
pub fn normalize(name: &str) -> String {
    let trimmed = name.trim();
    let suffix = format!(".{}", OUTPUT_EXTENSION);
    let base = match trimmed.len().checked_sub(suffix.len()) {
        Some(cut) if trimmed.is_char_boundary(cut) && trimmed[cut..].eq_ignore_ascii_case(&suffix) => {
            &trimmed[..cut]
        }
        _ => trimmed,
    };
    format!("{}{}", base, suffix)
}

/// Final output file name: `normalize(derive_name(..))`
pub fn output_file_name(input_file_name: &str, multi_file_mode: bool, name_override: Option<&str>) -> String {
    normalize(&derive_name(input_file_name, multi_file_mode, name_override))
}
