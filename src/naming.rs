//! Output path derivation for rotated images.
//!
//! The client writes the rotated image next to the original, never over it.
//! The derived name depends on whether the original filename carries an
//! extension that matches the image's encoding format:
//!
//! - `photo.jpg` + `jpg` → `photo_rotated.jpg`
//! - `photo` + `jpg` → `photo_rotated`
//! - `photo.png` + `jpg` → `photo.png_rotated`
//!
//! Extension extraction looks only at the final path component, so dots in
//! directory names never interfere.

use std::path::{Path, PathBuf};

/// Suffix appended to derived output filenames.
const SUFFIX: &str = "_rotated";

/// Derive a sibling output path for a rotated copy of `original`.
///
/// `format` is the extension token of the image's encoding (e.g. `"jpg"`).
/// When the filename's extension matches `format` (ASCII case-insensitive),
/// the suffix is spliced between stem and extension. Otherwise — no dot in
/// the filename, a trailing dot, or a mismatched extension — the suffix is
/// appended to the full path string as-is.
///
/// A trailing dot yields an empty extension, not a matching one:
/// `image.` + `jpg` → `image._rotated`. The existing fixture suite encodes
/// this as expected behavior, so it is load-bearing; do not "fix" it without
/// migrating the fixtures.
///
/// Callers must not pass a path without a filename component or an empty
/// `format`.
pub fn new_output_name(original: &Path, format: &str) -> PathBuf {
    let file_name = original
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let dot_idx = file_name.rfind('.');
    let extension = match dot_idx {
        // Trailing dot: the extension is the empty string.
        Some(idx) if idx == file_name.len() - 1 => "",
        Some(idx) => &file_name[idx + 1..],
        None => "",
    };

    let Some(dot_idx) = dot_idx.filter(|_| extension.eq_ignore_ascii_case(format)) else {
        // No recognized matching extension: suffix the whole path string.
        let mut path = original.as_os_str().to_os_string();
        path.push(SUFFIX);
        return PathBuf::from(path);
    };

    let stem = &file_name[..dot_idx];
    original.with_file_name(format!("{stem}{SUFFIX}.{format}"))
}
