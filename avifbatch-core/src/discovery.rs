//! File discovery module for finding images to convert.
//!
//! This module turns an input path into an ordered list of [`FilePair`]s. A
//! single file maps straight to `<output_dir>/<stem>.avif`; a directory is
//! scanned (top level only, or the whole tree when `recursive` is set) for
//! supported image extensions, and each hit keeps its relative location
//! under the output directory.

use crate::error::{CoreError, CoreResult};
use crate::file_pair::{FilePair, ensure_unique_destinations};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Image extensions the encoder is expected to read (case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

/// Extension given to every destination.
pub const OUTPUT_EXTENSION: &str = "avif";

/// Checks if the given path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Finds images eligible for conversion in the specified directory.
///
/// Results are sorted so that batches run in a stable order.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths to the discovered images
/// * `Err(CoreError::NoFilesFound)` - If no supported images are found
/// * `Err(CoreError::PathError)` - If the directory cannot be read
///
/// # Examples
///
/// ```rust,no_run
/// use avifbatch_core::find_processable_images;
/// use std::path::Path;
///
/// match find_processable_images(Path::new("/path/to/images"), false) {
///     Ok(files) => println!("Found {} images", files.len()),
///     Err(e) => println!("Error finding images: {}", e),
/// }
/// ```
pub fn find_processable_images(input_dir: &Path, recursive: bool) -> CoreResult<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(max_depth) {
        let entry = entry.map_err(|e| {
            CoreError::PathError(format!(
                "Failed to scan '{}': {}",
                input_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && is_supported_image(path) {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }
    files.sort();
    log::debug!("Discovered {} image(s) in {}", files.len(), input_dir.display());
    Ok(files)
}

/// Destination for `source`, keeping its position relative to `input_root`.
pub fn destination_for(source: &Path, input_root: &Path, output_dir: &Path) -> CoreResult<PathBuf> {
    let relative = source.strip_prefix(input_root).map_err(|_| {
        CoreError::PathError(format!(
            "'{}' is not inside '{}'",
            source.display(),
            input_root.display()
        ))
    })?;
    Ok(output_dir.join(relative).with_extension(OUTPUT_EXTENSION))
}

/// Builds the file pairs for an input path (file or directory).
///
/// # Errors
///
/// * `CoreError::PathError` - If two sources share a stem in the same
///   directory and would overwrite each other's output
pub fn discover_file_pairs(
    input_path: &Path,
    output_dir: &Path,
    recursive: bool,
) -> CoreResult<Vec<FilePair>> {
    if input_path.is_file() {
        if !is_supported_image(input_path) {
            return Err(CoreError::PathError(format!(
                "Input file '{}' is not a supported image ({})",
                input_path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            )));
        }
        let file_name = input_path.file_name().ok_or_else(|| {
            CoreError::PathError(format!(
                "Failed to get filename for {}",
                input_path.display()
            ))
        })?;
        let dest = output_dir.join(file_name).with_extension(OUTPUT_EXTENSION);
        return Ok(vec![FilePair::new(input_path, dest)]);
    }

    if !input_path.is_dir() {
        return Err(CoreError::PathError(format!(
            "Input path '{}' is neither a file nor a directory",
            input_path.display()
        )));
    }

    let pairs = find_processable_images(input_path, recursive)?
        .into_iter()
        .map(|source| {
            let dest = destination_for(&source, input_path, output_dir)?;
            Ok(FilePair::new(source, dest))
        })
        .collect::<CoreResult<Vec<_>>>()?;

    // logo.png and logo.jpg would both become logo.avif
    ensure_unique_destinations(&pairs)?;
    Ok(pairs)
}
