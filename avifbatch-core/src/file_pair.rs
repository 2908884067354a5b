//! Source/destination pairs handed to the batch engine.
//!
//! A pair carries one or more source paths and exactly one destination. Only
//! the first source is encoded and used for the size comparison; the others
//! are kept so that pairs read from a manifest round-trip unchanged.

use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One unit of work: encode `sources[0]` into `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePair {
    #[serde(rename = "src")]
    sources: Vec<PathBuf>,
    dest: PathBuf,
}

impl FilePair {
    /// Creates a pair from a single source.
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            sources: vec![source.into()],
            dest: dest.into(),
        }
    }

    /// Creates a pair from a list of sources. The list must not be empty.
    pub fn with_sources(sources: Vec<PathBuf>, dest: impl Into<PathBuf>) -> CoreResult<Self> {
        let dest = dest.into();
        if sources.is_empty() {
            return Err(CoreError::PathError(format!(
                "No source files given for destination '{}'",
                dest.display()
            )));
        }
        Ok(Self { sources, dest })
    }

    /// The source that gets encoded and measured.
    #[must_use]
    pub fn primary_source(&self) -> &Path {
        // with_sources and the deserializer both reject an empty list
        &self.sources[0]
    }

    #[must_use]
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// The destination with its extension swapped, e.g. `a.avif` -> `a.webp`.
    #[must_use]
    pub fn reference_path(&self, extension: &str) -> PathBuf {
        self.dest.with_extension(extension.trim_start_matches('.'))
    }

    /// File name of the primary source, for log lines.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.primary_source()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.primary_source().display().to_string())
    }
}

// Manifest entries accept either `"src": "a.png"` or `"src": ["a.png", ...]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceField {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

#[derive(Deserialize)]
struct RawFilePair {
    src: SourceField,
    dest: PathBuf,
}

impl<'de> Deserialize<'de> for FilePair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFilePair::deserialize(deserializer)?;
        let sources = match raw.src {
            SourceField::One(path) => vec![path],
            SourceField::Many(paths) => paths,
        };
        FilePair::with_sources(sources, raw.dest).map_err(serde::de::Error::custom)
    }
}

/// Fails if two pairs write to the same destination.
///
/// The second encode would overwrite the first output while both sizes were
/// still counted as kept.
pub fn ensure_unique_destinations(pairs: &[FilePair]) -> CoreResult<()> {
    let mut seen: HashMap<&Path, &Path> = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        if let Some(first) = seen.insert(pair.dest(), pair.primary_source()) {
            return Err(CoreError::PathError(format!(
                "'{}' and '{}' both map to '{}'",
                first.display(),
                pair.primary_source().display(),
                pair.dest().display()
            )));
        }
    }
    Ok(())
}

/// Reads a JSON manifest: an array of `{"src": ..., "dest": ...}` objects.
///
/// Relative paths are resolved against the manifest's own directory.
pub fn load_manifest(path: &Path) -> CoreResult<Vec<FilePair>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to read manifest '{}': {}",
            path.display(),
            e
        ))
    })?;
    let pairs: Vec<FilePair> = serde_json::from_str(&contents)?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let resolved = pairs
        .into_iter()
        .map(|pair| FilePair {
            sources: pair.sources.iter().map(|src| base.join(src)).collect(),
            dest: base.join(&pair.dest),
        })
        .collect::<Vec<_>>();
    ensure_unique_destinations(&resolved)?;

    log::debug!(
        "Loaded {} file pair(s) from manifest {}",
        resolved.len(),
        path.display()
    );
    Ok(resolved)
}
