//! Engine asset folder scanning.
//!
//! Layout, one folder per engine:
//!
//! ```text
//! <root>/
//!   k20a/
//!     meta.json          {"name": "K20A", "idle": 850, "redline": 8600}
//!     torque_curve.csv   RPM,Torque rows
//! ```
//!
//! The folder name is the engine identifier. `meta.json` is required;
//! every field in it is optional. The torque curve is optional and is only
//! read when the engine is resolved.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::curve::CurveSource;
use crate::error::{Result, TunerError};

use super::{EngineDescriptor, EngineProfile, EngineProvider, DEFAULT_IDLE_RPM, DEFAULT_REDLINE};

/// Metadata file name inside an engine folder.
pub const META_FILE: &str = "meta.json";

/// Torque curve file name inside an engine folder.
pub const CURVE_FILE: &str = "torque_curve.csv";

#[derive(Debug, Default, Deserialize)]
struct EngineMeta {
    name: Option<String>,
    display: Option<String>,
    idle: Option<u32>,
    redline: Option<u32>,
}

/// Engines discovered in an asset folder.
#[derive(Debug, Clone, Default)]
pub struct DirectoryProvider {
    root: PathBuf,
    engines: BTreeMap<String, EngineDescriptor>,
}

impl DirectoryProvider {
    /// Scan `root` for engine folders.
    ///
    /// A missing root gives an empty provider. Folders without a metadata
    /// file are skipped; folders with unreadable metadata are skipped with a
    /// warning.
    pub fn scan(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut engines = BTreeMap::new();

        if !root.is_dir() {
            debug!(root = %root.display(), "engine asset folder not found");
            return Ok(Self { root, engines });
        }

        let entries = std::fs::read_dir(&root).map_err(|e| TunerError::file_read(&root, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| TunerError::file_read(&root, e))?;
            let path = entry.path();
            if !path.is_dir() || !path.join(META_FILE).is_file() {
                continue;
            }

            match read_descriptor(&path) {
                Ok(desc) => {
                    debug!(key = %desc.key, "found engine");
                    engines.insert(desc.key.clone(), desc);
                }
                Err(err) => warn!(folder = %path.display(), error = %err, "skipping engine folder"),
            }
        }

        Ok(Self { root, engines })
    }

    /// Folder this provider was scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Descriptor for the given identifier.
    pub fn descriptor(&self, id: &str) -> Option<&EngineDescriptor> {
        self.engines.get(id)
    }
}

impl EngineProvider for DirectoryProvider {
    fn list(&self) -> Vec<String> {
        self.engines.keys().cloned().collect()
    }

    fn resolve(&self, id: &str) -> Option<EngineProfile> {
        self.engines.get(id).map(EngineDescriptor::to_profile)
    }

    fn display_name(&self, id: &str) -> Option<String> {
        self.engines.get(id).map(|d| d.display.clone())
    }
}

/// Read one engine folder into a descriptor.
pub fn read_descriptor(folder: &Path) -> Result<EngineDescriptor> {
    let key = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let meta_path = folder.join(META_FILE);
    let text = std::fs::read_to_string(&meta_path).map_err(|e| TunerError::file_read(&meta_path, e))?;
    let meta: EngineMeta = serde_json::from_str(&text).map_err(|e| TunerError::MetaParse {
        path: meta_path.display().to_string(),
        source: e,
    })?;

    let curve_path = folder.join(CURVE_FILE);
    let curve_source = if curve_path.is_file() {
        CurveSource::Path(curve_path)
    } else {
        CurveSource::None
    };

    let display = meta.display.or(meta.name).unwrap_or_else(|| key.clone());

    Ok(EngineDescriptor::new(key)
        .with_display(display)
        .with_limits(
            meta.redline.unwrap_or(DEFAULT_REDLINE),
            meta.idle.unwrap_or(DEFAULT_IDLE_RPM),
        )
        .with_curve(curve_source))
}

/// Turn a display name into an engine identifier.
///
/// Lower-cases and collapses every run of non-alphanumeric characters into
/// a single `-`, trimming dashes from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}
