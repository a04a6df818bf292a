use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Typed view of the fields a package's `meta.json` is expected to carry.
///
/// Every field is optional on disk; missing ones default so that a sparse
/// metadata file still produces a report.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Meta {
    pub name: String,
    pub version: String,
    pub description: String,
    pub lang: String,
    pub pipeline: Vec<String>,
    pub labels: Map<String, Value>,
    pub vectors: VectorsInfo,
}

/// The `vectors` block of `meta.json`.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(default)]
pub struct VectorsInfo {
    pub width: u64,
    pub vectors: u64,
    pub keys: u64,
}

impl Meta {
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join("meta.json");
        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|source| AppError::MetaParse {
            path: path.display().to_string(),
            source,
        })
    }
}
