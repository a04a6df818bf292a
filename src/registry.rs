use std::fs;
use std::path::{Path, PathBuf};

use dirs_next as dirs;

use crate::error::AppError;
use crate::meta::Meta;

/// An installed package discovered in the model home.
#[derive(Debug, Clone)]
pub struct InstalledModel {
    pub name: String,
    pub version: String,
    pub path: PathBuf,
}

/// Directory holding installed packages.
///
/// An explicit `--models-dir` wins; otherwise the platform data directory
/// is used.
pub fn model_home(override_dir: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let data_root = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(dirs::data_dir)
        .ok_or(AppError::NoDataDir)?;
    Ok(data_root.join("modelpeek").join("models"))
}

/// Enumerate installed packages, sorted by name.
///
/// A subdirectory counts as a package only if it carries a readable
/// `meta.json`. A missing model home means nothing is installed.
pub fn list_models(home: &Path, verbose: bool) -> Vec<InstalledModel> {
    let mut models = Vec::new();
    let entries = match fs::read_dir(home) {
        Ok(entries) => entries,
        Err(_) => return models,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() || !path.join("meta.json").is_file() {
            continue;
        }
        match Meta::load(&path) {
            Ok(meta) => {
                let name = entry.file_name().to_string_lossy().into_owned();
                models.push(InstalledModel { name, version: meta.version, path });
            }
            Err(err) => {
                if verbose {
                    eprintln!("Skipping {}: {}", path.display(), err);
                }
            }
        }
    }

    models.sort_by(|a, b| a.name.cmp(&b.name));
    models
}

pub fn resolve(home: &Path, name: &str) -> Result<PathBuf, AppError> {
    let path = home.join(name);
    if path.join("meta.json").is_file() {
        Ok(path)
    } else {
        Err(AppError::ModelNotFound { name: name.to_string(), home: home.to_path_buf() })
    }
}
