use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::meta::Meta;

const VALUE_PREVIEW: usize = 72;

/// An installed pipeline package opened for inspection.
#[derive(Debug, Clone)]
pub struct ModelPackage {
    pub path: PathBuf,
    pub meta: Meta,
    raw_meta: Map<String, Value>,
}

impl ModelPackage {
    /// Read and deserialize `meta.json`, keeping both the typed fields and
    /// the raw key-ordered map for verbatim display.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let meta_path = path.join("meta.json");
        let contents = fs::read_to_string(&meta_path)?;
        let raw: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|source| AppError::MetaParse {
                path: meta_path.display().to_string(),
                source,
            })?;
        let meta: Meta = serde_json::from_value(Value::Object(raw.clone())).map_err(|source| {
            AppError::MetaParse { path: meta_path.display().to_string(), source }
        })?;
        Ok(Self { path: path.to_path_buf(), meta, raw_meta: raw })
    }

    /// Package name as reported by the metadata, falling back to the
    /// directory name.
    pub fn display_name(&self) -> String {
        if self.meta.name.is_empty() {
            self.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
        } else {
            self.meta.name.clone()
        }
    }

    /// Number of entries in `vocab/strings.json`, if the file is present and
    /// well-formed.
    pub fn vocab_size(&self) -> Option<usize> {
        let contents = fs::read_to_string(self.path.join("vocab").join("strings.json")).ok()?;
        let strings: Vec<Value> = serde_json::from_str(&contents).ok()?;
        Some(strings.len())
    }

    /// Label set the metadata declares for a pipeline component.
    pub fn labels_for(&self, component: &str) -> Vec<String> {
        self.meta
            .labels
            .get(component)
            .and_then(Value::as_array)
            .map(|labels| labels.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Ordered `(component, factory)` pairs for the declared pipeline.
    ///
    /// Factories come from the `[components.<name>]` sections of `config.cfg`.
    /// The file is only line-scanned for section headers and the adjacent
    /// `factory` key; components without one report `unknown`.
    pub fn component_factories(&self) -> Vec<(String, String)> {
        let factories = self.scan_config_factories();
        self.meta
            .pipeline
            .iter()
            .map(|name| {
                let factory = factories
                    .iter()
                    .find(|(component, _)| component == name)
                    .map(|(_, factory)| factory.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                (name.clone(), factory)
            })
            .collect()
    }

    fn scan_config_factories(&self) -> Vec<(String, String)> {
        let Ok(contents) = fs::read_to_string(self.path.join("config.cfg")) else {
            return Vec::new();
        };

        let mut factories = Vec::new();
        let mut current: Option<String> = None;
        for line in contents.lines() {
            let line = line.trim();
            if let Some(section) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                // Only direct component sections, not their nested [components.x.model] blocks.
                current = section
                    .strip_prefix("components.")
                    .filter(|name| !name.contains('.'))
                    .map(str::to_string);
            } else if let Some(name) = &current
                && let Some(value) = line.strip_prefix("factory")
            {
                let factory = value.trim_start_matches(|c: char| c == '=' || c.is_whitespace());
                factories.push((name.clone(), factory.trim_matches('"').to_string()));
                current = None;
            }
        }
        factories
    }

    /// First `n` key/value pairs of `meta.json` in file order, values
    /// rendered for display.
    pub fn meta_head(&self, n: usize) -> Vec<(String, String)> {
        self.raw_meta.iter().take(n).map(|(key, value)| (key.clone(), render_value(value))).collect()
    }

    pub fn meta_entry_count(&self) -> usize {
        self.raw_meta.len()
    }

    /// Verbatim head of `config.cfg`, plus whether the file had more lines.
    pub fn config_head(&self, n: usize) -> Option<(Vec<String>, bool)> {
        let contents = fs::read_to_string(self.path.join("config.cfg")).ok()?;
        let lines: Vec<String> = contents.lines().map(str::to_string).collect();
        let truncated = lines.len() > n;
        Some((lines.into_iter().take(n).collect(), truncated))
    }

    pub fn tokenizer_path(&self) -> Option<PathBuf> {
        let path = self.path.join("tokenizer.json");
        path.is_file().then_some(path)
    }
}

fn render_value(value: &Value) -> String {
    let rendered = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    if rendered.chars().count() > VALUE_PREVIEW {
        let head: String = rendered.chars().take(VALUE_PREVIEW).collect();
        format!("{head}...")
    } else {
        rendered
    }
}
