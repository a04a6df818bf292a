use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursive total of file sizes under `path`.
///
/// Unreadable entries are skipped; with `verbose` each skip is reported on
/// stderr.
pub fn dir_size(path: &Path, verbose: bool) -> u64 {
    let mut total = 0u64;
    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if verbose {
                    eprintln!("Skipping {:?}: {}", err.path(), err);
                }
                continue;
            }
        };

        if entry.file_type().is_file() {
            match entry.metadata() {
                Ok(metadata) => {
                    total = total.saturating_add(metadata.len());
                }
                Err(err) => {
                    if verbose {
                        eprintln!("Skipping {}: {}", entry.path().display(), err);
                    }
                }
            }
        }
    }
    total
}

/// The `n` largest files under `path`, descending by size.
pub fn largest_files(path: &Path, n: usize) -> Vec<(PathBuf, u64)> {
    let mut files = Vec::new();
    for entry in WalkDir::new(path).into_iter().flatten() {
        if entry.file_type().is_file()
            && let Ok(metadata) = entry.metadata()
        {
            files.push((entry.into_path(), metadata.len()));
        }
    }
    files.sort_by(|a, b| b.1.cmp(&a.1));
    files.truncate(n);
    files
}

/// Render a sorted, depth-limited directory tree as display lines.
pub fn render_tree(path: &Path, max_depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    tree_level(path, "", max_depth, 0, &mut lines);
    lines
}

fn tree_level(path: &Path, prefix: &str, max_depth: usize, depth: usize, lines: &mut Vec<String>) {
    if depth >= max_depth {
        return;
    }

    let mut entries: Vec<PathBuf> = match fs::read_dir(path) {
        Ok(read) => read.flatten().map(|entry| entry.path()).collect(),
        Err(err) => {
            lines.push(format!("{prefix}(unreadable: {err})"));
            return;
        }
    };
    entries.sort();

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        let name =
            entry.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        lines.push(format!("{prefix}{connector}{name}"));

        if entry.is_dir() && depth < max_depth - 1 {
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            tree_level(entry, &child_prefix, max_depth, depth + 1, lines);
        }
    }
}
