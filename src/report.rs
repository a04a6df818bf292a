use std::path::Path;

use crate::explain::explain;
use crate::format::{display_path, format_bytes, group_digits};
use crate::package::ModelPackage;
use crate::registry::InstalledModel;
use crate::sample::{self, SAMPLE_TEXT};
use crate::storage;

const LABEL_PREVIEW: usize = 10;
const META_HEAD: usize = 5;
const CONFIG_HEAD: usize = 10;
const TREE_DEPTH: usize = 3;
const LARGEST_FILES: usize = 5;

pub struct ReportOptions {
    pub verbose: bool,
}

/// Print the full inspection report for a loaded package.
///
/// Verbose mode appends sections (file tree, file samples, storage); it never
/// rewrites the non-verbose ones, so its output is a strict superset.
pub fn print_report(package: &ModelPackage, options: &ReportOptions) {
    println!("Model loaded successfully.");
    print_location(package);
    print_metadata(package);
    print_components(package);
    print_vocabulary(package);
    print_labels("Entity types", &package.labels_for("ner"), None);
    print_labels("Tag set", &package.labels_for("tagger"), Some(LABEL_PREVIEW));
    print_sample(package);

    if options.verbose {
        print_tree(package);
        print_file_heads(package);
        print_storage(package, options.verbose);
    }
}

pub fn print_model_list(home: &Path, models: &[InstalledModel]) {
    if models.is_empty() {
        println!("No models found in {}.", display_path(home));
        return;
    }

    println!("Installed models in {}:", display_path(home));
    for model in models {
        println!("  {:<24} {:>8}  {}", model.name, model.version, display_path(&model.path));
    }
}

fn print_location(package: &ModelPackage) {
    println!("\nLocation:");
    println!("  {}", display_path(&package.path));
}

fn print_metadata(package: &ModelPackage) {
    let meta = &package.meta;
    println!("\nMetadata:");
    println!("  Name: {}", package.display_name());
    println!("  Version: {}", meta.version);
    if !meta.description.is_empty() {
        println!("  Description: {}", meta.description);
    }
    println!("  Language: {}", meta.lang);
    println!("  Pipeline: {}", meta.pipeline.join(", "));
}

fn print_components(package: &ModelPackage) {
    println!("\nPipeline components:");
    let factories = package.component_factories();
    if factories.is_empty() {
        println!("  (none declared)");
        return;
    }
    for (name, factory) in factories {
        println!("  - {name}: {factory}");
    }
}

fn print_vocabulary(package: &ModelPackage) {
    println!("\nVocabulary:");
    match package.vocab_size() {
        Some(size) => println!("  Entries: {}", group_digits(size as u64)),
        None => println!("  Entries: unknown (vocab/strings.json not present)"),
    }

    let vectors = package.meta.vectors;
    if vectors.vectors == 0 {
        println!("  Vectors: none");
    } else {
        println!("  Vectors: {} x {}", group_digits(vectors.vectors), vectors.width);
        if vectors.keys > 0 {
            println!("  Vector keys: {}", group_digits(vectors.keys));
        }
    }
}

fn print_labels(title: &str, labels: &[String], preview: Option<usize>) {
    println!("\n{} ({}):", title, labels.len());
    if labels.is_empty() {
        println!("  (none declared)");
        return;
    }

    let shown = preview.unwrap_or(labels.len()).min(labels.len());
    for label in &labels[..shown] {
        match explain(label) {
            Some(description) => println!("  - {label}: {description}"),
            None => println!("  - {label}"),
        }
    }
    if shown < labels.len() {
        println!("  ... and {} more", labels.len() - shown);
    }
}

fn print_sample(package: &ModelPackage) {
    println!("\nSample run:");
    println!("  Input: {SAMPLE_TEXT}");

    match package.tokenizer_path() {
        Some(path) => match sample::run_tokenizer(&path) {
            Ok(run) => {
                println!("  Tokens ({}): {}", run.tokens.len(), run.tokens.join(" | "));
            }
            Err(err) => println!("  Tokenizer failed: {err}"),
        },
        None => println!("  tokenizer.json not present; skipping tokenization"),
    }

    // The remaining components run only inside the origin runtime; report
    // what the package declares for them.
    let stages: Vec<String> = package
        .meta
        .pipeline
        .iter()
        .map(|name| {
            let labels = package.labels_for(name);
            if labels.is_empty() {
                name.clone()
            } else {
                format!("{name} ({} labels)", labels.len())
            }
        })
        .collect();
    if !stages.is_empty() {
        println!("  Declared stages: {}", stages.join(", "));
    }
}

fn print_tree(package: &ModelPackage) {
    println!("\nFile tree:");
    for line in storage::render_tree(&package.path, TREE_DEPTH) {
        println!("  {line}");
    }
}

fn print_file_heads(package: &ModelPackage) {
    println!("\nmeta.json (first {META_HEAD} entries):");
    for (key, value) in package.meta_head(META_HEAD) {
        println!("  {key}: {value}");
    }
    if package.meta_entry_count() > META_HEAD {
        println!("  ...");
    }

    if let Some((lines, truncated)) = package.config_head(CONFIG_HEAD) {
        println!("\nconfig.cfg (first {CONFIG_HEAD} lines):");
        for line in lines {
            println!("  {line}");
        }
        if truncated {
            println!("  ...");
        }
    }
}

fn print_storage(package: &ModelPackage, verbose: bool) {
    println!("\nStorage:");
    let total = storage::dir_size(&package.path, verbose);
    println!("  Total size: {}", format_bytes(total));

    let largest = storage::largest_files(&package.path, LARGEST_FILES);
    if !largest.is_empty() {
        println!("  Largest files:");
        for (path, size) in largest {
            let name =
                path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
            println!("  - {name}: {}", format_bytes(size));
        }
    }
}
