use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("modelpeek").expect("binary exists")
}

const META_JSON: &str = r#"{
  "lang": "en",
  "name": "core_web_sm",
  "version": "3.7.1",
  "description": "English pipeline optimized for CPU.",
  "pipeline": ["tok2vec", "tagger", "ner"],
  "labels": {
    "tagger": ["NN", "VB", "JJ"],
    "ner": ["ORG", "GPE", "MONEY"]
  },
  "vectors": {"width": 96, "vectors": 0, "keys": 0}
}"#;

const CONFIG_CFG: &str = r#"[nlp]
lang = "en"
pipeline = ["tok2vec","tagger","ner"]

[components.tok2vec]
factory = "tok2vec"

[components.tagger]
factory = "tagger"

[components.ner]
factory = "ner"
"#;

const STRINGS_JSON: &str = r#"["Apple", "Inc", "is", "looking"]"#;

const TOKENIZER_JSON: &str = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": {"type": "Whitespace"},
  "post_processor": null,
  "decoder": null,
  "model": {
    "type": "WordLevel",
    "vocab": {
      "[UNK]": 0, "Apple": 1, "Inc": 2, ".": 3, "is": 4, "looking": 5,
      "at": 6, "buying": 7, "a": 8, "startup": 9, "in": 10, "San": 11,
      "Francisco": 12, "for": 13, "$": 14, "1": 15, "billion": 16
    },
    "unk_token": "[UNK]"
  }
}"#;

fn install_model(temp: &TempDir, name: &str, with_tokenizer: bool) {
    let root = temp.child(name);
    root.create_dir_all().unwrap();
    root.child("meta.json").write_str(META_JSON).unwrap();
    root.child("config.cfg").write_str(CONFIG_CFG).unwrap();
    let vocab = root.child("vocab");
    vocab.create_dir_all().unwrap();
    vocab.child("strings.json").write_str(STRINGS_JSON).unwrap();
    if with_tokenizer {
        root.child("tokenizer.json").write_str(TOKENIZER_JSON).unwrap();
    }
}

#[test]
fn inspect_prints_sentinel_and_metadata() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", true);

    let mut cmd = command();
    cmd.arg("en_core_web_sm").arg("--models-dir").arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Model loaded successfully."))
        .stdout(predicate::str::contains("Name: core_web_sm"))
        .stdout(predicate::str::contains("Version: 3.7.1"))
        .stdout(predicate::str::contains("Language: en"))
        .stdout(predicate::str::contains("Pipeline: tok2vec, tagger, ner"))
        .stdout(predicate::str::contains("- tagger: tagger"));
}

#[test]
fn inspect_defaults_to_en_core_web_sm() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", true);

    let mut cmd = command();
    cmd.arg("--models-dir").arg(temp.path());

    cmd.assert().success().stdout(predicate::str::contains("Model loaded successfully."));
}

#[test]
fn labels_are_listed_with_explanations() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", true);

    let mut cmd = command();
    cmd.arg("en_core_web_sm").arg("--models-dir").arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Entity types (3):"))
        .stdout(predicate::str::contains("- ORG: Companies, agencies, institutions, etc."))
        .stdout(predicate::str::contains("Tag set (3):"))
        .stdout(predicate::str::contains("- NN: noun, singular or mass"))
        .stdout(predicate::str::contains("Entries: 4"));
}

#[test]
fn sample_run_tokenizes_fixed_sentence() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", true);

    let mut cmd = command();
    cmd.arg("en_core_web_sm").arg("--models-dir").arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Input: Apple Inc. is looking at buying a startup in San Francisco for $1 billion.",
        ))
        .stdout(predicate::str::contains("Tokens (17):"))
        .stdout(predicate::str::contains("San | Francisco"))
        .stdout(predicate::str::contains("Declared stages: tok2vec, tagger (3 labels), ner (3 labels)"));
}

#[test]
fn missing_tokenizer_is_noted_inline() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", false);

    let mut cmd = command();
    cmd.arg("en_core_web_sm").arg("--models-dir").arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tokenizer.json not present"))
        .stdout(predicate::str::contains("Model loaded successfully."));
}

#[test]
fn verbose_adds_filesystem_sections() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", true);

    let mut plain = command();
    plain.arg("en_core_web_sm").arg("--models-dir").arg(temp.path());
    plain.assert().success().stdout(predicate::str::contains("File tree:").not());

    let mut verbose = command();
    verbose.arg("en_core_web_sm").arg("--verbose").arg("--models-dir").arg(temp.path());
    verbose
        .assert()
        .success()
        .stdout(predicate::str::contains("File tree:"))
        .stdout(predicate::str::contains("meta.json (first 5 entries):"))
        .stdout(predicate::str::contains("config.cfg (first 10 lines):"))
        .stdout(predicate::str::contains("Storage:"))
        .stdout(predicate::str::contains("Total size:"));
}

#[test]
fn verbose_output_is_superset_of_plain() {
    let temp = TempDir::new().unwrap();
    install_model(&temp, "en_core_web_sm", true);

    let mut plain = command();
    plain.arg("en_core_web_sm").arg("--models-dir").arg(temp.path());
    let plain_assert = plain.assert().success();
    let plain_out = String::from_utf8_lossy(&plain_assert.get_output().stdout).to_string();

    let mut verbose = command();
    verbose.arg("en_core_web_sm").arg("--verbose").arg("--models-dir").arg(temp.path());
    let verbose_assert = verbose.assert().success();
    let verbose_out = String::from_utf8_lossy(&verbose_assert.get_output().stdout).to_string();

    for line in plain_out.lines() {
        assert!(verbose_out.contains(line), "verbose output missing line: {line:?}");
    }
}
