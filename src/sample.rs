use std::path::Path;

use tokenizers::Tokenizer;

/// Fixed sentence used to exercise the package's bundled tokenizer.
pub const SAMPLE_TEXT: &str =
    "Apple Inc. is looking at buying a startup in San Francisco for $1 billion.";

#[derive(Debug)]
pub struct SampleRun {
    pub tokens: Vec<String>,
}

/// Run the sample sentence through the package's `tokenizer.json`.
///
/// Failures are returned as plain messages so the caller can report them
/// inline and keep printing the rest of the report.
pub fn run_tokenizer(path: &Path) -> Result<SampleRun, String> {
    let tokenizer = Tokenizer::from_file(path).map_err(|err| err.to_string())?;
    let encoding = tokenizer.encode(SAMPLE_TEXT, false).map_err(|err| err.to_string())?;
    Ok(SampleRun { tokens: encoding.get_tokens().to_vec() })
}
