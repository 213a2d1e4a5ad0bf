/// Print the outline of a Python file or directory as JSON
///
/// Usage: cargo run --example outline -- [path]
///
/// Defaults to the bundled `tests/fixtures/llm_client.py`.
use std::path::PathBuf;
use stractor_python::{PythonParser, SourceParser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/llm_client.py"));

    let parser = PythonParser::new();

    if path.is_dir() {
        let batch = parser.parse_directory(&path)?;
        for file in &batch.files {
            println!("{}", file.to_json_pretty()?);
        }
        for (failed, error) in &batch.failed_files {
            eprintln!("✗ {}: {error}", failed.display());
        }
        eprintln!(
            "Parsed {} of {} files ({} functions, {} classes) in {:?}",
            batch.files.len(),
            batch.total_files(),
            batch.total_functions(),
            batch.total_entities(),
            batch.total_parse_time
        );
    } else {
        let file = parser.parse_file(&path)?;
        println!("{}", file.to_json_pretty()?);
    }

    Ok(())
}
