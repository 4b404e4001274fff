//! Handler for the `scenarios` subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itinerary_shift::{format_timestamp, parse_document, resolve_anchor};

use crate::cli::ScenariosArgs;
use crate::io::write_output;

/// List each `*.json` file in the directory with its departure time.
///
/// Unreadable or anchorless scenarios are listed with `-`.
pub fn execute(args: &ScenariosArgs) -> Result<()> {
    let files = list_json_files(&args.dir)?;
    let lines: Vec<String> = files
        .iter()
        .map(|path| {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            let departure = departure_of(path).unwrap_or_else(|| "-".to_string());
            format!("{name}\t{departure}")
        })
        .collect();
    if lines.is_empty() {
        log::warn!("no .json files in '{}'", args.dir.display());
        return Ok(());
    }
    write_output(None, &lines.join("\n"))
}

/// `*.json` files directly inside `dir`, sorted by name.
fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read '{}'", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read '{}'", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn departure_of(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let document = parse_document(&text).ok()?;
    resolve_anchor(&document).ok().map(|t| format_timestamp(&t))
}
