//! Handler for the `anchor` subcommand.

use anyhow::{Context, Result};
use itinerary_shift::{format_timestamp, parse_document, resolve_anchor};

use crate::cli::AnchorArgs;
use crate::io::{read_input, write_output};

/// Print the document's departure time, failing if it cannot be resolved.
pub fn execute(args: &AnchorArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let document = parse_document(&text)?;
    let anchor = resolve_anchor(&document).context("departure time not found")?;
    write_output(None, &format_timestamp(&anchor))
}
