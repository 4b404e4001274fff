//! Handler for the `shift` subcommand.

use anyhow::{Context, Result};
use itinerary_shift::{
    describe_offset, format_timestamp, parse_document, rewrite_with_options, to_compact_json,
    to_pretty_json, Notice, RewriteOptions,
};
use log::info;

use crate::base;
use crate::cli::ShiftArgs;
use crate::io::{read_input, write_output};

/// Rewrite the document and write the result.
///
/// Notices go to stderr; they never fail the command.
pub fn execute(args: &ShiftArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let document = parse_document(&text)?;

    let now = base::now_in(&args.base.timezone);
    let options = RewriteOptions {
        base: Some(base::resolve(&args.base, now)),
        on_missing_anchor: args.on_missing_anchor.into(),
        now: Some(now),
    };
    let result = rewrite_with_options(&document, &options)?;
    info!(
        "departure {} moved by {}",
        format_timestamp(&result.anchor),
        describe_offset(&result.offset)
    );

    report_notices(&result.notices, args.notices_json)?;

    let rendered = if args.compact {
        to_compact_json(&result.document)?
    } else {
        to_pretty_json(&result.document)?
    };
    write_output(args.output.as_deref(), &rendered)
}

fn report_notices(notices: &[Notice], as_json: bool) -> Result<()> {
    if as_json {
        let json = serde_json::to_string(notices).context("failed to serialize notices")?;
        eprintln!("{json}");
    } else {
        for notice in notices {
            eprintln!("warning: {notice}");
        }
    }
    Ok(())
}
