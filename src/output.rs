// src/output.rs
// =============================================================================
// Writes the final URL list.
//
// The format is as plain as it gets: one URL per line, each line ending in
// '\n', in the order given (the crawler hands us a sorted list).
//
// The destination is a file path, or "-" for standard output.
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const STDOUT_DESTINATION: &str = "-";

/// Writes `urls` to `writer`, one per line.
pub fn write_url_list<W: Write>(urls: &[String], mut writer: W) -> io::Result<()> {
    for url in urls {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()
}

/// Saves `urls` to `destination`.
///
/// The file is created (or truncated) even when the list is empty.
pub fn save_urls(urls: &[String], destination: &str) -> Result<()> {
    if destination == STDOUT_DESTINATION {
        let stdout = io::stdout();
        return write_url_list(urls, stdout.lock()).context("Failed to write URLs to stdout");
    }

    let path = Path::new(destination);
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;

    write_url_list(urls, BufWriter::new(file))
        .with_context(|| format!("Failed to write URLs to '{}'", path.display()))?;

    tracing::info!("Successfully saved {} URLs to {}", urls.len(), path.display());
    Ok(())
}

/// Saves `urls` to `destination`, and if that fails writes them to
/// `fallback` so a finished crawl is never lost.
///
/// The original save error is still returned.
pub fn save_urls_or_dump<W: Write>(urls: &[String], destination: &str, fallback: W) -> Result<()> {
    let err = match save_urls(urls, destination) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    // Nothing to fall back to when stdout itself was the destination
    if destination != STDOUT_DESTINATION {
        tracing::error!(
            "Could not save {} URLs, printing them to stdout instead",
            urls.len()
        );
        write_url_list(urls, fallback).context("Failed to write URLs to stdout")?;
    }

    Err(err)
}
