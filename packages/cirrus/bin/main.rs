#![cfg(feature = "cli")]

//! The `cirrus` CLI (§6.3): reads a Snow document, parses it against the
//! Cirrus tagset, and writes the rendered HTML to a destination file.
//!
//! This binary is the collaborator the core spec pins its visitor
//! contract against - it is not itself part of the `snow`/`cirrus`
//! libraries' public surface.

use anyhow::{bail, Context};
use cirrus::{cirrus_tagset, render};
use clap::Parser;
use std::path::{Path, PathBuf};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let opts = Options::parse();

    let dst = opts.dst.clone().unwrap_or_else(|| default_dst(&opts.src));

    let source = std::fs::read_to_string(&opts.src)
        .with_context(|| format!("failed to read {}", opts.src.display()))?;

    let tagset = cirrus_tagset();
    let document = snow::loads(&tagset, &source)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to parse {}", opts.src.display()))?;

    let html = match render(&document) {
        Ok(html) => html,
        Err(e) => bail!("failed to render {}: {e}", opts.src.display()),
    };

    std::fs::write(&dst, html).with_context(|| format!("failed to write {}", dst.display()))?;

    Ok(())
}

/// `dst`'s default is `src` with its extension replaced by `.html` (§6.3).
fn default_dst(src: &Path) -> PathBuf {
    src.with_extension("html")
}

/// Translates a Snow document to the Cirrus HTML profile.
#[derive(Parser, Debug)]
struct Options {
    /// The Snow source file to render.
    src: PathBuf,
    /// Where to write the rendered HTML. Defaults to `src` with its
    /// extension replaced by `.html`.
    dst: Option<PathBuf>,
}
