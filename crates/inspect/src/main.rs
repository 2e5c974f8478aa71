// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # sitexml-inspect
//!
//! Validates SiteXML site-characterization documents written as JSON and
//! prints a summary of each site, or the validated model as JSON.
//!
//! Each file is read, built into the model and reported independently. A
//! file that fails validation is reported with the JSON path of the
//! offending object and the remaining files are still processed, unless
//! `--strict` is given. The exit status is non-zero if any file failed.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod document;
mod report;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use sitexml_model::Site;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_log::AsTrace;

/// Validate SiteXML site-characterization documents
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    /// JSON documents holding a site object or an array of site objects
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the validated sites as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Stop at the first file that fails validation
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut failed: usize = 0;
    for path in &args.files {
        match inspect_file(path, args.json) {
            Ok(count) => info!(path = %path.display(), sites = count, "Document is valid"),
            Err(err) => {
                failed += 1;
                error!(path = %path.display(), "{err:#}");
                if args.strict {
                    bail!("{} failed validation", path.display());
                }
            }
        }
    }

    if failed > 0 {
        warn!(failed, total = args.files.len(), "Some documents failed validation");
        bail!("{failed} of {} documents failed validation", args.files.len());
    }
    Ok(())
}

/// Reads, validates and prints one document. Returns the number of sites.
fn inspect_file(path: &Path, as_json: bool) -> Result<usize> {
    let text: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let sites: Vec<Site> = document::parse_sites(&text)?;

    for site in &sites {
        if as_json {
            println!("{}", serde_json::to_string_pretty(site)?);
        } else {
            println!("{}", report::summarize(site));
        }
    }
    Ok(sites.len())
}
