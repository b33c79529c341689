//! `print-chair-num` — list the distinct chair numbers named in the labels CSV.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use labelcheck_recon::config::IdentifierConfig;
use labelcheck_recon::extract_identifiers;
use labelcheck_recon::LabelError;

use crate::reconcile::load_config;
use crate::report::write_chair_report;
use crate::{print_json, CliError};

#[derive(Args, Debug, Default)]
pub struct ChairArgs {
    /// CSV whose first field is a `chair_<n>_...` filename [default: labels.csv]
    pub labels: Option<PathBuf>,

    /// TOML config with [identifiers] path and marker
    #[arg(long, env = "LABELCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Substring a line must contain to be scanned
    #[arg(long)]
    pub marker: Option<String>,

    /// Output JSON to stdout instead of one identifier per line
    #[arg(long)]
    pub json: bool,
}

pub fn resolve_config(args: &ChairArgs) -> Result<IdentifierConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?.identifiers,
        None => IdentifierConfig::default(),
    };
    if let Some(ref p) = args.labels {
        config.labels = p.clone();
    }
    if let Some(ref m) = args.marker {
        if m.is_empty() {
            return Err(LabelError::ConfigValidation("--marker must not be empty".into()).into());
        }
        config.marker = m.clone();
    }
    Ok(config)
}

pub fn cmd_chairs(args: ChairArgs) -> Result<(), CliError> {
    let config = resolve_config(&args)?;
    let report = extract_identifiers(&config.labels, &config.marker)?;

    if args.json {
        return print_json(&report);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_chair_report(&mut handle, &report)
        .and_then(|()| handle.flush())
        .map_err(|e| CliError::io(e.to_string()))
}
