//! `check-training-result` — compare predicted classes against the labels CSV.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use labelcheck_recon::config::{LabelConfig, ReconcileConfig};

use crate::exit_codes::EXIT_DIFFERENCES;
use crate::report::write_recon_report;
use crate::{print_json, CliError};

#[derive(Args, Debug, Default)]
pub struct ReconcileArgs {
    /// Training log with `檔案:<name>,預測類別:<class>` entries [default: training_result.txt]
    pub predictions: Option<PathBuf>,

    /// Ground-truth CSV, `name,class` per line, no header [default: labels.csv]
    pub labels: Option<PathBuf>,

    /// TOML config with [reconcile] paths and markers
    #[arg(long, env = "LABELCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Substring that precedes the file name in the log
    #[arg(long)]
    pub file_marker: Option<String>,

    /// Substring that precedes the predicted class in the log
    #[arg(long)]
    pub class_marker: Option<String>,

    /// Output JSON to stdout instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Exit 1 when any file is mismatched or present on one side only
    #[arg(long)]
    pub strict_exit: bool,
}

/// Base config (file or defaults) with command-line overrides applied.
pub fn resolve_config(args: &ReconcileArgs) -> Result<ReconcileConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?.reconcile,
        None => ReconcileConfig::default(),
    };
    if let Some(ref p) = args.predictions {
        config.predictions = p.clone();
    }
    if let Some(ref p) = args.labels {
        config.labels = p.clone();
    }
    if let Some(ref m) = args.file_marker {
        config.file_marker = m.clone();
    }
    if let Some(ref m) = args.class_marker {
        config.class_marker = m.clone();
    }
    Ok(config)
}

pub(crate) fn load_config(path: &Path) -> Result<LabelConfig, CliError> {
    LabelConfig::load(path).map_err(|e| {
        let err = CliError::label(e);
        if err.hint.is_none() {
            err.with_hint(format!("fix {} or drop --config", path.display()))
        } else {
            err
        }
    })
}

pub fn cmd_reconcile(args: ReconcileArgs) -> Result<(), CliError> {
    let config = resolve_config(&args)?;
    log::debug!(
        "reconciling {} against {}",
        config.predictions.display(),
        config.labels.display()
    );

    let report = labelcheck_recon::run(&config)?;

    if args.json {
        print_json(&report)?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_recon_report(&mut handle, &report)
            .and_then(|()| handle.flush())
            .map_err(|e| CliError::io(e.to_string()))?;
    }

    if args.strict_exit && report.has_differences() {
        return Err(CliError {
            code: EXIT_DIFFERENCES,
            message: format!(
                "{} mismatch(es), {} file(s) on one side only",
                report.mismatches.len(),
                report.only_in_predictions.len() + report.only_in_ground_truth.len(),
            ),
            hint: None,
        });
    }

    Ok(())
}
