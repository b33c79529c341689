// check-training-result - compare a training log's predicted classes
// against a ground-truth labels CSV.

use std::process::ExitCode;

use clap::Parser;
use labelcheck_cli::reconcile::{cmd_reconcile, ReconcileArgs};

#[derive(Parser)]
#[command(name = "check-training-result")]
#[command(about = "Compare predicted classes in a training log against ground-truth labels")]
#[command(long_version = labelcheck_cli::LONG_VERSION)]
#[command(version)]
#[command(after_help = "\
Examples:
  check-training-result
  check-training-result runs/42/training_result.txt runs/42/labels.csv
  check-training-result --class-marker 'predicted class:' --file-marker 'file:'
  check-training-result --json | jq .accuracy
  check-training-result --strict-exit && echo clean")]
struct Cli {
    #[command(flatten)]
    args: ReconcileArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    labelcheck_cli::init_logging();
    labelcheck_cli::finish(cmd_reconcile(cli.args))
}
