// print-chair-num - list the distinct chair numbers in a labels CSV.

use std::process::ExitCode;

use clap::Parser;
use labelcheck_cli::chairs::{cmd_chairs, ChairArgs};

#[derive(Parser)]
#[command(name = "print-chair-num")]
#[command(about = "Print the distinct chair numbers found in chair_<n>_... filenames")]
#[command(long_version = labelcheck_cli::LONG_VERSION)]
#[command(version)]
#[command(after_help = "\
Examples:
  print-chair-num
  print-chair-num runs/42/labels.csv
  print-chair-num --marker stool_
  print-chair-num --json")]
struct Cli {
    #[command(flatten)]
    args: ChairArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    labelcheck_cli::init_logging();
    labelcheck_cli::finish(cmd_chairs(cli.args))
}
