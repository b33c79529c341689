// Human-readable report text for both tools.
// Wording and line order are part of the output contract.

use std::io::{self, Write};

use labelcheck_recon::{ChairReport, ReconReport};

pub fn write_recon_report<W: Write>(out: &mut W, report: &ReconReport) -> io::Result<()> {
    writeln!(out, "Found {} entries in the text file", report.prediction_count)?;
    writeln!(out, "Found {} entries in the CSV file", report.ground_truth_count)?;

    writeln!(out)?;
    writeln!(out, "Files in both datasets: {}", report.in_both.len())?;
    if !report.only_in_predictions.is_empty() {
        writeln!(out, "Files only in text file: {}", report.only_in_predictions.len())?;
        for name in &report.only_in_predictions {
            writeln!(out, "  - {name}")?;
        }
    }
    if !report.only_in_ground_truth.is_empty() {
        writeln!(out, "Files only in CSV file: {}", report.only_in_ground_truth.len())?;
        for name in &report.only_in_ground_truth {
            writeln!(out, "  - {name}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Results:")?;
    if report.all_match() {
        writeln!(out, "All classifications match! ✓")?;
    } else {
        writeln!(out, "Found {} mismatches:", report.mismatches.len())?;
        writeln!(out, "File Name, Predicted Class, Ground Truth Class")?;
        for m in &report.mismatches {
            writeln!(out, "{}, {}, {}", m.file_name, m.predicted, m.truth)?;
        }
    }

    let acc = &report.accuracy;
    writeln!(out)?;
    writeln!(out, "Accuracy: {:.2}% ({}/{})", acc.percent, acc.correct, acc.total)?;
    Ok(())
}

pub fn write_chair_report<W: Write>(out: &mut W, report: &ChairReport) -> io::Result<()> {
    for id in &report.identifiers {
        writeln!(out, "{id}")?;
    }
    writeln!(out, "Total number of chairs: {}", report.total)?;
    Ok(())
}
