//! Chair-number extraction from `chair_<n>_<view>.<ext>` filenames.

use std::collections::BTreeSet;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LabelError;
use crate::model::ChairReport;

/// Stream `path` line by line and collect the distinct identifier tokens.
pub fn extract_identifiers(path: &Path, marker: &str) -> Result<ChairReport, LabelError> {
    let file = std::fs::File::open(path).map_err(|e| LabelError::io(path, e))?;
    let lines = BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map_err(|e| LabelError::read(path, idx + 1, e)));
    let report = collect_identifiers(lines, marker)?;
    log::debug!("{}: {} distinct identifier(s)", path.display(), report.total);
    Ok(report)
}

/// The token is the second `_`-separated segment of the whole line, not of
/// the text after the marker, so `x_chair_3` yields `chair`.
pub fn extract_identifiers_from<I, S>(lines: I, marker: &str) -> Result<ChairReport, LabelError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    collect_identifiers(lines.into_iter().map(Ok), marker)
}

fn collect_identifiers<I, S>(lines: I, marker: &str) -> Result<ChairReport, LabelError>
where
    I: IntoIterator<Item = Result<S, LabelError>>,
    S: AsRef<str>,
{
    let mut tokens: BTreeSet<String> = BTreeSet::new();

    for line in lines {
        let line = line?;
        let line: &str = line.as_ref();
        if line.trim().is_empty() || !line.contains(marker) {
            continue;
        }
        if let Some(token) = line.split('_').nth(1) {
            tokens.insert(token.to_string());
        }
    }

    let mut keyed = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value = token
            .trim()
            .parse::<i128>()
            .map_err(|_| LabelError::IdentifierParse { token: token.clone() })?;
        keyed.push((value, token));
    }
    // BTreeSet iteration already orders equal values ("7", "007") by text.
    keyed.sort_by_key(|(value, _)| *value);

    let identifiers: Vec<String> = keyed.into_iter().map(|(_, token)| token).collect();
    Ok(ChairReport {
        total: identifiers.len(),
        identifiers,
    })
}
