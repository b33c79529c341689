//! Labels CSV parser: `file_name,class[,ignored...]`, no header row, no quoting.

use std::io::Read;
use std::path::Path;

use crate::error::{InputKind, LabelError};
use crate::model::GroundTruth;

/// Stream the labels CSV at `path`.
pub fn parse_ground_truth(path: &Path) -> Result<GroundTruth, LabelError> {
    let file = std::fs::File::open(path).map_err(|e| LabelError::io(path, e))?;
    let truth = parse_ground_truth_reader(file, &path.display().to_string())?;
    log::debug!("{}: {} ground-truth label(s)", path.display(), truth.len());
    Ok(truth)
}

/// `source` names the input in error messages.
pub fn parse_ground_truth_reader<R: Read>(rdr: R, source: &str) -> Result<GroundTruth, LabelError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut truth = GroundTruth::new();

    for record in reader.records() {
        let record = record.map_err(|e| match e.kind() {
            csv::ErrorKind::Utf8 { pos, .. } => LabelError::Encoding {
                path: source.to_string(),
                line: pos.as_ref().map(|p| p.line() as usize).unwrap_or(0),
            },
            _ => LabelError::Csv {
                path: source.to_string(),
                message: e.to_string(),
            },
        })?;
        let line_no = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let (Some(name), Some(raw_class)) = (record.get(0), record.get(1)) else {
            log::debug!("{source}, line {line_no}: fewer than two fields, skipped");
            continue;
        };
        let class = raw_class.parse::<i64>().map_err(|_| LabelError::ClassParse {
            input: InputKind::Labels,
            source: source.to_string(),
            line: line_no,
            value: raw_class.to_string(),
        })?;

        if let Some(previous) = truth.insert(name.to_string(), class) {
            log::warn!(
                "{source}, line {line_no}: '{name}' labelled again ({previous} -> {class}), keeping the later value"
            );
        }
    }

    Ok(truth)
}
