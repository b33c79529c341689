//! Training-log parser.
//!
//! A meaningful line looks like `...,檔案:img_01.jpg,預測類別:2,...`: one
//! comma-separated fragment carries the file marker and the fragment right
//! after it carries the class marker.
//!
//! Only the first marker pair on a line is read. Lines holding several
//! predictions keep the first and drop the rest.

use std::path::Path;

use crate::config::Markers;
use crate::error::{InputKind, LabelError};
use crate::model::Predictions;

/// Read the whole log and parse it.
pub fn parse_predictions(path: &Path, markers: &Markers) -> Result<Predictions, LabelError> {
    let bytes = std::fs::read(path).map_err(|e| LabelError::io(path, e))?;
    let content = std::str::from_utf8(&bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        LabelError::Encoding {
            path: path.display().to_string(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;
    let predictions = parse_predictions_str(content, markers)?;
    log::debug!("{}: {} prediction(s)", path.display(), predictions.len());
    Ok(predictions)
}

pub fn parse_predictions_str(content: &str, markers: &Markers) -> Result<Predictions, LabelError> {
    let mut predictions = Predictions::new();

    for (idx, line) in content.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fragments: Vec<&str> = line.split(',').collect();

        for (i, fragment) in fragments.iter().enumerate() {
            // Text between the first marker occurrence and the next one (if any).
            let Some(name) = fragment.split(markers.file_marker.as_str()).nth(1) else {
                continue;
            };
            let file_name = name.trim().to_string();

            let companion = fragments
                .get(i + 1)
                .ok_or(LabelError::MissingCompanion { line: line_no })?;
            let raw_class = companion
                .split(markers.class_marker.as_str())
                .nth(1)
                .ok_or_else(|| LabelError::MissingClassMarker {
                    line: line_no,
                    fragment: companion.trim().to_string(),
                })?
                .trim();
            let class = raw_class.parse::<i64>().map_err(|_| LabelError::ClassParse {
                input: InputKind::PredictionLog,
                source: "prediction log".into(),
                line: line_no,
                value: raw_class.to_string(),
            })?;

            if let Some(previous) = predictions.insert(file_name.clone(), class) {
                log::warn!(
                    "line {line_no}: '{file_name}' predicted again ({previous} -> {class}), keeping the later value"
                );
            }
            break;
        }
    }

    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Predictions, LabelError> {
        parse_predictions_str(content, &Markers::default())
    }

    #[test]
    fn single_entry() {
        let p = parse("檔案:img_01.jpg,預測類別:2\n").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p["img_01.jpg"], 2);
    }

    #[test]
    fn surrounding_fragments_and_whitespace() {
        let p = parse("epoch 3, 檔案: cat 1.png , 預測類別: 7 , conf:0.9\r\n").unwrap();
        assert_eq!(p["cat 1.png"], 7);
    }

    #[test]
    fn blank_and_unmarked_lines_skipped() {
        let p = parse("\n   \nloading model...\n檔案:a.jpg,預測類別:0\n\n").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p["a.jpg"], 0);
    }

    #[test]
    fn only_first_pair_per_line() {
        let p = parse("檔案:a.jpg,預測類別:1,檔案:b.jpg,預測類別:2\n").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p["a.jpg"], 1);
        assert!(!p.contains_key("b.jpg"));
    }

    #[test]
    fn later_line_overwrites() {
        let p = parse("檔案:a.jpg,預測類別:1\n檔案:a.jpg,預測類別:4\n").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p["a.jpg"], 4);
    }

    #[test]
    fn negative_and_signed_classes() {
        let p = parse("檔案:a.jpg,預測類別:-1\n檔案:b.jpg,預測類別:+3\n").unwrap();
        assert_eq!(p["a.jpg"], -1);
        assert_eq!(p["b.jpg"], 3);
    }

    #[test]
    fn marker_on_last_fragment_fails() {
        let err = parse("ok\n檔案:a.jpg\n").unwrap_err();
        assert!(matches!(err, LabelError::MissingCompanion { line: 2 }), "{err}");
    }

    #[test]
    fn companion_without_class_marker_fails() {
        let err = parse("檔案:a.jpg,score:3\n").unwrap_err();
        match err {
            LabelError::MissingClassMarker { line, fragment } => {
                assert_eq!(line, 1);
                assert_eq!(fragment, "score:3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_class_fails() {
        let err = parse("檔案:a.jpg,預測類別:two\n").unwrap_err();
        match err {
            LabelError::ClassParse { input, line, value, .. } => {
                assert_eq!(input, InputKind::PredictionLog);
                assert_eq!(line, 1);
                assert_eq!(value, "two");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_markers() {
        let markers = Markers {
            file_marker: "file:".into(),
            class_marker: "predicted class:".into(),
        };
        let p = parse_predictions_str("file: x.png, predicted class: 5", &markers).unwrap();
        assert_eq!(p["x.png"], 5);
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training_result.txt");
        std::fs::write(&path, b"\xe6\xaa\x94\xe6\xa1\x88:a.jpg,x:1\n\xff\xfe\n").unwrap();

        let err = parse_predictions(&path, &Markers::default()).unwrap_err();
        match err {
            LabelError::Encoding { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_predictions(Path::new("/nonexistent/training_result.txt"), &Markers::default())
            .unwrap_err();
        assert!(matches!(err, LabelError::Io { .. }), "{err}");
    }
}
