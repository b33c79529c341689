//! `labelcheck-recon` — prediction/ground-truth reconciliation and filename
//! identifier extraction.
//!
//! Pure engine crate: parses inputs, returns reports. No CLI or stdout.

pub mod config;
pub mod engine;
pub mod error;
pub mod ground_truth;
pub mod identifiers;
pub mod model;
pub mod predictions;

pub use config::{LabelConfig, Markers};
pub use engine::{reconcile, run};
pub use error::{InputKind, LabelError};
pub use identifiers::extract_identifiers;
pub use model::{Accuracy, ChairReport, GroundTruth, Mismatch, Predictions, ReconReport};
