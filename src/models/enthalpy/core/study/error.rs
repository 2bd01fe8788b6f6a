use std::error::Error as StdError;

use thiserror::Error;

use super::FitError;

/// Errors that abort a convergence study.
#[derive(Debug, Error)]
pub enum StudyError {
    /// A sample run failed; no partial results are kept.
    #[error("sample {index} ({parameter}) failed")]
    Sample {
        index: usize,
        parameter: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("power-law fit failed")]
    Fit(#[from] FitError),
}
