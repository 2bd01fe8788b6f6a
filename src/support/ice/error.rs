use thiserror::Error;

/// Errors that may occur when evaluating enthalpy relations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the converter's valid domain.
    ///
    /// For example, a temperature above the pressure melting point.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is inconsistent.
    ///
    /// For example, liquid water content in ice below the melting point.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}
