//! Errores de la capa de modelos de reacción.

use chem_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ModelError {
    #[error("probability can be stored as probability or log probability, not both")]
    ConflictingConfidence,
    #[error("invalid probability {0}: expected a value in [0, 1]")]
    InvalidProbability(f64),
    #[error("invalid log probability {0}: expected a value <= 0")]
    InvalidLogProb(f64),
    #[error("prediction does not have associated probability or log prob value")]
    MissingConfidence,
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
