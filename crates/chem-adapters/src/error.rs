//! Errores del adaptador LocalRetro.

use chem_domain::DomainError;
use chem_models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("malformed raw prediction: {0}")]
    MalformedOutput(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

// En la frontera del contrato todo fallo del adaptador es un fallo de inferencia.
impl From<AdapterError> for ModelError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Domain(e) => ModelError::Domain(e),
            other => ModelError::Inference(other.to_string()),
        }
    }
}

#[cfg(feature = "python")]
impl From<chemengine::EngineError> for AdapterError {
    fn from(err: chemengine::EngineError) -> Self {
        AdapterError::Backend(err.to_string())
    }
}
