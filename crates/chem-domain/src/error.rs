// error.rs
use thiserror::Error;

/// Error personalizado del dominio químico
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Error externo: {0}")]
    ExternalError(String),

    #[error("Error de serialización: {0}")]
    SerializationError(String),
}

// Conversión desde EngineError (sólo cuando RDKit está disponible)
#[cfg(feature = "rdkit")]
impl From<chemengine::EngineError> for DomainError {
    fn from(e: chemengine::EngineError) -> Self {
        DomainError::ExternalError(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::SerializationError(e.to_string())
    }
}
