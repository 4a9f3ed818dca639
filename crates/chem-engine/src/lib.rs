//! chemengine: puente hacia Python para RDKit y LocalRetro.

use pyo3::PyErr;
use std::path::Path;
use thiserror::Error;
pub mod core;
pub mod retro;
pub use crate::core::CanonicalSmiles;
pub use retro::RetroSession;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("Error canonicalizando SMILES: {0}")]
    Canonicalize(PyErr),
    #[error("Error cargando modelo: {0}")]
    LoadModel(PyErr),
    #[error("Error de inferencia: {0}")]
    Predict(PyErr),
}

/// Punto de entrada; garantiza que el intérprete está listo.
pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    pub fn init() -> Result<Self, EngineError> {
        crate::core::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }

    pub fn canonicalize(&self, smiles: &str) -> Result<CanonicalSmiles, EngineError> {
        crate::core::canonicalize(smiles).map_err(EngineError::Canonicalize)
    }

    pub fn load_local_retro(&self, model_path: &Path, config_path: &Path, data_dir: &Path, device: &str) -> Result<RetroSession, EngineError> {
        RetroSession::load(model_path, config_path, data_dir, device)
    }
}
