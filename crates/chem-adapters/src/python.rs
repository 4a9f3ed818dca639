//! Backend LocalRetro real: el paquete Python se ejecuta en el intérprete
//! embebido de `chemengine`.

use chem_models::{Metadata, ModelError, ParameterShape};
use chemengine::{ChemEngine, RetroSession};
use serde_json::json;

use crate::artifacts::ModelArtifacts;
use crate::backend::RetroBackend;
use crate::config::LocalRetroConfig;
use crate::error::AdapterError;
use crate::local_retro::LocalRetroModel;

pub struct PythonLocalRetroBackend {
    session: RetroSession,
}

impl PythonLocalRetroBackend {
    /// Inicializa el intérprete (con RDKit, que usa la decodificación) y carga el modelo.
    pub fn load(artifacts: &ModelArtifacts, device: &str) -> Result<Self, AdapterError> {
        let engine = ChemEngine::init()?;
        let session = engine.load_local_retro(&artifacts.checkpoint, &artifacts.config, &artifacts.data_dir, device)?;
        Ok(Self { session })
    }
}

impl RetroBackend for PythonLocalRetroBackend {
    fn run_batch(&self, smiles: &[String], top_k: usize) -> Result<Vec<Vec<String>>, AdapterError> {
        Ok(self.session.predict(smiles, top_k)?)
    }

    fn parameter_shapes(&self) -> Result<Vec<ParameterShape>, ModelError> {
        let shapes = self.session.parameter_shapes().map_err(|e| ModelError::Inference(e.to_string()))?;
        Ok(shapes.into_iter().map(|(name, shape)| ParameterShape::new(name, shape)).collect())
    }

    fn describe(&self) -> Metadata {
        let mut info = Metadata::new();
        info.insert("runtime".into(), json!("python"));
        info
    }
}

impl LocalRetroModel<PythonLocalRetroBackend> {
    /// Valida el directorio del modelo y carga LocalRetro en Python.
    pub fn load(config: &LocalRetroConfig) -> Result<Self, AdapterError> {
        Self::with_backend(config, PythonLocalRetroBackend::load)
    }
}
