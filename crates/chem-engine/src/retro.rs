//! Sesión LocalRetro sobre Python.
//!
//! El módulo `localretro_wrapper.py` se compila una vez por proceso y se
//! guarda en un `OnceLock`; cada `RetroSession` conserva su propio estado
//! (argumentos, pesos y plantillas cargados en Python).

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::path::Path;
use std::sync::OnceLock;

use crate::core::embedded_module;
use crate::EngineError;

static LOCALRETRO_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

fn localretro_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    embedded_module(py,
                    &LOCALRETRO_MODULE,
                    include_str!("../python/localretro_wrapper.py"),
                    c_str!("localretro_wrapper.py"),
                    c_str!("localretro_wrapper"))
}

/// Modelo LocalRetro cargado en el intérprete embebido.
pub struct RetroSession {
    state: Py<PyAny>,
}

impl RetroSession {
    /// Carga checkpoint, configuración y plantillas. Las rutas ya deben estar
    /// validadas por quien llama.
    pub fn load(model_path: &Path, config_path: &Path, data_dir: &Path, device: &str) -> Result<Self, EngineError> {
        let state = Python::attach(|py| -> PyResult<Py<PyAny>> {
                        let module = localretro_module(py)?;
                        let state = module.getattr("load_model")?.call1((model_path.to_string_lossy().into_owned(),
                                                                        config_path.to_string_lossy().into_owned(),
                                                                        data_dir.to_string_lossy().into_owned(),
                                                                        device))?;
                        Ok(state.unbind())
                    }).map_err(EngineError::LoadModel)?;
        log::info!("localretro:loaded model={} device={device}", model_path.display());
        Ok(Self { state })
    }

    /// Ejecuta una única inferencia por lote. Devuelve, por cada SMILES de
    /// entrada, los candidatos crudos tal como los imprime LocalRetro.
    pub fn predict(&self, smiles: &[String], top_k: usize) -> Result<Vec<Vec<String>>, EngineError> {
        Python::attach(|py| {
            let module = localretro_module(py)?;
            let raw = module.getattr("predict")?.call1((self.state.bind(py).clone(), smiles.to_vec(), top_k))?;
            raw.extract::<Vec<Vec<String>>>()
        }).map_err(EngineError::Predict)
    }

    /// Nombre y forma de cada parámetro entrenable del modelo
    pub fn parameter_shapes(&self) -> Result<Vec<(String, Vec<usize>)>, EngineError> {
        Python::attach(|py| {
            let module = localretro_module(py)?;
            module.getattr("parameter_shapes")?.call1((self.state.bind(py).clone(),))?.extract()
        }).map_err(EngineError::Predict)
    }
}
