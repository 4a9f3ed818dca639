//! Adaptador retrosintético sobre LocalRetro.
//!
//! El adaptador es dueño de todo el estado del modelo (backend cargado,
//! dispositivo, rutas de artefactos). Traduce lotes de `Molecule` a SMILES,
//! invoca al backend una vez por lote y decodifica la salida cruda en
//! `BackwardPredictionList`.

use chem_domain::Molecule;
use chem_models::{batch_edge_case, BackwardPredictionList, BackwardReactionModel, Metadata, ModelError, ParameterShape};
use log::{debug, info};
use serde_json::json;

use crate::artifacts::ModelArtifacts;
use crate::backend::RetroBackend;
use crate::config::LocalRetroConfig;
use crate::decode::process_raw_outputs;
use crate::error::AdapterError;

pub const MODEL_NAME: &str = "LocalRetro";

pub struct LocalRetroModel<B> {
    backend: B,
    artifacts: ModelArtifacts,
    device: String,
}

impl<B: RetroBackend> LocalRetroModel<B> {
    /// Valida los artefactos y sólo entonces construye el backend.
    ///
    /// # Errores
    /// `AdapterError::Configuration` si falta (o sobra) el checkpoint, la
    /// configuración o `data/`; cualquier error que devuelva `factory`.
    pub fn with_backend<F>(config: &LocalRetroConfig, factory: F) -> Result<Self, AdapterError>
        where F: FnOnce(&ModelArtifacts, &str) -> Result<B, AdapterError>
    {
        let artifacts = ModelArtifacts::locate(&config.model_dir)?;
        let backend = factory(&artifacts, &config.device)?;
        info!("localretro:ready checkpoint={} device={}", artifacts.checkpoint.display(), config.device);
        Ok(Self { backend, artifacts, device: config.device.clone() })
    }

    pub fn artifacts(&self) -> &ModelArtifacts { &self.artifacts }
    pub fn device(&self) -> &str { &self.device }
    pub fn backend(&self) -> &B { &self.backend }
}

impl<B: RetroBackend> BackwardReactionModel for LocalRetroModel<B> {
    fn predict_reactants(&self, products: &[Molecule], num_results: usize) -> Result<Vec<BackwardPredictionList>, ModelError> {
        if let Some(lists) = batch_edge_case(products, num_results) {
            return Ok(lists);
        }
        let smiles: Vec<String> = products.iter().map(|m| m.smiles().to_string()).collect();
        debug!("localretro:batch:start size={} top_k={num_results}", smiles.len());
        let raw_batch = self.backend.run_batch(&smiles, num_results)?;
        if raw_batch.len() != products.len() {
            return Err(ModelError::Inference(format!("backend returned {} result sets for {} inputs", raw_batch.len(), products.len())));
        }
        let lists = products.iter()
                            .zip(&raw_batch)
                            .map(|(product, raw)| process_raw_outputs(product, raw, num_results))
                            .collect::<Result<Vec<_>, _>>()?;
        debug!("localretro:batch:done size={} predictions={}", lists.len(), lists.iter().map(|l| l.len()).sum::<usize>());
        Ok(lists)
    }

    fn model_info(&self) -> Metadata {
        let mut info = Metadata::new();
        info.insert("model".into(), json!(MODEL_NAME));
        info.insert("device".into(), json!(self.device));
        info.insert("checkpoint".into(), json!(self.artifacts.checkpoint.display().to_string()));
        info.insert("config".into(), json!(self.artifacts.config.display().to_string()));
        info.insert("data_dir".into(), json!(self.artifacts.data_dir.display().to_string()));
        let backend = self.backend.describe();
        if !backend.is_empty() {
            info.insert("backend".into(), serde_json::Value::Object(backend));
        }
        info
    }

    fn parameters(&self) -> Result<Vec<ParameterShape>, ModelError> { self.backend.parameter_shapes() }
}
