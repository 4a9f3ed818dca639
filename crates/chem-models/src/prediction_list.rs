use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prediction::{Metadata, Prediction};

/// Varias predicciones posibles para una misma entrada.
///
/// Contenedor transparente: el orden lo impone el modelo productor (rango o
/// confianza) y aquí no se deduplica, reordena ni valida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionList<I, O> {
    input: I,
    predictions: Vec<Prediction<I, O>>,
    #[serde(default)]
    metadata: Metadata,
}

impl<I, O> PredictionList<I, O> {
    pub fn new(input: I, predictions: Vec<Prediction<I, O>>) -> Self {
        Self { input, predictions, metadata: Metadata::new() }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn input(&self) -> &I { &self.input }
    pub fn predictions(&self) -> &[Prediction<I, O>] { &self.predictions }
    pub fn metadata(&self) -> &Metadata { &self.metadata }
    pub fn len(&self) -> usize { self.predictions.len() }
    pub fn is_empty(&self) -> bool { self.predictions.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Prediction<I, O>> { self.predictions.iter() }
    pub fn into_predictions(self) -> Vec<Prediction<I, O>> { self.predictions }
}

impl<I: Clone, O: Clone> PredictionList<I, O> {
    /// Copia con sólo las primeras `num_results` predicciones; el original no cambia.
    pub fn truncated(&self, num_results: usize) -> Self {
        let end = num_results.min(self.predictions.len());
        Self { input: self.input.clone(),
               predictions: self.predictions[..end].to_vec(),
               metadata: self.metadata.clone() }
    }
}

impl<'a, I, O> IntoIterator for &'a PredictionList<I, O> {
    type Item = &'a Prediction<I, O>;
    type IntoIter = std::slice::Iter<'a, Prediction<I, O>>;

    fn into_iter(self) -> Self::IntoIter { self.predictions.iter() }
}
