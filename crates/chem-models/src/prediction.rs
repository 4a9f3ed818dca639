//! Predicción individual de un modelo de reacción (forward o backward).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;

/// Slot libre de metadatos (clave → valor JSON).
pub type Metadata = serde_json::Map<String, Value>;

/// Forma "abierta" de una predicción: todos los campos públicos, sin validar.
///
/// Es la vía para construir una `Prediction` con varios campos de golpe;
/// `Prediction::try_from(record)` aplica las invariantes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord<I, O> {
    pub input: I,
    pub output: O,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub log_prob: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub reaction: Option<String>,
    #[serde(default)]
    pub rxnid: Option<i64>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl<I, O> PredictionRecord<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input,
               output,
               probability: None,
               log_prob: None,
               score: None,
               reaction: None,
               rxnid: None,
               metadata: Metadata::new() }
    }
}

/// Predicción validada. Inmutable: los `with_*` devuelven un valor nuevo.
///
/// La confianza se guarda como probabilidad o como log-probabilidad, nunca
/// ambas; puede faltar por completo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PredictionRecord<I, O>")]
pub struct Prediction<I, O> {
    input: I,
    output: O,
    #[serde(skip_serializing_if = "Option::is_none")]
    probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rxnid: Option<i64>,
    metadata: Metadata,
}

impl<I, O> Prediction<I, O> {
    /// Predicción sin confianza asociada
    pub fn new(input: I, output: O) -> Self {
        Self { input,
               output,
               probability: None,
               log_prob: None,
               score: None,
               reaction: None,
               rxnid: None,
               metadata: Metadata::new() }
    }

    /// # Errores
    /// `ConflictingConfidence` si ya hay log-probabilidad,
    /// `InvalidProbability` si `probability` no está en `[0, 1]`.
    pub fn with_probability(mut self, probability: f64) -> Result<Self, ModelError> {
        self.probability = Some(probability);
        self.validate()?;
        Ok(self)
    }

    /// # Errores
    /// `ConflictingConfidence` si ya hay probabilidad,
    /// `InvalidLogProb` si `log_prob` es positivo o NaN.
    pub fn with_log_prob(mut self, log_prob: f64) -> Result<Self, ModelError> {
        self.log_prob = Some(log_prob);
        self.validate()?;
        Ok(self)
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_reaction(mut self, reaction: impl Into<String>) -> Self {
        self.reaction = Some(reaction.into());
        self
    }

    pub fn with_rxnid(mut self, rxnid: i64) -> Self {
        self.rxnid = Some(rxnid);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Invariantes de construcción: a lo sumo una fuente de confianza, y en rango.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.probability.is_some() && self.log_prob.is_some() {
            return Err(ModelError::ConflictingConfidence);
        }
        if let Some(p) = self.probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(ModelError::InvalidProbability(p));
            }
        }
        if let Some(l) = self.log_prob {
            if l.is_nan() || l > 0.0 {
                return Err(ModelError::InvalidLogProb(l));
            }
        }
        Ok(())
    }

    /// Probabilidad, directa o derivada de `log_prob`.
    pub fn get_prob(&self) -> Result<f64, ModelError> {
        match (self.probability, self.log_prob) {
            (Some(p), _) => Ok(p),
            (None, Some(l)) => Ok(l.exp()),
            (None, None) => Err(ModelError::MissingConfidence),
        }
    }

    /// Log-probabilidad, directa o derivada de `probability`.
    pub fn get_log_prob(&self) -> Result<f64, ModelError> {
        match (self.log_prob, self.probability) {
            (Some(l), _) => Ok(l),
            (None, Some(p)) => Ok(p.ln()),
            (None, None) => Err(ModelError::MissingConfidence),
        }
    }

    pub fn input(&self) -> &I { &self.input }
    pub fn output(&self) -> &O { &self.output }
    pub fn probability(&self) -> Option<f64> { self.probability }
    pub fn log_prob(&self) -> Option<f64> { self.log_prob }
    pub fn score(&self) -> Option<f64> { self.score }
    pub fn reaction(&self) -> Option<&str> { self.reaction.as_deref() }
    pub fn rxnid(&self) -> Option<i64> { self.rxnid }
    pub fn metadata(&self) -> &Metadata { &self.metadata }
}

impl<I, O> TryFrom<PredictionRecord<I, O>> for Prediction<I, O> {
    type Error = ModelError;

    fn try_from(record: PredictionRecord<I, O>) -> Result<Self, Self::Error> {
        let prediction = Prediction { input: record.input,
                                      output: record.output,
                                      probability: record.probability,
                                      log_prob: record.log_prob,
                                      score: record.score,
                                      reaction: record.reaction,
                                      rxnid: record.rxnid,
                                      metadata: record.metadata };
        prediction.validate()?;
        Ok(prediction)
    }
}
