//! Contrato de los modelos de reacción (forward y backward).
//!
//! `ReactionModel<I, O>` es el contrato genérico. Las variantes estándar se
//! expresan como traits de especialización (`BackwardReactionModel`,
//! `ForwardReactionModel`) con impl blanket que fija la dirección, y los
//! derivados (`is_backward`, `num_parameters`) viven en `ReactionModelExt`,
//! implementado para todo modelo y por tanto no sobreescribible.

use chem_domain::{Bag, Molecule};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::prediction::{Metadata, Prediction};
use crate::prediction_list::PredictionList;

pub type BackwardPrediction = Prediction<Molecule, Bag<Molecule>>;
pub type ForwardPrediction = Prediction<Bag<Molecule>, Bag<Molecule>>;
pub type BackwardPredictionList = PredictionList<Molecule, Bag<Molecule>>;
pub type ForwardPredictionList = PredictionList<Bag<Molecule>, Bag<Molecule>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction { Forward, Backward }

/// Parámetro entrenable (sólo se usa para contar parámetros en diagnósticos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterShape {
    pub name: String,
    pub shape: Vec<usize>,
}

impl ParameterShape {
    pub fn new(name: impl Into<String>, shape: Vec<usize>) -> Self {
        Self { name: name.into(), shape }
    }

    /// Número de elementos (producto de dimensiones; escalar = 1)
    pub fn numel(&self) -> usize { self.shape.iter().product() }
}

/// Contrato común a todos los modelos de reacción.
pub trait ReactionModel<I, O> {
    /// Predice un lote. Devuelve exactamente una lista por entrada, en el mismo
    /// orden (correspondencia posicional, también con entradas repetidas).
    /// `num_results` es una cota superior: las listas pueden ser más cortas,
    /// nunca rellenadas.
    fn predict(&self, inputs: &[I], num_results: usize) -> Result<Vec<PredictionList<I, O>>, ModelError>;

    /// `true` si el modelo va de reactivos a productos.
    fn is_forward(&self) -> bool;

    /// Configuración / versión del modelo; vacío por defecto.
    fn get_model_info(&self) -> Metadata { Metadata::new() }

    /// Parámetros entrenables; por defecto no soportado.
    fn get_parameters(&self) -> Result<Vec<ParameterShape>, ModelError> {
        Err(ModelError::NotImplemented("get_parameters"))
    }
}

/// Derivados de `ReactionModel`. Impl blanket: ningún modelo puede redefinirlos.
pub trait ReactionModelExt<I, O>: ReactionModel<I, O> {
    fn is_backward(&self) -> bool { !self.is_forward() }

    fn direction(&self) -> Direction {
        if self.is_forward() { Direction::Forward } else { Direction::Backward }
    }

    /// Total de parámetros, o `None` si el modelo no los reporta.
    fn num_parameters(&self) -> Option<usize> {
        match self.get_parameters() {
            Ok(params) => Some(params.iter().map(ParameterShape::numel).sum()),
            Err(e) => {
                log::debug!("num_parameters: unavailable ({e})");
                None
            }
        }
    }
}

impl<I, O, M> ReactionModelExt<I, O> for M where M: ReactionModel<I, O> + ?Sized {}

/// Modelo retrosintético: producto → conjuntos de reactivos.
pub trait BackwardReactionModel {
    fn predict_reactants(&self, products: &[Molecule], num_results: usize) -> Result<Vec<BackwardPredictionList>, ModelError>;

    fn model_info(&self) -> Metadata { Metadata::new() }

    fn parameters(&self) -> Result<Vec<ParameterShape>, ModelError> {
        Err(ModelError::NotImplemented("get_parameters"))
    }
}

/// Modelo forward: conjunto de reactivos → conjuntos de productos.
pub trait ForwardReactionModel {
    fn predict_products(&self, reactants: &[Bag<Molecule>], num_results: usize) -> Result<Vec<ForwardPredictionList>, ModelError>;

    fn model_info(&self) -> Metadata { Metadata::new() }

    fn parameters(&self) -> Result<Vec<ParameterShape>, ModelError> {
        Err(ModelError::NotImplemented("get_parameters"))
    }
}

impl<M: BackwardReactionModel> ReactionModel<Molecule, Bag<Molecule>> for M {
    fn predict(&self, inputs: &[Molecule], num_results: usize) -> Result<Vec<BackwardPredictionList>, ModelError> {
        self.predict_reactants(inputs, num_results)
    }

    fn is_forward(&self) -> bool { false }

    fn get_model_info(&self) -> Metadata { self.model_info() }

    fn get_parameters(&self) -> Result<Vec<ParameterShape>, ModelError> { self.parameters() }
}

impl<M: ForwardReactionModel> ReactionModel<Bag<Molecule>, Bag<Molecule>> for M {
    fn predict(&self, inputs: &[Bag<Molecule>], num_results: usize) -> Result<Vec<ForwardPredictionList>, ModelError> {
        self.predict_products(inputs, num_results)
    }

    fn is_forward(&self) -> bool { true }

    fn get_model_info(&self) -> Metadata { self.model_info() }

    fn get_parameters(&self) -> Result<Vec<ParameterShape>, ModelError> { self.parameters() }
}

/// Respuesta para los lotes triviales, sin tocar el modelo subyacente:
/// sin entradas → sin listas; `num_results == 0` → una lista vacía por entrada.
pub fn batch_edge_case<I: Clone, O>(inputs: &[I], num_results: usize) -> Option<Vec<PredictionList<I, O>>> {
    if inputs.is_empty() {
        return Some(Vec::new());
    }
    if num_results == 0 {
        return Some(inputs.iter().map(|input| PredictionList::new(input.clone(), Vec::new())).collect());
    }
    None
}
