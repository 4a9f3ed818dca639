//! chem-models: contrato de modelos de reacción y esquema de predicciones.
//!
//! - `Prediction` / `PredictionList`: registros inmutables y validados que
//!   produce un modelo por cada llamada de inferencia.
//! - `ReactionModel`: contrato genérico sobre tipo de entrada y salida, con
//!   las especializaciones `BackwardReactionModel` (molécula → bolsa de
//!   reactivos) y `ForwardReactionModel` (bolsa → bolsa).

pub mod errors;
pub mod model;
pub mod prediction;
pub mod prediction_list;

pub use errors::ModelError;
pub use model::{batch_edge_case, BackwardPrediction, BackwardPredictionList, BackwardReactionModel, Direction, ForwardPrediction,
                ForwardPredictionList, ForwardReactionModel, ParameterShape, ReactionModel, ReactionModelExt};
pub use prediction::{Metadata, Prediction, PredictionRecord};
pub use prediction_list::PredictionList;
