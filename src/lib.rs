//! ChemRetro Rust Library
//!
//! Fachada sobre los crates del workspace:
//! - `chem-domain`: `Molecule` y `Bag`.
//! - `chem-models`: `Prediction`, `PredictionList` y el contrato `ReactionModel`.
//! - `chem-adapters`: el adaptador LocalRetro.
//!
//! Expone además `errors::ChemRetroError`, que agrega los errores de todos
//! ellos.

pub mod errors;

pub use chem_adapters::{AdapterError, LocalRetroConfig, LocalRetroModel, ModelArtifacts, RetroBackend};
#[cfg(feature = "python")]
pub use chem_adapters::PythonLocalRetroBackend;
pub use chem_domain::{Bag, DomainError, Molecule};
pub use chem_models::{BackwardPrediction, BackwardPredictionList, BackwardReactionModel, Direction, ForwardPrediction, ForwardPredictionList,
                      ForwardReactionModel, Metadata, ModelError, ParameterShape, Prediction, PredictionList, PredictionRecord, ReactionModel,
                      ReactionModelExt};
pub use errors::ChemRetroError;

/// Carga LocalRetro usando `LOCALRETRO_MODEL_DIR` / `LOCALRETRO_DEVICE` (o `.env`).
#[cfg(feature = "python")]
pub fn load_local_retro_from_env() -> Result<LocalRetroModel<PythonLocalRetroBackend>, ChemRetroError> {
    let config = LocalRetroConfig::from_env()?;
    log::info!("chemretro: loading LocalRetro from {}", config.model_dir.display());
    Ok(LocalRetroModel::load(&config)?)
}
