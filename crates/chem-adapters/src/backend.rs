//! Frontera con el modelo externo.
//!
//! Un backend recibe el lote completo de SMILES y debe invocar al modelo una
//! sola vez. Devuelve, por cada entrada y en el mismo orden, los candidatos
//! crudos (`('SMILES', score)`) ordenados por el propio modelo.

use chem_models::{Metadata, ModelError, ParameterShape};

use crate::error::AdapterError;

pub trait RetroBackend {
    fn run_batch(&self, smiles: &[String], top_k: usize) -> Result<Vec<Vec<String>>, AdapterError>;

    /// Parámetros entrenables del modelo cargado, si el backend los expone.
    fn parameter_shapes(&self) -> Result<Vec<ParameterShape>, ModelError> {
        Err(ModelError::NotImplemented("get_parameters"))
    }

    /// Información adicional para `get_model_info`.
    fn describe(&self) -> Metadata { Metadata::new() }
}
