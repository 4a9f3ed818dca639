//! Error agregado de la librería: reúne los errores de cada crate para que
//! los clientes puedan propagar con `?` sin conversiones manuales.

use chem_adapters::AdapterError;
use chem_domain::DomainError;
use chem_models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChemRetroError {
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Error de modelo: {0}")]
    Model(#[from] ModelError),
    #[error("Error de adaptador: {0}")]
    Adapter(#[from] AdapterError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
}
