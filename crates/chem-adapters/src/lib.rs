//! chem-adapters: adaptadores de modelos de reacción concretos.
//!
//! Este crate provee:
//! - `LocalRetroConfig` y `ModelArtifacts`: configuración y validación del
//!   directorio del modelo (falla al construir, no al inferir).
//! - `RetroBackend`: frontera con el modelo externo, una invocación por lote.
//! - `decode`: traducción de la salida cruda (tuplas renderizadas como texto)
//!   a `Prediction`.
//! - `LocalRetroModel`: implementación de `BackwardReactionModel`.
//!
//! Con la feature `python`, `PythonLocalRetroBackend` ejecuta el paquete
//! LocalRetro real a través de `chemengine`.

pub mod artifacts;
pub mod backend;
pub mod config;
pub mod decode;
pub mod error;
pub mod local_retro;
#[cfg(feature = "python")]
pub mod python;

pub use artifacts::ModelArtifacts;
pub use backend::RetroBackend;
pub use config::LocalRetroConfig;
pub use error::AdapterError;
pub use local_retro::LocalRetroModel;
#[cfg(feature = "python")]
pub use python::PythonLocalRetroBackend;
