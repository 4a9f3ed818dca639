//! Configuración del adaptador LocalRetro desde variables de entorno.
//! Convención: `LOCALRETRO_MODEL_DIR` (obligatoria) y `LOCALRETRO_DEVICE`.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

use crate::error::AdapterError;

pub const MODEL_DIR_VAR: &str = "LOCALRETRO_MODEL_DIR";
pub const DEVICE_VAR: &str = "LOCALRETRO_DEVICE";
pub const DEFAULT_DEVICE: &str = "cuda:0";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRetroConfig {
    /// Directorio con un único `*.pth`, un único `*.json` y `data/`.
    pub model_dir: PathBuf,
    /// Selector de dispositivo tal como lo entiende PyTorch (`cpu`, `cuda:0`, ...).
    pub device: String,
}

impl LocalRetroConfig {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self { model_dir: model_dir.into(), device: DEFAULT_DEVICE.to_string() }
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn from_env() -> Result<Self, AdapterError> {
        Lazy::force(&DOTENV_LOADED);
        let model_dir = env::var(MODEL_DIR_VAR).map_err(|_| AdapterError::Configuration(format!("{MODEL_DIR_VAR} no definido")))?;
        let device = env::var(DEVICE_VAR).ok().filter(|d| !d.trim().is_empty()).unwrap_or_else(|| DEFAULT_DEVICE.to_string());
        Ok(Self { model_dir: PathBuf::from(model_dir), device })
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
