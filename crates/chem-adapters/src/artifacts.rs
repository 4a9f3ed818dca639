//! Localización de los artefactos de un modelo LocalRetro entrenado.
//!
//! Formato esperado del directorio:
//! - un único checkpoint `*.pth`;
//! - un único archivo de configuración `*.json`;
//! - un subdirectorio `data/` con los CSV de plantillas.
//!
//! Cualquier ausencia o ambigüedad es un error de configuración y se detecta
//! al construir el adaptador, nunca en la primera inferencia.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AdapterError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelArtifacts {
    pub checkpoint: PathBuf,
    pub config: PathBuf,
    pub data_dir: PathBuf,
}

impl ModelArtifacts {
    pub fn locate(model_dir: &Path) -> Result<Self, AdapterError> {
        if !model_dir.is_dir() {
            return Err(AdapterError::Configuration(format!("model directory not found: {}", model_dir.display())));
        }
        let checkpoint = unique_file_in_dir(model_dir, "pth")?;
        let config = unique_file_in_dir(model_dir, "json")?;
        let data_dir = model_dir.join("data");
        if !data_dir.is_dir() {
            return Err(AdapterError::Configuration(format!("data directory not found: {}", data_dir.display())));
        }
        Ok(Self { checkpoint, config, data_dir })
    }
}

/// Devuelve el único archivo de `dir` con la extensión dada.
pub fn unique_file_in_dir(dir: &Path, extension: &str) -> Result<PathBuf, AdapterError> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            matches.push(path);
        }
    }
    matches.sort();
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(AdapterError::Configuration(format!("no *.{extension} file in {}", dir.display()))),
        n => Err(AdapterError::Configuration(format!("expected exactly one *.{extension} file in {}, found {n}", dir.display()))),
    }
}
