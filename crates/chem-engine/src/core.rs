//! Intérprete embebido: carga de los wrappers Python y canonicalización con RDKit.

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};
use serde::Deserialize;
use std::ffi::{CStr, CString};
use std::sync::OnceLock;

static RDKIT_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

/// Compila `source` como módulo la primera vez y lo reutiliza después.
pub(crate) fn embedded_module<'py>(py: Python<'py>,
                                   cell: &OnceLock<Py<PyModule>>,
                                   source: &str,
                                   file_name: &CStr,
                                   module_name: &CStr)
                                   -> PyResult<Bound<'py, PyModule>> {
    if let Some(module) = cell.get() {
        return Ok(module.bind(py).clone());
    }
    let code = CString::new(source)?;
    let module = PyModule::from_code(py, code.as_c_str(), file_name, module_name)?;
    cell.set(module.clone().unbind()).ok();
    Ok(module)
}

fn rdkit_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    embedded_module(py, &RDKIT_MODULE, include_str!("../python/rdkit_wrapper.py"), c_str!("rdkit_wrapper.py"), c_str!("rdkit_wrapper"))
}

/// Inicializa el intérprete e importa RDKit. Idempotente.
pub fn init_python() -> PyResult<()> { Python::attach(|py| rdkit_module(py).map(|_| ())) }

/// Forma canónica de un SMILES según RDKit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CanonicalSmiles {
    pub smiles: String,
    pub inchi: String,
    pub inchikey: String,
    pub num_atoms: u32,
    /// Número de fragmentos separados por '.'
    pub num_fragments: u32,
}

pub fn canonicalize(smiles: &str) -> PyResult<CanonicalSmiles> {
    Python::attach(|py| {
        let module = rdkit_module(py)?;
        let result = module.getattr("canonical_info")?.call1((smiles,))?;
        let info = result.downcast::<PyDict>()?;
        let json_str: String = py.import("json")?.call_method1("dumps", (info,))?.extract()?;
        serde_json::from_str(&json_str).map_err(|e| {
                                           PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Deserialization error: {}", e))
                                       })
    })
}
