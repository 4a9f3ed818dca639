use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// Caracteres admitidos en un SMILES de un solo componente (sin '.').
const SMILES_SYMBOLS: &str = "()[]=#$:/\\@+-%*";

/// Molécula identificada por su SMILES canónico.
///
/// La identidad (igualdad, orden y hash) depende sólo del SMILES; la InChIKey
/// y los metadatos son informativos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MoleculeRecord")]
pub struct Molecule {
    smiles: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inchikey: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    metadata: serde_json::Value,
}

impl Molecule {
    /// Crea una molécula a partir de un SMILES que se asume ya canónico.
    ///
    /// # Errores
    /// `DomainError::ValidationError` si el SMILES está vacío, contiene
    /// espacios, varios componentes (`.`), caracteres fuera del alfabeto
    /// SMILES o paréntesis/corchetes desbalanceados.
    pub fn from_smiles(smiles: &str) -> Result<Self, DomainError> {
        let smiles = smiles.trim();
        validate_smiles(smiles)?;
        Ok(Molecule { smiles: smiles.to_string(),
                      inchikey: None,
                      metadata: serde_json::Value::Null })
    }

    /// Crea una molécula canonicalizando el SMILES con RDKit.
    #[cfg(feature = "rdkit")]
    pub fn new_molecule_with_smiles(smiles: &str) -> Result<Self, DomainError> {
        let engine = chemengine::ChemEngine::init()?;
        let canonical = engine.canonicalize(smiles)?;
        if canonical.num_fragments != 1 {
            return Err(DomainError::ValidationError(format!("se esperaba un solo fragmento, hay {}", canonical.num_fragments)));
        }
        let mut molecule = Molecule::from_smiles(&canonical.smiles)?;
        molecule.inchikey = Some(canonical.inchikey.to_uppercase());
        molecule.metadata = serde_json::json!({ "source": "rdkit", "inchi": canonical.inchi, "num_atoms": canonical.num_atoms });
        Ok(molecule)
    }

    /// Devuelve una copia con metadatos reemplazados
    pub fn with_metadata(&self, metadata: serde_json::Value) -> Self {
        let mut molecule = self.clone();
        molecule.metadata = metadata;
        molecule
    }

    pub fn smiles(&self) -> &str { &self.smiles }
    pub fn inchikey(&self) -> Option<&str> { self.inchikey.as_deref() }
    pub fn metadata(&self) -> &serde_json::Value { &self.metadata }
}

/// Forma serializada sin validar; `Molecule` sólo se deserializa a través de ella.
#[derive(Debug, Deserialize)]
pub struct MoleculeRecord {
    pub smiles: String,
    #[serde(default)]
    pub inchikey: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl TryFrom<MoleculeRecord> for Molecule {
    type Error = DomainError;

    fn try_from(record: MoleculeRecord) -> Result<Self, Self::Error> {
        let mut molecule = Molecule::from_smiles(&record.smiles)?;
        molecule.inchikey = record.inchikey;
        molecule.metadata = record.metadata;
        Ok(molecule)
    }
}

fn validate_smiles(smiles: &str) -> Result<(), DomainError> {
    if smiles.is_empty() {
        return Err(DomainError::ValidationError("SMILES vacío".to_string()));
    }
    if smiles.contains('.') {
        return Err(DomainError::ValidationError(format!("SMILES con varios componentes: {smiles}")));
    }
    if let Some(c) = smiles.chars().find(|c| !(c.is_ascii_alphanumeric() || SMILES_SYMBOLS.contains(*c))) {
        return Err(DomainError::ValidationError(format!("Carácter inválido '{c}' en SMILES: {smiles}")));
    }
    let mut depth = 0i32;
    let mut in_bracket = false;
    for c in smiles.chars() {
        match c {
            '[' if in_bracket => return Err(unbalanced(smiles)),
            '[' => in_bracket = true,
            ']' if !in_bracket => return Err(unbalanced(smiles)),
            ']' => in_bracket = false,
            '(' if !in_bracket => depth += 1,
            ')' if !in_bracket => {
                depth -= 1;
                if depth < 0 {
                    return Err(unbalanced(smiles));
                }
            }
            _ => {}
        }
    }
    if depth != 0 || in_bracket {
        return Err(unbalanced(smiles));
    }
    Ok(())
}

fn unbalanced(smiles: &str) -> DomainError {
    DomainError::ValidationError(format!("Paréntesis o corchetes desbalanceados en SMILES: {smiles}"))
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool { self.smiles == other.smiles }
}

impl Eq for Molecule {}

impl Hash for Molecule {
    fn hash<H: Hasher>(&self, state: &mut H) { self.smiles.hash(state); }
}

impl PartialOrd for Molecule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Molecule {
    fn cmp(&self, other: &Self) -> Ordering { self.smiles.cmp(&other.smiles) }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.smiles)
    }
}
