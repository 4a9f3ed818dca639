//! Decodificación de la salida cruda de LocalRetro.
//!
//! Cada candidato llega renderizado como una tupla de Python,
//! `('CC(=O)O.CCO', 0.912)`: SMILES de los reactivos y una puntuación. La
//! puntuación se parece a una probabilidad (empíricamente en `[0, 1]`) pero
//! no suma 1 entre candidatos.

use std::collections::HashSet;

use chem_domain::{Bag, Molecule};
use chem_models::{BackwardPrediction, BackwardPredictionList, ModelError, Prediction, PredictionList};
use log::{debug, warn};
use serde_json::json;

use crate::error::AdapterError;

#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    pub smiles: String,
    pub score: f64,
}

/// Interpreta `('SMILES', score)`; acepta comillas simples o dobles y
/// corchetes en lugar de paréntesis.
pub fn parse_raw_candidate(raw: &str) -> Result<RawCandidate, AdapterError> {
    let malformed = || AdapterError::MalformedOutput(raw.to_string());
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('(')
                       .and_then(|s| s.strip_suffix(')'))
                       .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
                       .ok_or_else(malformed)?;
    let (left, right) = inner.rsplit_once(',').ok_or_else(malformed)?;
    let left = left.trim();
    let (quote, literal) = ['\'', '"'].iter()
                                       .find_map(|q| left.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)).map(|s| (*q, s)))
                                       .ok_or_else(malformed)?;
    let smiles = unescape_literal(literal, quote).ok_or_else(malformed)?;
    let score: f64 = right.trim().parse().map_err(|_| malformed())?;
    if smiles.trim().is_empty() || !score.is_finite() {
        return Err(malformed());
    }
    Ok(RawCandidate { smiles: smiles.trim().to_string(), score })
}

// Deshace los escapes de un literal de cadena de Python (`\\`, `\'`, `\"`).
// Un escape desconocido o una comilla delimitadora sin escapar es `None`.
fn unescape_literal(literal: &str, quote: char) -> Option<String> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                escaped @ ('\\' | '\'' | '"') => out.push(escaped),
                _ => return None,
            },
            c if c == quote => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

// Con RDKit disponible cada componente se canonicaliza, así dos grafías de
// los mismos reactivos colapsan en una sola predicción.
#[cfg(feature = "python")]
fn decode_bag(smiles: &str) -> Result<Bag<Molecule>, chem_domain::DomainError> { Bag::from_smiles_canonical(smiles) }

#[cfg(not(feature = "python"))]
fn decode_bag(smiles: &str) -> Result<Bag<Molecule>, chem_domain::DomainError> { Bag::from_smiles(smiles) }

/// Convierte los candidatos crudos de un producto en una lista de predicciones.
///
/// Se conserva el orden del modelo. Se descartan candidatos ilegibles o con
/// SMILES inválido y salidas repetidas (queda la de mejor rango); como mucho
/// `num_results` predicciones.
pub fn process_raw_outputs(input: &Molecule, raw_outputs: &[String], num_results: usize) -> Result<BackwardPredictionList, ModelError> {
    let mut seen: HashSet<Bag<Molecule>> = HashSet::new();
    let mut predictions: Vec<BackwardPrediction> = Vec::new();
    let mut discarded = 0usize;

    for raw in raw_outputs {
        if predictions.len() == num_results {
            break;
        }
        let candidate = match parse_raw_candidate(raw) {
            Ok(candidate) => candidate,
            Err(e) => {
                warn!("decode: skipping candidate for {input}: {e}");
                discarded += 1;
                continue;
            }
        };
        let output = match decode_bag(&candidate.smiles) {
            Ok(output) => output,
            Err(e) => {
                warn!("decode: invalid reactants {:?} for {input}: {e}", candidate.smiles);
                discarded += 1;
                continue;
            }
        };
        if !seen.insert(output.clone()) {
            debug!("decode: duplicate reactants {output} for {input}");
            discarded += 1;
            continue;
        }
        predictions.push(build_prediction(input, output, &candidate, raw)?);
    }

    Ok(PredictionList::new(input.clone(), predictions).with_metadata("num_raw", json!(raw_outputs.len()))
                                                       .with_metadata("num_discarded", json!(discarded)))
}

fn build_prediction(input: &Molecule, output: Bag<Molecule>, candidate: &RawCandidate, raw: &str) -> Result<BackwardPrediction, ModelError> {
    let reaction = format!("{}>>{}", output.to_smiles(), input.smiles());
    let prediction = Prediction::new(input.clone(), output).with_reaction(reaction).with_metadata("raw", json!(raw));
    if (0.0..=1.0).contains(&candidate.score) {
        prediction.with_probability(candidate.score)
    } else {
        warn!("decode: score {} outside [0, 1] for {input}; kept as score only", candidate.score);
        Ok(prediction.with_score(candidate.score))
    }
}
