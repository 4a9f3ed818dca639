// bag.rs
use crate::{DomainError, Molecule};
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Multiconjunto no ordenado. Se usa para los participantes de una reacción
/// (sales, fragmentos desconectados), que no tienen orden y pueden repetirse.
///
/// Internamente se guarda ordenado, de modo que la igualdad y el hash derivados
/// son los del multiconjunto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Bag<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> Bag<T> {
    pub fn new<I>(items: I) -> Self
        where I: IntoIterator<Item = T>
    {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort();
        Bag { items }
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Elementos en orden canónico (no de inserción)
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    pub fn contains(&self, item: &T) -> bool { self.items.binary_search(item).is_ok() }

    /// Multiplicidad de `item` dentro de la bolsa
    pub fn count(&self, item: &T) -> usize { self.items.iter().filter(|x| *x == item).count() }
}

impl Bag<Molecule> {
    /// Construye una bolsa desde un SMILES con componentes separados por `.`
    ///
    /// # Errores
    /// `DomainError::ValidationError` si algún componente es inválido o la
    /// cadena no contiene ninguna molécula.
    pub fn from_smiles(smiles: &str) -> Result<Self, DomainError> {
        let smiles = smiles.trim();
        if smiles.is_empty() {
            return Err(DomainError::ValidationError("Una bolsa de moléculas no puede estar vacía".to_string()));
        }
        let molecules = smiles.split('.').map(Molecule::from_smiles).collect::<Result<Vec<_>, _>>()?;
        Ok(Bag::new(molecules))
    }

    /// Como `from_smiles`, pero canonicalizando cada componente con RDKit.
    #[cfg(feature = "rdkit")]
    pub fn from_smiles_canonical(smiles: &str) -> Result<Self, DomainError> {
        let smiles = smiles.trim();
        if smiles.is_empty() {
            return Err(DomainError::ValidationError("Una bolsa de moléculas no puede estar vacía".to_string()));
        }
        let molecules = smiles.split('.').map(Molecule::new_molecule_with_smiles).collect::<Result<Vec<_>, _>>()?;
        Ok(Bag::new(molecules))
    }

    /// SMILES de la bolsa completa, componentes en orden canónico
    pub fn to_smiles(&self) -> String {
        self.items.iter().map(Molecule::smiles).collect::<Vec<_>>().join(".")
    }

    /// Hash de la composición, independiente del orden de construcción
    pub fn bag_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for molecule in &self.items {
            hasher.update(molecule.smiles().as_bytes());
            hasher.update(b".");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl<T: Ord> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Bag::new(iter) }
}

impl<'a, T: Ord> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<T: Ord> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

// La secuencia recibida puede venir en cualquier orden; se reordena al cargar.
impl<'de, T> Deserialize<'de> for Bag<T> where T: Ord + Deserialize<'de>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Bag::new)
    }
}

impl fmt::Display for Bag<Molecule> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_smiles())
    }
}
