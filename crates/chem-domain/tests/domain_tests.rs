use chem_domain::{Bag, DomainError, Molecule};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_bag_of_molecules_is_unordered() -> Result<(), DomainError> {
    let a = Bag::new(vec![Molecule::from_smiles("CC(=O)Cl")?, Molecule::from_smiles("NCC")?]);
    let b = Bag::new(vec![Molecule::from_smiles("NCC")?, Molecule::from_smiles("CC(=O)Cl")?]);
    assert_eq!(a, b);
    let set: HashSet<Bag<Molecule>> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
    Ok(())
}

#[test]
fn test_bag_of_molecules_keeps_repeats() -> Result<(), DomainError> {
    // Dos equivalentes de un mismo reactivo no colapsan
    let bag = Bag::from_smiles("CBr.CBr.c1ccccc1O")?;
    assert_eq!(bag.len(), 3);
    assert_eq!(bag.count(&Molecule::from_smiles("CBr")?), 2);
    assert_ne!(bag, Bag::from_smiles("CBr.c1ccccc1O")?);
    Ok(())
}

#[test]
fn test_bag_json_shape() -> Result<(), DomainError> {
    let bag = Bag::from_smiles("O.CCO")?;
    let value = serde_json::to_value(&bag)?;
    assert_eq!(value, json!([{"smiles": "CCO"}, {"smiles": "O"}]));
    let back: Bag<Molecule> = serde_json::from_value(json!([{"smiles": "O"}, {"smiles": "CCO"}]))?;
    assert_eq!(back, bag);
    Ok(())
}

#[test]
fn test_bag_json_with_invalid_component_is_rejected() {
    // Un componente con '.' rompería la identidad del multiconjunto
    let dotted = serde_json::from_str::<Bag<Molecule>>(r#"[{"smiles":"CC.O"}]"#);
    assert!(dotted.is_err());
    let unbalanced = serde_json::from_str::<Bag<Molecule>>(r#"[{"smiles":"CC"},{"smiles":"C(C"}]"#);
    assert!(unbalanced.is_err());
}

#[test]
fn test_molecule_display_is_smiles() -> Result<(), DomainError> {
    let mol = Molecule::from_smiles("CCO")?;
    assert_eq!(mol.to_string(), "CCO");
    assert_eq!(Bag::from_smiles("O.CCO")?.to_string(), "CCO.O");
    Ok(())
}

#[cfg(feature = "rdkit")]
#[test]
#[ignore = "requiere Python con RDKit instalado"]
fn test_rdkit_canonicalization_matches_identity() {
    let a = Molecule::new_molecule_with_smiles("OCC").unwrap();
    let b = Molecule::new_molecule_with_smiles("CCO").unwrap();
    assert_eq!(a, b);
    assert!(a.inchikey().is_some());
}

#[cfg(feature = "rdkit")]
#[test]
#[ignore = "requiere Python con RDKit instalado"]
fn test_rdkit_canonical_bag_merges_spellings() {
    let a = Bag::from_smiles_canonical("CCO.CC(=O)O").unwrap();
    let b = Bag::from_smiles_canonical("OC(C)=O.OCC").unwrap();
    assert_eq!(a, b);
}
