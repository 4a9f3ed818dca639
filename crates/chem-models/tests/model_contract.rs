use std::collections::HashMap;

use chem_domain::{Bag, Molecule};
use chem_models::{batch_edge_case, BackwardPredictionList, BackwardReactionModel, Direction, ForwardPredictionList, ForwardReactionModel,
                  Metadata, ModelError, ParameterShape, Prediction, PredictionList, ReactionModel, ReactionModelExt};
use serde_json::json;

// Modelo retro de tabla: producto -> candidatos (reactivos, probabilidad) ya ordenados.
struct TableRetro {
    table: HashMap<String, Vec<(&'static str, f64)>>,
}

impl TableRetro {
    fn new() -> Self {
        let mut table = HashMap::new();
        table.insert("CCOC(C)=O".to_string(), vec![("CC(=O)O.CCO", 0.81), ("CC(=O)Cl.CCO", 0.12), ("CC(=O)OC(C)=O.CCO", 0.04)]);
        table.insert("CC(=O)Nc1ccccc1".to_string(),
                     vec![("CC(=O)Cl.Nc1ccccc1", 0.7), ("CC(=O)O.Nc1ccccc1", 0.2), ("CC(=O)OC(C)=O.Nc1ccccc1", 0.05), ("CC#N.Oc1ccccc1", 0.01)]);
        Self { table }
    }
}

impl BackwardReactionModel for TableRetro {
    fn predict_reactants(&self, products: &[Molecule], num_results: usize) -> Result<Vec<BackwardPredictionList>, ModelError> {
        if let Some(lists) = batch_edge_case(products, num_results) {
            return Ok(lists);
        }
        products.iter()
                .map(|product| -> Result<BackwardPredictionList, ModelError> {
                    let candidates = self.table.get(product.smiles()).cloned().unwrap_or_default();
                    let predictions = candidates.into_iter()
                                                .take(num_results)
                                                .map(|(smiles, p)| -> Result<_, ModelError> {
                                                    Prediction::new(product.clone(), Bag::from_smiles(smiles)?).with_probability(p)
                                                })
                                                .collect::<Result<Vec<_>, _>>()?;
                    Ok(PredictionList::new(product.clone(), predictions))
                })
                .collect()
    }

    fn model_info(&self) -> Metadata {
        let mut info = Metadata::new();
        info.insert("name".into(), json!("table-retro"));
        info.insert("entries".into(), json!(self.table.len()));
        info
    }

    fn parameters(&self) -> Result<Vec<ParameterShape>, ModelError> { Ok(vec![ParameterShape::new("table", vec![self.table.len()])]) }
}

// Modelo forward trivial: concatena los reactivos en un único "producto".
struct Concatenate;

impl ForwardReactionModel for Concatenate {
    fn predict_products(&self, reactants: &[Bag<Molecule>], num_results: usize) -> Result<Vec<ForwardPredictionList>, ModelError> {
        if let Some(lists) = batch_edge_case(reactants, num_results) {
            return Ok(lists);
        }
        reactants.iter()
                 .map(|bag| -> Result<ForwardPredictionList, ModelError> {
                     let joined = bag.iter().map(Molecule::smiles).collect::<String>();
                     let product = Bag::new(vec![Molecule::from_smiles(&joined)?]);
                     let prediction = Prediction::new(bag.clone(), product).with_log_prob(0.0)?;
                     Ok(PredictionList::new(bag.clone(), vec![prediction]))
                 })
                 .collect()
    }
}

fn mol(smiles: &str) -> Molecule { Molecule::from_smiles(smiles).unwrap() }

#[test]
fn backward_model_direction_is_fixed() {
    let model = TableRetro::new();
    let as_contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    assert!(!as_contract.is_forward());
    assert!(as_contract.is_backward());
    assert_eq!(as_contract.direction(), Direction::Backward);
}

#[test]
fn forward_model_direction_is_fixed() {
    let model = Concatenate;
    let as_contract: &dyn ReactionModel<Bag<Molecule>, Bag<Molecule>> = &model;
    assert!(as_contract.is_forward());
    assert!(!as_contract.is_backward());
    assert_eq!(as_contract.direction(), Direction::Forward);
    assert!(as_contract.get_model_info().is_empty());
    assert_eq!(as_contract.num_parameters(), None);
}

#[test]
fn backward_batch_of_two_with_five_results() {
    let model = TableRetro::new();
    let contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    let inputs = vec![mol("CCOC(C)=O"), mol("CC(=O)Nc1ccccc1")];
    let out = contract.predict(&inputs, 5).unwrap();

    assert_eq!(out.len(), 2);
    for (input, list) in inputs.iter().zip(&out) {
        assert_eq!(list.input(), input);
        assert!(list.len() <= 5);
        let probs: Vec<f64> = list.iter().map(|p| p.get_prob().unwrap()).collect();
        assert!(probs.windows(2).all(|w| w[0] >= w[1]), "not descending: {probs:?}");
        assert!(list.iter().all(|p| p.input() == input));
    }
    assert_eq!(out[0].len(), 3);
    assert_eq!(out[1].len(), 4);
    assert_eq!(out[0].predictions()[0].output(), &Bag::from_smiles("CCO.CC(=O)O").unwrap());
}

#[test]
fn unknown_product_gets_empty_list_not_padding() {
    let model = TableRetro::new();
    let contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    let out = contract.predict(&[mol("C1CCCCC1")], 10).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].is_empty());
}

#[test]
fn truncating_model_output() {
    let model = TableRetro::new();
    let contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    let out = contract.predict(&[mol("CC(=O)Nc1ccccc1")], 10).unwrap();
    let top = out[0].truncated(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top.predictions(), &out[0].predictions()[..2]);
    assert_eq!(out[0].len(), 4);
}

#[test]
fn model_info_and_parameter_count() {
    let model = TableRetro::new();
    let contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    assert_eq!(contract.get_model_info().get("name"), Some(&json!("table-retro")));
    assert_eq!(contract.num_parameters(), Some(2));
}

#[test]
fn forward_model_predicts_products() {
    let model = Concatenate;
    let contract: &dyn ReactionModel<Bag<Molecule>, Bag<Molecule>> = &model;
    let inputs = vec![Bag::from_smiles("CC.O").unwrap(), Bag::from_smiles("N").unwrap()];
    let out = contract.predict(&inputs, 3).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].predictions()[0].output(), &Bag::from_smiles("CCO").unwrap());
    assert_eq!(out[0].predictions()[0].get_prob().unwrap(), 1.0);
    assert_eq!(out[1].input(), &inputs[1]);
}

#[test]
fn empty_batch_and_zero_results() {
    let model = TableRetro::new();
    let contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    assert!(contract.predict(&[], 5).unwrap().is_empty());
    let out = contract.predict(&[mol("CCOC(C)=O"), mol("CCOC(C)=O")], 0).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|l| l.is_empty()));
}
