// Propiedades del esquema de predicciones recorridas sobre varios valores.
use chemretro_rust::{Bag, ForwardPrediction, ModelError, Molecule, Prediction, PredictionRecord};
use serde_json::json;

fn reactants() -> Bag<Molecule> { Bag::from_smiles("CC(=O)O.CCO").unwrap() }
fn product() -> Bag<Molecule> { Bag::from_smiles("CCOC(C)=O.O").unwrap() }

#[test]
fn log_prob_and_prob_agree() {
    for k in 0..8 {
        let p = 0.5_f64.powi(k);
        let from_prob: ForwardPrediction = Prediction::new(reactants(), product()).with_probability(p).unwrap();
        let from_log: ForwardPrediction = Prediction::new(reactants(), product()).with_log_prob(p.ln()).unwrap();
        assert!((from_prob.get_log_prob().unwrap() - p.ln()).abs() < 1e-12);
        assert!((from_log.get_prob().unwrap() - p).abs() < 1e-12);
    }
}

#[test]
fn out_of_range_values_are_rejected() {
    for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let res = Prediction::new(reactants(), product()).with_probability(bad);
        assert!(matches!(res, Err(ModelError::InvalidProbability(_))), "probability {bad} accepted");
    }
    for bad in [0.1, f64::NAN] {
        let res = Prediction::new(reactants(), product()).with_log_prob(bad);
        assert!(matches!(res, Err(ModelError::InvalidLogProb(_))), "log_prob {bad} accepted");
    }
}

#[test]
fn records_with_both_confidences_never_validate() {
    let mut record = PredictionRecord::new(reactants(), product());
    record.probability = Some(0.25);
    record.log_prob = Some(0.25_f64.ln());
    let res: Result<ForwardPrediction, _> = Prediction::try_from(record);
    assert_eq!(res.unwrap_err(), ModelError::ConflictingConfidence);
}

#[test]
fn reactant_order_does_not_change_the_prediction() {
    let a: ForwardPrediction = Prediction::new(Bag::from_smiles("CCO.CC(=O)O").unwrap(), product()).with_score(3.0);
    let b: ForwardPrediction = Prediction::new(Bag::from_smiles("CC(=O)O.CCO").unwrap(), product()).with_score(3.0);
    assert_eq!(a, b);
    assert_eq!(a.input().bag_hash(), b.input().bag_hash());
    assert!(matches!(a.get_prob(), Err(ModelError::MissingConfidence)));
}

#[test]
fn metadata_is_carried_verbatim() {
    let p: ForwardPrediction = Prediction::new(reactants(), product()).with_rxnid(42).with_metadata("template", json!({"id": 17}));
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["rxnid"], json!(42));
    assert_eq!(value["metadata"]["template"]["id"], json!(17));
    assert!(value.get("probability").is_none());
}
