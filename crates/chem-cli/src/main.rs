use std::path::PathBuf;

use chem_adapters::{LocalRetroConfig, ModelArtifacts};

const USAGE: &str = "Uso:
  chem-cli check [--model-dir <DIR>]
  chem-cli predict [--model-dir <DIR>] [--device <DEV>] [--top-k <N>] <SMILES>...";

const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, PartialEq)]
enum Command {
    Check { model_dir: Option<PathBuf> },
    Predict { model_dir: Option<PathBuf>, device: Option<String>, top_k: usize, smiles: Vec<String> },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let sub = args.first().ok_or("falta subcomando")?;
    let mut model_dir: Option<PathBuf> = None;
    let mut device: Option<String> = None;
    let mut top_k = DEFAULT_TOP_K;
    let mut smiles = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model-dir" => {
                i += 1;
                model_dir = Some(PathBuf::from(args.get(i).ok_or("--model-dir requiere valor")?));
            }
            "--device" => {
                i += 1;
                device = Some(args.get(i).ok_or("--device requiere valor")?.clone());
            }
            "--top-k" => {
                i += 1;
                let raw = args.get(i).ok_or("--top-k requiere valor")?;
                top_k = raw.parse().map_err(|_| format!("--top-k inválido: {raw}"))?;
            }
            flag if flag.starts_with("--") => return Err(format!("opción desconocida: {flag}")),
            positional => smiles.push(positional.to_string()),
        }
        i += 1;
    }
    match sub.as_str() {
        "check" if smiles.is_empty() => Ok(Command::Check { model_dir }),
        "check" => Err("check no admite argumentos posicionales".into()),
        "predict" if smiles.is_empty() => Err("predict requiere al menos un SMILES".into()),
        "predict" => Ok(Command::Predict { model_dir, device, top_k, smiles }),
        other => Err(format!("subcomando desconocido: {other}")),
    }
}

// Las opciones explícitas tienen prioridad sobre LOCALRETRO_MODEL_DIR / LOCALRETRO_DEVICE.
fn resolve_config(model_dir: Option<PathBuf>, device: Option<String>) -> Result<LocalRetroConfig, chem_adapters::AdapterError> {
    let mut config = match model_dir {
        Some(dir) => LocalRetroConfig::new(dir),
        None => LocalRetroConfig::from_env()?,
    };
    let device = device.or_else(|| std::env::var(chem_adapters::config::DEVICE_VAR).ok().filter(|d| !d.trim().is_empty()));
    if let Some(d) = device {
        config = config.with_device(d);
    }
    Ok(config)
}

fn run_check(model_dir: Option<PathBuf>) -> i32 {
    let config = match resolve_config(model_dir, None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[chem check] {e}");
            return 4;
        }
    };
    match ModelArtifacts::locate(&config.model_dir) {
        Ok(artifacts) => match serde_json::to_string_pretty(&artifacts) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(e) => {
                eprintln!("[chem check] {e}");
                5
            }
        },
        Err(e) => {
            eprintln!("[chem check] {e}");
            4
        }
    }
}

#[cfg(feature = "python")]
fn run_predict(model_dir: Option<PathBuf>, device: Option<String>, top_k: usize, smiles: Vec<String>) -> i32 {
    use chem_adapters::LocalRetroModel;
    use chem_domain::{Bag, Molecule};
    use chem_models::ReactionModel;

    let molecules = match smiles.iter().map(|s| Molecule::from_smiles(s)).collect::<Result<Vec<_>, _>>() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("[chem predict] {e}");
            return 2;
        }
    };
    let model = match resolve_config(model_dir, device).and_then(|c| LocalRetroModel::load(&c)) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("[chem predict] {e}");
            return 4;
        }
    };
    let contract: &dyn ReactionModel<Molecule, Bag<Molecule>> = &model;
    let lists = match contract.predict(&molecules, top_k) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[chem predict] {e}");
            return 5;
        }
    };
    match serde_json::to_string_pretty(&lists) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("[chem predict] {e}");
            5
        }
    }
}

#[cfg(not(feature = "python"))]
fn run_predict(_model_dir: Option<PathBuf>, _device: Option<String>, _top_k: usize, _smiles: Vec<String>) -> i32 {
    eprintln!("[chem predict] binario compilado sin la feature `python`; recompila con --features python");
    3
}

fn main() {
    // Cargar .env si existe para LOCALRETRO_MODEL_DIR / LOCALRETRO_DEVICE
    chem_adapters::config::init_dotenv();
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args);
    log::debug!("chem-cli: {command:?}");
    let code = match command {
        Ok(Command::Check { model_dir }) => run_check(model_dir),
        Ok(Command::Predict { model_dir, device, top_k, smiles }) => run_predict(model_dir, device, top_k, smiles),
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            2
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> { items.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn parses_check() {
        assert_eq!(parse_args(&args(&["check", "--model-dir", "/m"])), Ok(Command::Check { model_dir: Some(PathBuf::from("/m")) }));
        assert_eq!(parse_args(&args(&["check"])), Ok(Command::Check { model_dir: None }));
    }

    #[test]
    fn parses_predict() {
        let cmd = parse_args(&args(&["predict", "--top-k", "5", "--device", "cpu", "CCO", "CC(=O)Nc1ccccc1"])).unwrap();
        assert_eq!(cmd,
                   Command::Predict { model_dir: None,
                                      device: Some("cpu".into()),
                                      top_k: 5,
                                      smiles: vec!["CCO".into(), "CC(=O)Nc1ccccc1".into()] });
    }

    #[test]
    fn rejects_bad_invocations() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["predict"])).is_err());
        assert!(parse_args(&args(&["predict", "--top-k", "x", "CCO"])).is_err());
        assert!(parse_args(&args(&["predict", "--model-dir"])).is_err());
        assert!(parse_args(&args(&["check", "CCO"])).is_err());
        assert!(parse_args(&args(&["train"])).is_err());
        assert!(parse_args(&args(&["check", "--verbose"])).is_err());
    }
}
