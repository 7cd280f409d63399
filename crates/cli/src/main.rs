use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use fallback_models_core::registry::domain::manifest_url::ManifestUrl;
use fallback_models_core::registry::domain::model_name::ModelName;
use fallback_models_core::registry::domain::model_url_lookup::ModelUrlLookup;
use fallback_models_core::registry::infrastructure::static_registry::fallback_registry;

/// Look up fallback face model weight manifests.
#[derive(Parser)]
#[command(name = "fallback-models")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the manifest URL for a model (e.g. tinyFaceDetector).
    Get {
        /// Logical model name.
        name: String,

        /// Print the URL of this shard path instead, resolved next to the manifest.
        #[arg(long)]
        shard: Option<String>,
    },
    /// List every registered model.
    List {
        /// Emit a JSON array instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EntryRow<'a> {
    name: ModelName,
    url: &'a ManifestUrl,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = fallback_registry()?;

    match cli.command {
        Command::Get { name, shard } => {
            let manifest = registry.get(&name)?;
            match shard {
                Some(path) => {
                    log::info!("Resolving shard {path:?} for {name}");
                    println!("{}", manifest.shard_url(&path)?);
                }
                None => println!("{manifest}"),
            }
        }
        Command::List { json } => {
            let entries = registry.entries();
            let output = if json {
                format_json(&entries)?
            } else {
                format_lines(&entries)
            };
            println!("{output}");
        }
    }
    Ok(())
}

fn format_lines(entries: &[(ModelName, &ManifestUrl)]) -> String {
    entries
        .iter()
        .map(|(name, url)| format!("{name}\t{url}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_json(entries: &[(ModelName, &ManifestUrl)]) -> Result<String, serde_json::Error> {
    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|&(name, url)| EntryRow { name, url })
        .collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn entries() -> Vec<(ModelName, &'static ManifestUrl)> {
        fallback_registry().unwrap().entries()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_shard() {
        let cli = Cli::try_parse_from([
            "fallback-models",
            "get",
            "tinyFaceDetector",
            "--shard",
            "tiny_face_detector_model-shard1",
        ])
        .unwrap();
        match cli.command {
            Command::Get { name, shard } => {
                assert_eq!(name, "tinyFaceDetector");
                assert_eq!(shard.as_deref(), Some("tiny_face_detector_model-shard1"));
            }
            Command::List { .. } => panic!("expected get"),
        }
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["fallback-models"]).is_err());
    }

    #[test]
    fn test_format_lines_is_tab_separated_in_order() {
        let text = format_lines(&entries());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("tinyFaceDetector\thttps://"));
        assert!(lines[1].starts_with("faceExpression\thttps://"));
    }

    #[test]
    fn test_format_json_lists_name_and_url() {
        let json = format_json(&entries()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["name"], "faceExpression");
        assert_eq!(
            rows[1]["url"],
            "https://cdn.jsdelivr.net/gh/justadudewhohacks/face-api.js@master/weights/face_expression_model-weights_manifest.json"
        );
    }
}
