#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod model;

use std::{
    io::{Read, Write},
    path::Path,
};

use args::{Args, Command};
use clap::Parser;
use model::ModelKind;
use watson_config::{Config, EncodingConfig};
use watson_core::AbsentFields;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    watson_telemetry::init(config.telemetry.as_ref())?;

    match args.command {
        Command::Normalize {
            model,
            absent_fields,
            input,
        } => {
            let absent = absent_fields.map_or(config.encoding.absent_fields, AbsentFields::from);
            let payload = read_input(&input)?;
            let output = normalize(model, &payload, absent, &config.encoding)?;
            writeln!(std::io::stdout().lock(), "{output}")?;
        }
        Command::Fields { model } => {
            write!(std::io::stdout().lock(), "{}", model::describe(model.fields()))?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut payload = String::new();
        std::io::stdin()
            .read_to_string(&mut payload)
            .map_err(|e| anyhow::anyhow!("failed to read payload from stdin: {e}"))?;
        return Ok(payload);
    }

    std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("failed to read payload {}: {e}", path.display()))
}

fn normalize(model: ModelKind, payload: &str, absent: AbsentFields, encoding: &EncodingConfig) -> anyhow::Result<String> {
    let value = model.normalize(payload, absent).map_err(|e| {
        tracing::warn!(model = model.name(), error = %e, "payload rejected");
        anyhow::anyhow!(e)
    })?;

    tracing::info!(model = model.name(), ?absent, "normalized payload");

    let rendered = if encoding.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(rendered)
}
