//! Subcommand implementations
//!
//! Each command writes its JSON document to `out` and never to stdout
//! directly, so the commands can be driven from tests.

use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use leakguard_schemas::{
    predict, ModelPackage, PredictionRequest, PredictionResponse, SchemaError,
};

use crate::cli::{ModelArgs, PredictArgs};

/// Run one prediction
///
/// Model and request problems are reported in the error envelope. Returns
/// `Ok(false)` in that case; `Err` is reserved for I/O failures.
pub fn run_predict<R: Read, W: Write>(args: &PredictArgs, stdin: R, mut out: W) -> Result<bool> {
    let body = read_request(args, stdin)?;
    let response = respond(args, &body);

    let json = response
        .to_json(args.pretty)
        .context("serializing prediction response")?;
    writeln!(out, "{}", json).context("writing prediction response")?;

    Ok(response.is_success())
}

fn read_request<R: Read>(args: &PredictArgs, mut stdin: R) -> Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display())),
        None => {
            let mut body = String::new();
            stdin
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            Ok(body)
        }
    }
}

fn respond(args: &PredictArgs, body: &str) -> PredictionResponse {
    let loaded = ModelPackage::from_path(&args.model.model)
        .and_then(|package| PredictionRequest::from_json_str(body).map(|request| (package, request)));

    match loaded {
        Ok((package, request)) => {
            tracing::debug!(sensors = request.sensor_count(), "Running prediction");
            predict(&package, &request, args.top)
        }
        Err(err) => {
            log_rejection(&err);
            err.into()
        }
    }
}

fn log_rejection(err: &SchemaError) {
    if err.is_request_error() {
        tracing::warn!("Request rejected: {}", err);
    } else {
        tracing::error!("Model package unusable: {}", err);
    }
}

/// Print a package's metadata and the configuration it resolves to
pub fn run_model_info<W: Write>(args: &ModelArgs, mut out: W) -> Result<()> {
    let package = ModelPackage::from_path(&args.model)?;
    let configuration = package
        .configuration()
        .with_context(|| format!("resolving configuration of {}", args.model.display()))?;

    let document = serde_json::json!({
        "metadata": package.metadata,
        "configuration": configuration,
    });

    let json = serde_json::to_string_pretty(&document).context("serializing model info")?;
    writeln!(out, "{}", json).context("writing model info")?;
    Ok(())
}
