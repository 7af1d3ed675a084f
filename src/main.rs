/// Command-line entry point
/// This file is part of the outermost layer (Frameworks & Drivers)

use anyhow::Context;
use apigatewayv2::adapters::rest_json::{invoke_json, OPERATION_NAMES};
use apigatewayv2::config::ClientConfig;
use apigatewayv2::domain::{ExportApiRequest, Operation};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: apigatewayv2 <config.xml> <OperationName> [input.json]\n       apigatewayv2 --list-operations";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apigatewayv2=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--list-operations") {
        for name in OPERATION_NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    if args.len() < 2 || args.len() > 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config_path = PathBuf::from(&args[0]);
    let operation = args[1].as_str();

    tracing::info!("Loading configuration from: {}", config_path.display());
    let config = ClientConfig::from_file(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?
        .with_env_overrides()?;

    let input = match args.get(2) {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("input file {} is not valid JSON", path))?
        }
        None => serde_json::Value::Null,
    };

    let client = apigatewayv2::connect(&config)?;
    tracing::info!("Invoking {} against {}", operation, client.endpoint());

    // Exported definitions go out as the document itself, not base64 JSON
    if operation == ExportApiRequest::NAME {
        let request: ExportApiRequest = if input.is_null() {
            ExportApiRequest::new()
        } else {
            serde_json::from_value(input).context("invalid input for ExportApi")?
        };
        let export = client.execute(&request).await?;
        let mut stdout = std::io::stdout().lock();
        if let Some(body) = export.body() {
            stdout.write_all(body.as_bytes())?;
        }
        stdout.flush()?;
        return Ok(());
    }

    let output = invoke_json(&client, operation, input).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
