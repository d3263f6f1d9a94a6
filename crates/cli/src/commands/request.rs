//! `request` command - JSON body in, JSON body out

use anyhow::{Context, Result};
use depocalc_business::{BusinessError, DepositService, ErrorResponse};
use depocalc_core::{CoreError, DepositRequest};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// A rendered response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub ok: bool,
    pub body: String,
}

/// Read the body from `input` (or stdin), answer it and print the reply
pub fn run(service: &DepositService, input: Option<&Path>) -> Result<ExitCode> {
    let body = read_body(input)?;
    let reply = respond(service, &body)?;

    println!("{}", reply.body);
    Ok(if reply.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read the raw request body
pub fn read_body(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {:?}", path)),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request from stdin")?;
            Ok(body)
        }
    }
}

/// Parse, validate and calculate a JSON request
pub fn respond(service: &DepositService, body: &str) -> Result<Reply> {
    debug!(bytes = body.len(), "Received request body");

    let outcome = serde_json::from_str::<DepositRequest>(body)
        .map_err(|e| {
            BusinessError::from(CoreError::invalid_input(format!(
                "malformed request body: {}",
                e
            )))
        })
        .and_then(|request| service.handle(&request));

    match outcome {
        Ok(result) => Ok(Reply {
            ok: true,
            body: serde_json::to_string(&result).context("Failed to serialize result")?,
        }),
        Err(err) => Ok(Reply {
            ok: false,
            body: serde_json::to_string(&ErrorResponse::from(&err))
                .context("Failed to serialize error")?,
        }),
    }
}
