//! Normalizes product payloads: one JSON object per input line, re-emitted
//! with every field present.

use std::io::{BufRead, Write};

use anyhow::Context;

use tracekit_products::Product;

/// Environment variable that turns rejected lines into a failing exit.
pub const STRICT_ENV: &str = "TRACEKIT_STRICT";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let strict = match std::env::var(STRICT_ENV) {
            Ok(value) => parse_flag(&value).unwrap_or_else(|| {
                tracing::warn!(env = STRICT_ENV, value = %value, "unrecognized flag value; strict mode off");
                false
            }),
            Err(_) => false,
        };
        Self { strict }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Counts from one normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Decode each non-blank line of `input` as a product payload and write the
/// complete payload to `output`. Bad lines are logged and skipped; only IO
/// failures abort.
pub fn normalize<R: BufRead, W: Write>(input: R, mut output: W) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (index, raw) in input.split(b'\n').enumerate() {
        let line_no = index + 1;
        let mut raw = raw.with_context(|| format!("failed to read line {line_no}"))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(line = line_no, error = %err, "skipping non-UTF-8 product payload");
                summary.rejected += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let encoded = Product::from_json(&line).and_then(|product| product.to_json());
        match encoded {
            Ok(json) => {
                writeln!(output, "{json}")
                    .with_context(|| format!("failed to write line {line_no}"))?;
                summary.accepted += 1;
            }
            Err(err) => {
                tracing::warn!(line = line_no, error = %err, "skipping product payload");
                summary.rejected += 1;
            }
        }
    }

    output.flush().context("failed to flush output")?;
    Ok(summary)
}
