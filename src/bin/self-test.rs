/*!
 * peaks-strings Self-Test Program
 *
 * Runs the canonical hex codec vectors against the library and writes a
 * JSON report. Vectors are embedded at build time; set PEAKS_TEST_VECTORS
 * to a JSON file to run a different set. The first argument, when given,
 * is the report path.
 *
 * Logging goes through tracing; set RUST_LOG=debug to see codec failures.
 */

#![warn(clippy::all, clippy::pedantic)]
#![forbid(unsafe_code)]

use std::fs;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use peaks_strings::{Hex, PeaksError};

const DEFAULT_VECTORS_JSON: &str = include_str!("../../tests/vectors/codec-vectors.json");

/* Vector file structures */
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Vectors {
    encode: Vec<EncodeVector>,
    decode: Vec<DecodeVector>,
    text: Vec<TextVector>,
    invalid_text: Vec<InvalidTextVector>,
}

#[derive(Debug, Deserialize)]
struct EncodeVector {
    name: String,
    bytes: Vec<u8>,
    expected: String,
}

/// `expected: null` means the input must fail to decode
#[derive(Debug, Deserialize)]
struct DecodeVector {
    name: String,
    input: String,
    expected: Option<Vec<u8>>,
}

#[derive(Debug, Deserialize)]
struct TextVector {
    name: String,
    text: String,
    hex: String,
}

#[derive(Debug, Deserialize)]
struct InvalidTextVector {
    name: String,
    input: String,
}

/* Report structures */
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseResult {
    group: &'static str,
    name: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    library: &'static str,
    version: &'static str,
    timestamp: String,
    passed: usize,
    total: usize,
    cases: Vec<CaseResult>,
}

struct SelfTestRunner {
    vectors: Vectors,
    cases: Vec<CaseResult>,
}

impl SelfTestRunner {
    fn new() -> Result<Self> {
        let vectors = match std::env::var("PEAKS_TEST_VECTORS") {
            Ok(path) => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Cannot open vector file: {path}"))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse vector file: {path}"))?
            }
            Err(_) => serde_json::from_str(DEFAULT_VECTORS_JSON)
                .context("Failed to parse embedded vectors")?,
        };

        Ok(Self {
            vectors,
            cases: Vec::new(),
        })
    }

    fn record(&mut self, group: &'static str, name: &str, passed: bool, detail: Option<String>) {
        let status = if passed { "PASS".green() } else { "FAIL".red() };
        println!("  {status}: {group}/{name}");
        if !passed {
            if let Some(detail) = &detail {
                println!("    {}", detail.red());
            }
        }
        self.cases.push(CaseResult {
            group,
            name: name.to_string(),
            passed,
            detail,
        });
    }

    fn run_encode(&mut self) {
        let results: Vec<_> = self
            .vectors
            .encode
            .iter()
            .map(|v| {
                let actual = Hex::encode(&v.bytes);
                let passed = actual == v.expected.as_str() && actual.len() == 2 * v.bytes.len();
                (v.name.clone(), passed, format!("expected {:?}, got {:?}", v.expected, actual.as_str()))
            })
            .collect();

        for (name, passed, detail) in results {
            self.record("encode", &name, passed, Some(detail));
        }
    }

    fn run_decode(&mut self) {
        let results: Vec<_> = self
            .vectors
            .decode
            .iter()
            .map(|v| {
                let actual = Hex::decode(&v.input);
                let passed = match (&v.expected, &actual) {
                    (Some(expected), Ok(bytes)) => expected == bytes,
                    (None, Err(PeaksError::Decode)) => true,
                    _ => false,
                };
                (v.name.clone(), passed, format!("expected {:?}, got {actual:?}", v.expected))
            })
            .collect();

        for (name, passed, detail) in results {
            self.record("decode", &name, passed, Some(detail));
        }
    }

    fn run_text(&mut self) {
        let results: Vec<_> = self
            .vectors
            .text
            .iter()
            .map(|v| {
                let hex = Hex::text_to_hex(&v.text);
                let back = Hex::hex_to_text(&v.hex);
                let passed = hex == v.hex.as_str() && back.as_deref() == Ok(v.text.as_str());
                (v.name.clone(), passed, format!("encoded {:?}, decoded {back:?}", hex.as_str()))
            })
            .collect();

        for (name, passed, detail) in results {
            self.record("text", &name, passed, Some(detail));
        }

        let invalid: Vec<_> = self
            .vectors
            .invalid_text
            .iter()
            .map(|v| {
                let actual = Hex::hex_to_text(&v.input);
                let passed = matches!(&actual, Err(e) if e.is_encoding_error());
                (v.name.clone(), passed, format!("expected encoding error, got {actual:?}"))
            })
            .collect();

        for (name, passed, detail) in invalid {
            self.record("invalidText", &name, passed, Some(detail));
        }
    }

    fn run_all(&mut self) {
        println!("{}", "═══════════════════════════════════════════".blue());
        println!("{}", "       peaks-strings Hex Codec Self-Test".blue());
        println!("{}", "═══════════════════════════════════════════".blue());

        self.run_encode();
        self.run_decode();
        self.run_text();
    }

    fn report(self) -> Report {
        Report {
            library: "peaks-strings",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            passed: self.cases.iter().filter(|c| c.passed).count(),
            total: self.cases.len(),
            cases: self.cases,
        }
    }
}

fn save_report(report: &Report, path: &str) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json_output).with_context(|| format!("Cannot create report file: {path}"))?;
    info!(path, "report written");
    println!("\n{} {path}", "Report saved to:".blue());
    Ok(())
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut runner = SelfTestRunner::new().context("Failed to initialize test runner")?;
    runner.run_all();
    let report = runner.report();

    let summary = format!("\nTests Passed: {}/{}", report.passed, report.total);
    if report.passed == report.total {
        println!("{}", summary.green());
    } else {
        warn!(failed = report.total - report.passed, "self-test failures");
        println!("{}", summary.red());
    }

    if let Some(path) = std::env::args().nth(1) {
        save_report(&report, &path)?;
    }

    if report.passed != report.total {
        std::process::exit(1);
    }
    Ok(())
}
