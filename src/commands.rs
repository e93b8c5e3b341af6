use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::codec::ShareDocument;
use crate::domain::{DecodedShare, Secret, Threshold};
use crate::pipeline::{self, DroppedShare, Reconstruction};
use crate::radix::decode_digits;

/// A share left out of a reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedReport {
    pub x: u64,
    pub base: u32,
    pub digits: String,
    pub reason: String,
}

impl From<&DroppedShare> for DroppedReport {
    fn from(dropped: &DroppedShare) -> Self {
        Self {
            x: dropped.record.x,
            base: dropped.record.base,
            digits: dropped.record.digits.clone(),
            reason: dropped.reason.to_string(),
        }
    }
}

/// Outcome of reconstructing one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretReport {
    /// 1-based position of the document in the input
    pub case: usize,
    pub secret: Secret,
    pub threshold: usize,
    pub support: usize,
    pub shares: Vec<DecodedShare>,
    pub dropped: Vec<DroppedReport>,
}

impl SecretReport {
    fn new(case: usize, threshold: Threshold, reconstruction: Reconstruction) -> Self {
        Self {
            case,
            secret: reconstruction.secret,
            threshold: *threshold,
            support: reconstruction.support,
            shares: reconstruction.shares,
            dropped: reconstruction.dropped.iter().map(DroppedReport::from).collect(),
        }
    }

    /// One-line human readable summary
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("Secret for Test Case {}: {}", self.case, self.secret)
    }
}

/// One row of an `inspect` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLine {
    pub x: u64,
    pub base: u32,
    pub digits: String,
    /// Decoded value in decimal, if the digits decode
    pub y: Option<String>,
    pub error: Option<String>,
}

impl ShareLine {
    #[must_use]
    pub fn to_line(&self) -> String {
        let outcome = match (&self.y, &self.error) {
            (Some(y), _) => format!("y = {y}"),
            (None, Some(error)) => format!("dropped: {error}"),
            (None, None) => String::from("dropped"),
        };
        format!("x = {} base {} \"{}\" -> {}", self.x, self.base, self.digits, outcome)
    }
}

/// Reconstruct the secret of a JSON share document
///
/// `threshold` overrides the document's own `k` when given.
///
/// # Errors
/// Returns an error if the document does not parse or no secret can be reconstructed
pub fn reconstruct_document(
    case: usize,
    json: &str,
    threshold: Option<Threshold>,
) -> Result<SecretReport> {
    // Parse the share document
    let mut document = ShareDocument::parse(json)
        .with_context(|| format!("Failed to parse share document #{case}"))?;

    // A command-line threshold takes precedence over the document's k
    if let Some(threshold) = threshold {
        document = document.with_threshold(threshold);
    }

    // Decode, select and interpolate
    let threshold = document.config().threshold();
    let reconstruction = pipeline::reconstruct_from(&document)
        .with_context(|| format!("Failed to reconstruct secret for document #{case}"))?;

    info!(
        case,
        secret = %reconstruction.secret,
        support = reconstruction.support,
        dropped = reconstruction.dropped.len(),
        "secret reconstructed"
    );

    Ok(SecretReport::new(case, threshold, reconstruction))
}

/// Decode every share of a JSON document without reconstructing
///
/// Undecodable shares are listed with the reason they would be dropped.
///
/// # Errors
/// Returns an error if the document does not parse
pub fn inspect_document(json: &str) -> Result<Vec<ShareLine>> {
    let document = ShareDocument::parse(json).context("Failed to parse share document")?;

    // Decode each share on its own, keeping the failure text
    let lines = document
        .records()
        .iter()
        .map(|record| {
            let decoded = decode_digits(&record.digits, record.base);
            ShareLine {
                x: record.x,
                base: record.base,
                digits: record.digits.clone(),
                y: decoded.as_ref().ok().map(ToString::to_string),
                error: decoded.err().map(|err| err.to_string()),
            }
        })
        .collect();

    Ok(lines)
}
