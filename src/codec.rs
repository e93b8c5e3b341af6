//! JSON share documents
//!
//! A document carries the problem parameters and one entry per share, keyed
//! by the share's x-coordinate:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `n` and `k` may also sit at the top level instead of under `"keys"`, and
//! `n` may be left out entirely. `n` is advisory: a document whose counts
//! disagree is still accepted, with a warning, and the pipeline judges the
//! shares actually present. Numeric fields accept JSON numbers of any width
//! or decimal strings.
//!
//! # Examples
//!
//! ```rust
//! use recombine::codec::ShareDocument;
//! use recombine::domain::ShareRecordSource;
//!
//! # fn main() -> anyhow::Result<()> {
//! let document: ShareDocument = r#"{
//!     "n": 3, "k": 2,
//!     "1": { "base": 10, "value": "4" },
//!     "2": { "base": 2, "value": "111" },
//!     "3": { "base": 10, "value": "12" }
//! }"#
//! .parse()?;
//!
//! assert_eq!(document.threshold(), 2);
//! assert_eq!(document.records()[1].digits, "111");
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{ProblemConfig, ShareCount, ShareRecord, ShareRecordSource, Threshold};

/// Key holding the nested `{ "n": .., "k": .. }` parameters
pub const PARAMETERS_KEY: &str = "keys";

/// Text of a field written as a JSON number or a string
///
/// serde_json keeps the literal of every number, so values wider than 64 bits
/// come through digit for digit.
fn number_text(value: &Value, field: &str) -> Result<String> {
    match value {
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        other => bail!("Field '{field}' must be a number or a string, got {other}"),
    }
}

/// Parses a count-like field (`n`, `k`, `base`)
fn parse_count(value: &Value, field: &str) -> Result<u64> {
    let text = number_text(value, field)?;
    text.trim()
        .parse()
        .with_context(|| format!("Field '{field}' is not a non-negative integer: '{text}'"))
}

#[derive(Debug, Default, Deserialize)]
struct RawParameters {
    n: Option<Value>,
    k: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    base: Value,
    value: Value,
}

/// A parsed, validated share document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    config: ProblemConfig,
    records: Vec<ShareRecord>,
}

impl ShareDocument {
    /// Parses a JSON share document
    ///
    /// Records come back sorted by x-coordinate.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, `k` is missing or below 2,
    /// a share key is not a positive integer, two keys name the same x, or a
    /// numeric field does not parse
    pub fn parse(json: &str) -> Result<Self> {
        let mut object: Map<String, Value> =
            serde_json::from_str(json).context("Share document is not a JSON object")?;

        // Parameters: nested under "keys" first, top level otherwise
        let nested = match object.remove(PARAMETERS_KEY) {
            Some(value) => serde_json::from_value::<RawParameters>(value)
                .with_context(|| format!("Invalid '{PARAMETERS_KEY}' object"))?,
            None => RawParameters::default(),
        };
        let top_n = object.remove("n");
        let top_k = object.remove("k");

        // Every remaining key is a share
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(object.len());
        for (key, value) in object {
            let x = parse_share_key(&key)?;
            if !seen.insert(x) {
                bail!("Share key '{key}' repeats x-coordinate {x}");
            }

            let entry: RawEntry = serde_json::from_value(value)
                .with_context(|| format!("Share '{key}' must be an object with 'base' and 'value'"))?;
            let base = parse_count(&entry.base, "base")?;
            // Out-of-range bases are the pipeline's to drop; only absurd ones stop here
            let base = u32::try_from(base)
                .map_err(|_| anyhow!("Share '{key}' has base {base} out of range"))?;
            let digits = number_text(&entry.value, "value")?;

            records.push(ShareRecord::new(x, base, digits));
        }
        records.sort_by_key(|record| record.x);

        let k = nested
            .k
            .or(top_k)
            .ok_or_else(|| anyhow!("Share document is missing the threshold 'k'"))?;
        let k = parse_count(&k, "k")?;
        let threshold = Threshold::new(usize::try_from(k).context("Threshold 'k' is too large")?)?;

        let declared = match nested.n.or(top_n) {
            Some(n) => {
                let n = parse_count(&n, "n")?;
                Some(ShareCount::new(
                    usize::try_from(n).context("Share count 'n' is too large")?,
                )?)
            }
            None => None,
        };
        let config = ProblemConfig::new(threshold, declared);

        // n is advisory: report disagreements, keep going
        for mismatch in config.mismatches(records.len()) {
            warn!(%mismatch, "share document counts disagree");
        }

        Ok(Self { config, records })
    }

    /// Gets the threshold and declared share count
    #[must_use]
    pub fn config(&self) -> ProblemConfig {
        self.config
    }

    /// Gets the share records, sorted by x-coordinate
    #[must_use]
    pub fn records(&self) -> &[ShareRecord] {
        &self.records
    }

    /// Replaces the document's threshold
    ///
    /// The declared `n` is not consulted; too few shares for the new
    /// threshold surface when reconstructing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.config = self.config.with_threshold(threshold);
        for mismatch in self.config.mismatches(self.records.len()) {
            warn!(%mismatch, "threshold override disagrees with declared count");
        }
        self
    }
}

impl FromStr for ShareDocument {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl ShareRecordSource for ShareDocument {
    fn threshold(&self) -> usize {
        *self.config.threshold()
    }

    fn declared_count(&self) -> usize {
        self.config
            .declared()
            .map_or(self.records.len(), |count| *count)
    }

    fn records(&self) -> Vec<ShareRecord> {
        self.records.clone()
    }
}

/// Share keys are positive decimal x-coordinates
fn parse_share_key(key: &str) -> Result<u64> {
    let x: u64 = key
        .trim()
        .parse()
        .with_context(|| format!("Share key '{key}' is not a positive integer"))?;
    if x == 0 {
        bail!("Share key '{key}' must be positive");
    }
    Ok(x)
}
