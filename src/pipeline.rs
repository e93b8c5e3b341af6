//! Decode, select and interpolate: one secret per problem instance
//!
//! Shares whose digits do not decode are dropped rather than failing the
//! run. Everything else that goes wrong surfaces as a [`RecoverError`]; no
//! partial or guessed secret is ever returned.

use std::collections::HashSet;

use tracing::debug;

use crate::consensus;
use crate::domain::{DecodedShare, Secret, ShareRecord, ShareRecordSource, Threshold};
use crate::error::{RecoverError, Result};
use crate::lagrange::interpolate_at_zero;
use crate::radix::decode_digits;

/// A record excluded from reconstruction and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedShare {
    pub record: ShareRecord,
    pub reason: RecoverError,
}

/// Result of decoding every record of an instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub shares: Vec<DecodedShare>,
    pub dropped: Vec<DroppedShare>,
}

/// A reconstructed secret together with the shares that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub secret: Secret,
    /// The k shares interpolated for the final answer
    pub shares: Vec<DecodedShare>,
    pub dropped: Vec<DroppedShare>,
    /// Number of k-subsets agreeing on the secret (1 when no selection ran)
    pub support: usize,
}

/// Decodes every record, keeping undecodable ones aside
///
/// # Errors
/// Returns [`RecoverError::DuplicateCoordinate`] if two records share an x
pub fn decode_records<I>(records: I) -> Result<DecodeOutcome>
where
    I: IntoIterator<Item = ShareRecord>,
{
    let mut seen = HashSet::new();
    let mut outcome = DecodeOutcome::default();

    for record in records {
        // Repeated x would make every subset containing both degenerate
        if !seen.insert(record.x) {
            return Err(RecoverError::DuplicateCoordinate(record.x));
        }

        // Undecodable digits drop the share, not the run
        match decode_digits(&record.digits, record.base) {
            Ok(y) => outcome.shares.push(DecodedShare::new(record.x, y)),
            Err(reason) => {
                debug!(x = record.x, base = record.base, %reason, "dropping share");
                outcome.dropped.push(DroppedShare { record, reason });
            }
        }
    }

    Ok(outcome)
}

/// Reconstructs the secret from `records` with threshold `threshold`
///
/// # Errors
/// See [`reconstruct_detailed`]
///
/// # Examples
///
/// ```rust
/// use recombine::domain::{ShareRecord, Threshold};
/// use recombine::pipeline::reconstruct;
///
/// let records = vec![
///     ShareRecord::new(1, 10, "6"),
///     ShareRecord::new(2, 2, "1111"),
///     ShareRecord::new(3, 16, "1c"),
/// ];
/// let secret = reconstruct(records, Threshold::new(3).unwrap()).unwrap();
/// assert_eq!(secret.to_string(), "1");
/// ```
pub fn reconstruct<I>(records: I, threshold: Threshold) -> Result<Secret>
where
    I: IntoIterator<Item = ShareRecord>,
{
    reconstruct_detailed(records, threshold).map(|reconstruction| reconstruction.secret)
}

/// Reconstructs the secret and reports which shares were used and dropped
///
/// # Errors
/// Returns [`RecoverError::DuplicateCoordinate`] for repeated x-coordinates,
/// [`RecoverError::InsufficientShares`] if fewer than k shares decode, and
/// [`RecoverError::NoValidCombination`] if no k-subset interpolates
pub fn reconstruct_detailed<I>(records: I, threshold: Threshold) -> Result<Reconstruction>
where
    I: IntoIterator<Item = ShareRecord>,
{
    let DecodeOutcome { shares, dropped } = decode_records(records)?;

    // Check if enough shares survived decoding
    let k = *threshold;
    if shares.len() < k {
        return Err(RecoverError::InsufficientShares {
            required: k,
            available: shares.len(),
        });
    }

    // Vote only when there is a choice to make
    let (chosen, support) = if shares.len() > k {
        let selection = consensus::select(&shares, threshold)?;
        (selection.shares, selection.support)
    } else {
        (shares, 1)
    };

    // Interpolate the chosen k shares at x = 0
    let secret = Secret::new(interpolate_at_zero(&chosen)?);

    Ok(Reconstruction {
        secret,
        shares: chosen,
        dropped,
        support,
    })
}

/// Reconstructs the instance supplied by `source`
///
/// # Errors
/// Returns [`RecoverError::ThresholdTooLow`] if the source's k is below 2,
/// otherwise as [`reconstruct_detailed`]
pub fn reconstruct_from<S>(source: &S) -> Result<Reconstruction>
where
    S: ShareRecordSource + ?Sized,
{
    let threshold = Threshold::new(source.threshold())?;
    reconstruct_detailed(source.records(), threshold)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    fn threshold(k: usize) -> Threshold {
        Threshold::new(k).unwrap()
    }

    #[test]
    fn test_mixed_bases_decode() {
        let records = vec![
            ShareRecord::new(1, 10, "4"),
            ShareRecord::new(2, 2, "111"),
            ShareRecord::new(3, 10, "12"),
        ];
        let outcome = decode_records(records).unwrap();
        assert_eq!(
            outcome.shares,
            vec![
                DecodedShare::new(1, 4),
                DecodedShare::new(2, 7),
                DecodedShare::new(3, 12),
            ]
        );
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn test_selection_runs_when_shares_exceed_threshold() {
        let records = vec![
            ShareRecord::new(1, 10, "4"),
            ShareRecord::new(2, 2, "111"),
            ShareRecord::new(3, 10, "12"),
        ];
        let reconstruction = reconstruct_detailed(records, threshold(2)).unwrap();
        assert_eq!(*reconstruction.secret, BigInt::from(1));
        assert_eq!(
            reconstruction.shares,
            vec![DecodedShare::new(1, 4), DecodedShare::new(2, 7)]
        );
    }

    #[test]
    fn test_undecodable_share_is_dropped() {
        let records = vec![
            ShareRecord::new(1, 10, "6"),
            ShareRecord::new(2, 10, "1g"),
            ShareRecord::new(3, 10, "28"),
            ShareRecord::new(4, 10, "45"),
        ];
        let reconstruction = reconstruct_detailed(records, threshold(3)).unwrap();
        assert_eq!(*reconstruction.secret, BigInt::from(1));
        assert_eq!(reconstruction.dropped.len(), 1);
        assert_eq!(reconstruction.dropped[0].record.x, 2);
        assert!(matches!(
            reconstruction.dropped[0].reason,
            RecoverError::InvalidCharacter { character: 'g', .. }
        ));
        assert!(reconstruction.shares.iter().all(|share| share.x != 2));
    }

    #[test]
    fn test_unsupported_base_is_dropped() {
        let records = vec![
            ShareRecord::new(1, 10, "4"),
            ShareRecord::new(2, 40, "7"),
            ShareRecord::new(3, 10, "12"),
        ];
        let reconstruction = reconstruct_detailed(records, threshold(2)).unwrap();
        assert_eq!(reconstruction.dropped[0].reason, RecoverError::InvalidBase(40));
        assert_eq!(*reconstruction.secret, BigInt::from(0));
    }

    #[test]
    fn test_too_few_after_dropping() {
        let records = vec![
            ShareRecord::new(1, 10, "4"),
            ShareRecord::new(2, 2, "2"),
            ShareRecord::new(3, 10, "12"),
        ];
        assert_eq!(
            reconstruct(records, threshold(3)),
            Err(RecoverError::InsufficientShares {
                required: 3,
                available: 2,
            })
        );
    }

    #[test]
    fn test_duplicate_x_is_configuration_error() {
        let records = vec![
            ShareRecord::new(1, 10, "4"),
            ShareRecord::new(1, 10, "5"),
            ShareRecord::new(2, 10, "7"),
        ];
        assert_eq!(
            reconstruct(records, threshold(2)),
            Err(RecoverError::DuplicateCoordinate(1))
        );
    }

    #[test]
    fn test_exact_threshold_skips_selection() {
        let records = vec![ShareRecord::new(2, 10, "7"), ShareRecord::new(3, 10, "12")];
        let reconstruction = reconstruct_detailed(records, threshold(2)).unwrap();
        assert_eq!(*reconstruction.secret, BigInt::from(-3));
        assert_eq!(reconstruction.support, 1);
    }
}
