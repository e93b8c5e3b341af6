//! Consensus selection of a trustworthy k-subset
//!
//! When more shares than the threshold are available some of them may be
//! corrupted. Every k-subset is interpolated on its own and each resulting
//! secret is voted for once per subset that produces it. The most frequent
//! secret wins; ties go to the secret whose first producing subset comes
//! earliest in lexicographic index order, and that subset is returned.
//!
//! The search is exhaustive, `C(n, k)` interpolations, which keeps it exact
//! under outliers but limits it to small share counts.

use std::collections::HashMap;

use num_bigint::BigInt;
use tracing::debug;

use crate::domain::{DecodedShare, Threshold};
use crate::error::{RecoverError, Result};
use crate::lagrange::interpolate_at_zero;

/// Lexicographic generator of k-element index subsets of `0..n`
///
/// ```rust
/// use recombine::consensus::Combinations;
///
/// let all: Vec<_> = Combinations::new(4, 2).collect();
/// assert_eq!(all, vec![
///     vec![0, 1], vec![0, 2], vec![0, 3],
///     vec![1, 2], vec![1, 3], vec![2, 3],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
    started: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
            started: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.exhausted = true;
            return None;
        };

        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Outcome of a consensus search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The chosen k shares, in input order
    pub shares: Vec<DecodedShare>,
    /// Secret the chosen subset interpolates to
    pub secret: BigInt,
    /// Number of subsets that produced `secret`
    pub support: usize,
    /// Number of subsets that interpolated successfully
    pub valid_combinations: usize,
}

#[derive(Debug)]
struct Vote {
    count: usize,
    first_seen: usize,
    indices: Vec<usize>,
}

/// Picks the k-subset of `shares` whose secret is corroborated by the most subsets
///
/// With exactly k shares the only subset is the input itself.
///
/// # Errors
/// Returns [`RecoverError::InsufficientShares`] if fewer than k shares are
/// given, or [`RecoverError::NoValidCombination`] if no subset interpolates
pub fn select(shares: &[DecodedShare], threshold: Threshold) -> Result<Selection> {
    let k = *threshold;
    if shares.len() < k {
        return Err(RecoverError::InsufficientShares {
            required: k,
            available: shares.len(),
        });
    }

    // Tally one vote per k-subset, in lexicographic order
    let mut votes: HashMap<BigInt, Vote> = HashMap::new();
    let mut valid_combinations = 0;
    let mut subset = Vec::with_capacity(k);

    for (ordinal, indices) in Combinations::new(shares.len(), k).enumerate() {
        subset.clear();
        subset.extend(indices.iter().map(|&i| shares[i].clone()));

        // Degenerate subsets cast no vote
        let secret = match interpolate_at_zero(&subset) {
            Ok(secret) => secret,
            Err(err) => {
                debug!(?indices, %err, "combination failed to interpolate");
                continue;
            }
        };

        valid_combinations += 1;
        votes
            .entry(secret)
            .and_modify(|vote| vote.count += 1)
            .or_insert(Vote {
                count: 1,
                first_seen: ordinal,
                indices,
            });
    }

    // Most votes wins; ties go to the secret seen first
    let distinct = votes.len();
    let (secret, vote) = votes
        .into_iter()
        .max_by(|(_, a), (_, b)| {
            a.count
                .cmp(&b.count)
                .then_with(|| b.first_seen.cmp(&a.first_seen))
        })
        .ok_or(RecoverError::NoValidCombination {
            shares: shares.len(),
            threshold: k,
        })?;

    debug!(
        %secret,
        support = vote.count,
        valid_combinations,
        distinct,
        "consensus reached"
    );

    Ok(Selection {
        shares: vote.indices.iter().map(|&i| shares[i].clone()).collect(),
        secret,
        support: vote.count,
        valid_combinations,
    })
}
