//! Property tests for consensus selection

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use recombine::consensus::select;
use recombine::domain::{DecodedShare, Threshold};
use recombine::lagrange::interpolate_at_zero;

/// Between 2 and 7 shares with distinct x and a threshold they can meet
#[derive(Clone, Debug)]
struct ShareSet {
    shares: Vec<DecodedShare>,
    k: usize,
}

impl Arbitrary for ShareSet {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 6 + 2; // 2..=7
        let k = usize::arbitrary(g) % (n - 1) + 2; // 2..=n

        let mut shares: Vec<DecodedShare> = Vec::with_capacity(n);
        while shares.len() < n {
            let x = u64::arbitrary(g) % 30 + 1;
            if shares.iter().all(|share| share.x != x) {
                shares.push(DecodedShare::new(x, i32::arbitrary(g)));
            }
        }

        ShareSet { shares, k }
    }
}

#[quickcheck]
fn prop_selects_k_input_shares(set: ShareSet) -> bool {
    let Ok(selection) = select(&set.shares, Threshold::new(set.k).unwrap()) else {
        return false;
    };

    selection.shares.len() == set.k
        && selection
            .shares
            .iter()
            .all(|share| set.shares.contains(share))
}

#[quickcheck]
fn prop_selection_is_deterministic(set: ShareSet) -> bool {
    let threshold = Threshold::new(set.k).unwrap();
    select(&set.shares, threshold) == select(&set.shares, threshold)
}

#[quickcheck]
fn prop_secret_matches_chosen_subset(set: ShareSet) -> bool {
    let Ok(selection) = select(&set.shares, Threshold::new(set.k).unwrap()) else {
        return false;
    };

    interpolate_at_zero(&selection.shares) == Ok(selection.secret)
}

#[quickcheck]
fn prop_exact_threshold_is_identity(set: ShareSet) -> bool {
    let k = set.shares.len();
    let Ok(selection) = select(&set.shares, Threshold::new(k).unwrap()) else {
        return false;
    };

    selection.shares == set.shares && selection.support == 1
}
