//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and the share data model:
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 2)
//! - [`ShareCount`] - Declared number of shares in a problem (n >= 1)
//! - [`Radix`] - Base of a share's digit string (2..=36)
//! - [`ProblemConfig`] - Threshold plus the advisory declared share count
//! - [`ShareRecord`], [`DecodedShare`], [`Secret`] - Data flowing through the pipeline

mod config;
mod radix;
mod share;
mod share_count;
mod threshold;

pub use config::{CountMismatch, ProblemConfig};
pub use radix::Radix;
pub use share::{DecodedShare, Secret, ShareRecord, ShareRecordSource};
pub use share_count::ShareCount;
pub use threshold::Threshold;
