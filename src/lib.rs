// Internal library for testing purposes
// The `recombine` binary is the supported interface

pub mod codec;
pub mod commands;
pub mod consensus;
pub mod domain;
pub mod error;
pub mod lagrange;
pub mod pipeline;
pub mod radix;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

pub use error::{RecoverError, Result};
